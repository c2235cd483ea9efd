//! iNES container reader.
//!
//! Only the fields needed to locate CHR ROM are interpreted: the signature,
//! the PRG bank count (byte 4) and the CHR bank count (byte 5). Mapper,
//! mirroring and trainer flags are ignored, so ROMs with a trainer will
//! misdecode.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{TileError, try_alloc};
use crate::util::format_bytes;
use crate::ReadSeek;

/// Size of the fixed iNES header.
pub const HEADER_SIZE: usize = 16;

/// iNES signature: "NES" followed by MS-DOS EOF.
pub const INES_MAGIC: [u8; 4] = [b'N', b'E', b'S', 0x1A];

/// Size of one PRG ROM bank.
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// Size of one CHR ROM bank.
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// A parsed cartridge image, reduced to its CHR ROM.
#[derive(Debug, Clone)]
pub struct RomImage {
    prg_bank_count: u8,
    chr_bank_count: u8,
    chr_data: Vec<u8>,
}

impl RomImage {
    /// Open and parse an iNES file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TileError> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read(&mut reader)
    }

    /// Parse an iNES image from a reader positioned at the start of the file.
    pub fn read(reader: &mut dyn ReadSeek) -> Result<Self, TileError> {
        let header = read_header(reader)?;

        if header[0..4] != INES_MAGIC {
            let mut found = [0u8; 4];
            found.copy_from_slice(&header[0..4]);
            return Err(TileError::InvalidSignature { found });
        }

        let prg_bank_count = header[4];
        let chr_bank_count = header[5];
        if chr_bank_count == 0 {
            return Err(TileError::NoChrData);
        }

        let prg_size = prg_bank_count as usize * PRG_BANK_SIZE;
        let chr_size = chr_bank_count as usize * CHR_BANK_SIZE;
        log::debug!(
            "iNES header: {} PRG bank(s) ({}), {} CHR bank(s) ({})",
            prg_bank_count,
            format_bytes(prg_size as u64),
            chr_bank_count,
            format_bytes(chr_size as u64),
        );

        reader.seek(SeekFrom::Current(prg_size as i64))?;

        let mut chr_data = try_alloc::<u8>(chr_size)?;
        let actual = (&mut *reader)
            .take(chr_size as u64)
            .read_to_end(&mut chr_data)?;
        if actual != chr_size {
            return Err(TileError::TruncatedChr {
                expected: chr_size,
                actual,
            });
        }

        Ok(Self {
            prg_bank_count,
            chr_bank_count,
            chr_data,
        })
    }

    pub fn prg_bank_count(&self) -> u8 {
        self.prg_bank_count
    }

    pub fn chr_bank_count(&self) -> u8 {
        self.chr_bank_count
    }

    pub fn chr_data(&self) -> &[u8] {
        &self.chr_data
    }

    /// Consume the image, keeping only the CHR bytes.
    pub fn into_chr_data(self) -> Vec<u8> {
        self.chr_data
    }
}

fn read_header(reader: &mut dyn ReadSeek) -> Result<[u8; HEADER_SIZE], TileError> {
    let mut header = [0u8; HEADER_SIZE];
    let mut filled = 0;
    while filled < HEADER_SIZE {
        match reader.read(&mut header[filled..]) {
            Ok(0) => return Err(TileError::HeaderTooShort { actual: filled }),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TileError::Io(e)),
        }
    }
    Ok(header)
}

#[cfg(test)]
#[path = "tests/ines_tests.rs"]
mod tests;
