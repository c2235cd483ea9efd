use thiserror::Error;

/// Broad category of a failure, used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments, bad palette file, unsupported tile size
    Config,
    /// The ROM contents do not describe extractable tile data
    Format,
    /// Reading or writing failed, or the file ended early
    Io,
    /// A buffer could not be allocated
    Resource,
}

/// Errors that can occur while reading a ROM or decoding its tiles.
#[derive(Debug, Error)]
pub enum TileError {
    /// I/O error while reading the ROM or palette
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the 16-byte iNES header was complete
    #[error("ROM header too short: expected 16 bytes, got {actual}")]
    HeaderTooShort { actual: usize },

    /// The first four bytes are not `NES\x1A`
    #[error("Invalid iNES header: signature bytes {found:02X?}")]
    InvalidSignature { found: [u8; 4] },

    /// The header declares zero CHR banks
    #[error("No CHR ROM found")]
    NoChrData,

    /// The file ended before the declared CHR region was complete
    #[error("Error reading CHR ROM: expected {expected} bytes, got {actual}")]
    TruncatedChr { expected: usize, actual: usize },

    /// CHR length is not a whole number of tiles
    #[error(
        "CHR ROM size ({chr_size} bytes) is not divisible by the bytes per tile \
         ({bytes_per_tile} bytes). Please choose a different tile size."
    )]
    SizeMismatch {
        chr_size: usize,
        bytes_per_tile: usize,
    },

    /// Tile dimensions outside what the 2bpp planar format can express
    #[error("Invalid tile size: {0}")]
    InvalidTileSize(String),

    /// Palette file did not contain four valid RGB lines
    #[error("Palette line {line}: {reason}")]
    Palette { line: usize, reason: String },

    /// A buffer allocation was refused
    #[error("Memory allocation failed for {bytes} bytes")]
    Allocation { bytes: usize },
}

impl TileError {
    pub fn invalid_tile_size(msg: impl Into<String>) -> Self {
        Self::InvalidTileSize(msg.into())
    }

    pub fn palette(line: usize, reason: impl Into<String>) -> Self {
        Self::Palette {
            line,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::TruncatedChr { .. } => ErrorKind::Io,
            Self::HeaderTooShort { .. }
            | Self::InvalidSignature { .. }
            | Self::NoChrData
            | Self::SizeMismatch { .. } => ErrorKind::Format,
            Self::InvalidTileSize(_) | Self::Palette { .. } => ErrorKind::Config,
            Self::Allocation { .. } => ErrorKind::Resource,
        }
    }
}

/// Allocate an empty buffer with room for exactly `len` elements,
/// reporting refusal as [`TileError::Allocation`].
pub fn try_alloc<T>(len: usize) -> Result<Vec<T>, TileError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| TileError::Allocation {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    Ok(buf)
}
