//! NES 2bpp planar tile decoding.
//!
//! Each tile row is split across two bit-planes. For a tile `h` rows tall the
//! first `h` bytes hold the low bit of every row and the next `h` bytes hold
//! the high bit. Bit 7 of each plane byte is the leftmost column.

use crate::error::{TileError, try_alloc};

/// Number of tiles per row in every grid layout.
pub const TILES_PER_ROW: usize = 16;

/// Widest tile the format can express: one plane byte per row.
pub const MAX_TILE_WIDTH: u32 = 8;

/// Dimensions above this are accepted but logged as unusual.
pub const LARGE_TILE_THRESHOLD: u32 = 16;

/// Tile dimensions used to slice and decode CHR data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    width: u32,
    height: u32,
}

impl Default for TileSpec {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
        }
    }
}

impl TileSpec {
    /// Validate tile dimensions.
    ///
    /// Widths above [`MAX_TILE_WIDTH`] are rejected since a plane byte only
    /// carries eight columns.
    pub fn new(width: u32, height: u32) -> Result<Self, TileError> {
        if width == 0 {
            return Err(TileError::invalid_tile_size(
                "tile width must be a positive integer",
            ));
        }
        if height == 0 {
            return Err(TileError::invalid_tile_size(
                "tile height must be a positive integer",
            ));
        }
        if width > MAX_TILE_WIDTH {
            return Err(TileError::invalid_tile_size(format!(
                "tile width {} exceeds the {} columns stored per plane byte",
                width, MAX_TILE_WIDTH
            )));
        }
        if height > LARGE_TILE_THRESHOLD {
            log::warn!(
                "Unusually large tile size ({}x{}) may impact performance and output readability",
                width,
                height
            );
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes consumed by one tile: two planes, one byte per row each.
    pub fn bytes_per_tile(&self) -> usize {
        self.height as usize * 2
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Top-left pixel of tile `index` (0-based) in a [`TILES_PER_ROW`]-wide grid.
    pub fn grid_position(&self, index: usize) -> (u32, u32) {
        let col = (index % TILES_PER_ROW) as u32;
        let row = (index / TILES_PER_ROW) as u32;
        (col * self.width, row * self.height)
    }
}

/// One decoded tile. Every pixel is a palette index in `0..=3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Tile {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major palette indices, `width * height` entries.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Number of whole tiles in `chr_len` bytes, or a size mismatch error.
pub fn tile_count(chr_len: usize, spec: &TileSpec) -> Result<usize, TileError> {
    let bytes_per_tile = spec.bytes_per_tile();
    if !chr_len.is_multiple_of(bytes_per_tile) {
        return Err(TileError::SizeMismatch {
            chr_size: chr_len,
            bytes_per_tile,
        });
    }
    Ok(chr_len / bytes_per_tile)
}

/// Decode CHR data into tiles, in the order they appear in memory.
pub fn decode_tiles(chr: &[u8], spec: &TileSpec) -> Result<Vec<Tile>, TileError> {
    let count = tile_count(chr.len(), spec)?;
    let mut tiles = try_alloc::<Tile>(count)?;

    for raw in chr.chunks_exact(spec.bytes_per_tile()) {
        tiles.push(decode_tile(raw, spec)?);
    }

    log::debug!(
        "Decoded {} tiles of {}x{} from {} bytes of CHR",
        tiles.len(),
        spec.width,
        spec.height,
        chr.len()
    );
    Ok(tiles)
}

/// Decode a single tile from exactly `spec.bytes_per_tile()` bytes.
pub fn decode_tile(raw: &[u8], spec: &TileSpec) -> Result<Tile, TileError> {
    if raw.len() != spec.bytes_per_tile() {
        return Err(TileError::SizeMismatch {
            chr_size: raw.len(),
            bytes_per_tile: spec.bytes_per_tile(),
        });
    }

    let height = spec.height as usize;
    let (low_plane, high_plane) = raw.split_at(height);
    let mut pixels = try_alloc::<u8>(spec.pixel_count())?;

    for (&lo, &hi) in low_plane.iter().zip(high_plane) {
        for col in 0..spec.width {
            let shift = 7 - col;
            let bit0 = (lo >> shift) & 1;
            let bit1 = (hi >> shift) & 1;
            pixels.push((bit1 << 1) | bit0);
        }
    }

    Ok(Tile {
        width: spec.width,
        height: spec.height,
        pixels,
    })
}

#[cfg(test)]
#[path = "tests/tile_tests.rs"]
mod tests;
