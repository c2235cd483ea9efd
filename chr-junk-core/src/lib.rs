//! Core of the CHR tile extractor.
//!
//! Parses iNES cartridge images, decodes the NES 2bpp planar tile format and
//! maps pixel indices through a four-color palette.

use std::io::{Read, Seek};

pub mod error;
pub mod ines;
pub mod palette;
pub mod tile;
pub mod util;

pub use error::{ErrorKind, TileError};
pub use ines::RomImage;
pub use palette::Palette;
pub use tile::{TILES_PER_ROW, Tile, TileSpec, decode_tiles};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
