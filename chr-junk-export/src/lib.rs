//! Tilesheet composition and metadata output.
//!
//! Takes decoded tiles from `chr-junk-core` and turns them into PNG images,
//! either one sheet or one file per tile, plus an optional JSON/XML
//! description of where each tile sits.

pub mod error;
pub mod layout;
pub mod metadata;
pub mod progress;
pub mod sink;

pub use error::ExportError;
pub use layout::{OutputMode, compose, render_sheet, render_tile};
pub use metadata::{Metadata, MetadataFormat, TileRecord, write_metadata};
pub use progress::{ExportProgress, LogProgress, SilentProgress};
pub use sink::{ImageSink, PngSink};
