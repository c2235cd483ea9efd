//! Arrange decoded tiles into images.
//!
//! Both output modes share the same 16-wide grid, so tile positions in the
//! metadata are identical whether the tiles land in one sheet or in
//! separate files.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, imageops};

use chr_junk_core::error::try_alloc;
use chr_junk_core::util::tile_file_name;
use chr_junk_core::{Palette, TILES_PER_ROW, Tile, TileSpec};

use crate::metadata::{Position, TileRecord};
use crate::progress::{ExportProgress, is_report_point};
use crate::sink::ImageSink;
use crate::ExportError;

/// Where and how the rendered tiles are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// One image containing every tile, written to this path.
    Sheet(PathBuf),
    /// One image per tile, written into this directory.
    Directory(PathBuf),
}

impl OutputMode {
    pub fn path(&self) -> &Path {
        match self {
            OutputMode::Sheet(p) | OutputMode::Directory(p) => p,
        }
    }

    /// Filename recorded in the metadata for tile `index` (0-based).
    pub fn tile_label(&self, index: usize) -> String {
        match self {
            OutputMode::Sheet(path) => path.display().to_string(),
            OutputMode::Directory(_) => tile_file_name(index),
        }
    }
}

/// Pixel dimensions of a sheet holding `tile_count` tiles.
pub fn sheet_dimensions(tile_count: usize, spec: &TileSpec) -> (u32, u32) {
    let rows = tile_count.div_ceil(TILES_PER_ROW) as u32;
    (TILES_PER_ROW as u32 * spec.width(), rows * spec.height())
}

/// Map a tile's palette indices to RGB.
pub fn render_tile(tile: &Tile, palette: &Palette) -> RgbImage {
    RgbImage::from_fn(tile.width(), tile.height(), |x, y| {
        Rgb(palette.color(tile.pixel(x, y)))
    })
}

/// Render every tile into one black-filled sheet.
pub fn render_sheet(
    tiles: &[Tile],
    palette: &Palette,
    spec: &TileSpec,
    progress: &dyn ExportProgress,
) -> Result<RgbImage, ExportError> {
    let (width, height) = sheet_dimensions(tiles.len(), spec);
    let len = width as usize * height as usize * 3;
    let mut buf = try_alloc::<u8>(len)?;
    buf.resize(len, 0);
    let mut sheet = RgbImage::from_raw(width, height, buf).ok_or_else(|| {
        ExportError::invalid_layout(format!("sheet buffer too small for {width}x{height}"))
    })?;

    let total = tiles.len();
    for (t, tile) in tiles.iter().enumerate() {
        check_tile(tile, spec, t)?;
        let (x, y) = spec.grid_position(t);
        imageops::replace(&mut sheet, &render_tile(tile, palette), x as i64, y as i64);

        if is_report_point(t + 1, total) {
            progress.on_tile(t + 1, total);
        }
    }

    Ok(sheet)
}

/// Metadata records for `tile_count` tiles laid out by `mode`.
pub fn tile_records(
    tile_count: usize,
    spec: &TileSpec,
    mode: &OutputMode,
) -> Result<Vec<TileRecord>, ExportError> {
    let mut records = try_alloc::<TileRecord>(tile_count)?;
    records.extend((0..tile_count).map(|t| {
        let (x, y) = spec.grid_position(t);
        TileRecord {
            index: t + 1,
            filename: mode.tile_label(t),
            position: Position { x, y },
        }
    }));
    Ok(records)
}

/// Render `tiles` according to `mode`, handing each image to `sink`.
///
/// Returns one metadata record per tile, in CHR order.
pub fn compose(
    tiles: &[Tile],
    palette: &Palette,
    spec: &TileSpec,
    mode: &OutputMode,
    sink: &mut dyn ImageSink,
    progress: &dyn ExportProgress,
) -> Result<Vec<TileRecord>, ExportError> {
    let records = tile_records(tiles.len(), spec, mode)?;

    match mode {
        OutputMode::Sheet(path) => {
            let sheet = render_sheet(tiles, palette, spec, progress)?;
            sink.write_rgb(path, &sheet)?;
            log::debug!(
                "Wrote {}x{} tilesheet to {}",
                sheet.width(),
                sheet.height(),
                path.display()
            );
        }
        OutputMode::Directory(dir) => {
            fs::create_dir_all(dir)?;
            let total = tiles.len();
            for (t, (tile, record)) in tiles.iter().zip(&records).enumerate() {
                check_tile(tile, spec, t)?;
                sink.write_rgb(&dir.join(&record.filename), &render_tile(tile, palette))?;

                if is_report_point(t + 1, total) {
                    progress.on_tile(t + 1, total);
                }
            }
        }
    }

    progress.on_complete(tiles.len());
    Ok(records)
}

fn check_tile(tile: &Tile, spec: &TileSpec, index: usize) -> Result<(), ExportError> {
    if tile.width() != spec.width() || tile.height() != spec.height() {
        return Err(ExportError::invalid_layout(format!(
            "tile {} is {}x{}, expected {}x{}",
            index + 1,
            tile.width(),
            tile.height(),
            spec.width(),
            spec.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
