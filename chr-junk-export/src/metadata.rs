//! Tile layout metadata in JSON or XML.
//!
//! Both formats carry the same fields: tile size, grid width, tile count and
//! one record per tile with its 1-based index, source filename and the
//! top-left pixel of the tile in the grid.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;

use chr_junk_core::{TILES_PER_ROW, TileSpec};

use crate::ExportError;

/// Serialization used for the metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataFormat {
    #[default]
    Json,
    Xml,
}

impl MetadataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataFormat::Json => "json",
            MetadataFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(MetadataFormat::Json),
            "xml" => Ok(MetadataFormat::Xml),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Top-left pixel of a tile within its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Metadata for one exported tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileRecord {
    /// 1-based position in CHR order
    pub index: usize,
    /// Sheet path in sheet mode, tile file name in directory mode
    pub filename: String,
    pub position: Position,
}

/// Full metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub tile_width: u32,
    pub tile_height: u32,
    pub tiles_per_row: usize,
    pub total_tiles: usize,
    pub tiles: Vec<TileRecord>,
}

impl Metadata {
    pub fn new(spec: &TileSpec, tiles: Vec<TileRecord>) -> Self {
        Self {
            tile_width: spec.width(),
            tile_height: spec.height(),
            tiles_per_row: TILES_PER_ROW,
            total_tiles: tiles.len(),
            tiles,
        }
    }

    pub fn render(&self, format: MetadataFormat) -> Result<String, ExportError> {
        match format {
            MetadataFormat::Json => self.to_json(),
            MetadataFormat::Xml => self.to_xml(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn to_xml(&self) -> Result<String, ExportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(ExportError::xml)?;
        writer
            .write_event(Event::Start(BytesStart::new("Tilesheet")))
            .map_err(ExportError::xml)?;

        write_text_element(&mut writer, "TileWidth", &self.tile_width.to_string())?;
        write_text_element(&mut writer, "TileHeight", &self.tile_height.to_string())?;
        write_text_element(&mut writer, "TilesPerRow", &self.tiles_per_row.to_string())?;
        write_text_element(&mut writer, "TotalTiles", &self.total_tiles.to_string())?;

        writer
            .write_event(Event::Start(BytesStart::new("Tiles")))
            .map_err(ExportError::xml)?;
        for tile in &self.tiles {
            let index = tile.index.to_string();
            writer
                .write_event(Event::Start(
                    BytesStart::new("Tile").with_attributes([("index", index.as_str())]),
                ))
                .map_err(ExportError::xml)?;
            write_text_element(&mut writer, "Filename", &tile.filename)?;

            let x = tile.position.x.to_string();
            let y = tile.position.y.to_string();
            writer
                .write_event(Event::Empty(
                    BytesStart::new("Position")
                        .with_attributes([("x", x.as_str()), ("y", y.as_str())]),
                ))
                .map_err(ExportError::xml)?;
            writer
                .write_event(Event::End(BytesEnd::new("Tile")))
                .map_err(ExportError::xml)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("Tiles")))
            .map_err(ExportError::xml)?;
        writer
            .write_event(Event::End(BytesEnd::new("Tilesheet")))
            .map_err(ExportError::xml)?;

        let mut xml = String::from_utf8(writer.into_inner()).map_err(ExportError::xml)?;
        xml.push('\n');
        Ok(xml)
    }
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    value: &str,
) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(ExportError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(ExportError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(ExportError::xml)?;
    Ok(())
}

/// Serialize `metadata` and write it to `path`.
pub fn write_metadata(
    path: &Path,
    format: MetadataFormat,
    metadata: &Metadata,
) -> Result<(), ExportError> {
    let text = metadata.render(format)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
