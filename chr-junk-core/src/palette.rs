//! Four-color palette mapping 2bpp pixel indices to RGB.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::TileError;

/// Number of entries in a palette: one per 2-bit pixel value.
pub const PALETTE_SIZE: usize = 4;

/// Fixed lookup table from pixel index to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; PALETTE_SIZE],
}

impl Default for Palette {
    /// Four-level grayscale ramp.
    fn default() -> Self {
        Self {
            colors: [[0, 0, 0], [85, 85, 85], [170, 170, 170], [255, 255, 255]],
        }
    }
}

impl Palette {
    pub fn new(colors: [[u8; 3]; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Load a palette file: four lines of `R G B`, decimal 0-255.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TileError> {
        let text = fs::read_to_string(path.as_ref())?;
        text.parse()
    }

    /// RGB for a pixel index. Only the low two bits are used.
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.colors[(index & 0b11) as usize]
    }

    pub fn colors(&self) -> &[[u8; 3]; PALETTE_SIZE] {
        &self.colors
    }
}

impl FromStr for Palette {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut colors = [[0u8; 3]; PALETTE_SIZE];

        for (i, color) in colors.iter_mut().enumerate() {
            let line_no = i + 1;
            let line = lines.next().ok_or_else(|| {
                TileError::palette(line_no, "palette file must contain exactly 4 lines")
            })?;
            *color = parse_rgb(line, line_no)?;
        }

        if let Some(extra) = lines.position(|l| !l.trim().is_empty()) {
            return Err(TileError::palette(
                PALETTE_SIZE + extra + 1,
                "palette file must contain exactly 4 lines",
            ));
        }

        Ok(Self { colors })
    }
}

fn parse_rgb(line: &str, line_no: usize) -> Result<[u8; 3], TileError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(TileError::palette(
            line_no,
            format!("expected 3 values (R G B), found {}", fields.len()),
        ));
    }

    let mut rgb = [0u8; 3];
    for (channel, field) in rgb.iter_mut().zip(&fields) {
        let value: u32 = field
            .parse()
            .map_err(|_| TileError::palette(line_no, format!("'{}' is not a number", field)))?;
        *channel = u8::try_from(value).map_err(|_| {
            TileError::palette(
                line_no,
                format!("RGB values must be between 0 and 255, got {}", value),
            )
        })?;
    }
    Ok(rgb)
}

#[cfg(test)]
#[path = "tests/palette_tests.rs"]
mod tests;
