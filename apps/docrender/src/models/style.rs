//! Presentation attributes attached to each line.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case hex without a leading `#`, the form paragraph-based writers expect.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`, the form coordinate-based writers expect.
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Immutable bundle of visual attributes for one role. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    pub font_size_pt: f32,
    pub bold: bool,
    pub color: Rgb,
    pub alignment: Alignment,
    pub indent_pt: f32,
    pub spacing_before_pt: f32,
    pub spacing_after_pt: f32,
    pub underline: bool,
}

impl StylePreset {
    /// Height of one wrapped sub-line: font size plus the fixed leading.
    pub fn line_height(&self, leading_pt: f32) -> f32 {
        self.font_size_pt + leading_pt
    }
}
