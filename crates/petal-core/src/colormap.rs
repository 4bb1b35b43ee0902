//! Colors and qualitative palettes
//!
//! Categorical data is colored from a fixed qualitative palette, assigned
//! by category index modulo palette size.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Create a new color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB (alpha = 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string (e.g., "#1f77b4" or "1f77b4")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to lowercase hex string, alpha dropped
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// The ten-color qualitative scheme used for categorical fills
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// A named list of colors for categorical data
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette; an empty color list is rejected
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> RenderResult<Self> {
        let name = name.into();
        if colors.is_empty() {
            return Err(RenderError::EmptyPalette { name });
        }
        Ok(Self { name, colors })
    }

    /// Color for the `index`-th category, wrapping around
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Get the category10 palette
pub fn category10() -> Palette {
    Palette {
        name: "category10".to_string(),
        colors: CATEGORY10
            .iter()
            .filter_map(|hex| Color::from_hex(hex))
            .collect(),
    }
}

/// Get a built-in palette by name
pub fn get_palette(name: &str) -> RenderResult<Palette> {
    match name.to_lowercase().as_str() {
        "category10" => Ok(category10()),
        _ => Err(RenderError::UnknownPalette {
            name: name.to_string(),
        }),
    }
}
