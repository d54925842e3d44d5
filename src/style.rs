//! Style value types and the resolver that merges explicit overrides against
//! cascading fallbacks (row default → table default → process defaults).
//!
//! Resolution is total: every attribute of a node in the finished tree holds
//! a concrete value. Absence of an override is the normal case, never an
//! error, and malformed optional inputs (empty font name, zero font size)
//! silently fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::defaults;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGBA colour (0.0 – 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a < 0.001
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
            Some(Self { r, g, b, a: 1.0 })
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()? as f32 / 255.0;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()? as f32 / 255.0;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()? as f32 / 255.0;
            Some(Self { r, g, b, a: 1.0 })
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Box attributes
// ---------------------------------------------------------------------------

/// Padding around cell content, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Which sides of a cell or table carry a border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderSide {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    All,
}

impl BorderSide {
    pub fn is_none(&self) -> bool {
        matches!(self, BorderSide::None)
    }
}

/// A straight-edged border on one or more sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub side: BorderSide,
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub fn new(side: BorderSide) -> Self {
        Self {
            side,
            width: defaults::DEFAULT_BORDER_WIDTH,
            color: Color::BLACK,
        }
    }

    pub fn all() -> Self {
        Self::new(BorderSide::All)
    }

    pub fn none() -> Self {
        Self::new(BorderSide::None)
    }
}

/// Table-level border. A rounded border is a full replacement for the
/// straight-edged form, never a decoration layered on top of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TableBorder {
    Square(Border),
    Rounded {
        corner_radius: f32,
        width: f32,
        color: Color,
    },
}

impl TableBorder {
    pub fn is_rounded(&self) -> bool {
        matches!(self, TableBorder::Rounded { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

// ---------------------------------------------------------------------------
// Text style
// ---------------------------------------------------------------------------

/// Fully resolved text attributes for a run, cell, or row default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_name: String,
    pub font_size: f32,
    pub color: Color,
    pub is_bold: bool,
    pub is_underline: bool,
    /// Content may fall outside the WinAnsi range; the backend must use a
    /// unicode-capable font program.
    pub is_unicode: bool,
    pub line_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_name: defaults::ARIAL_FONT.to_string(),
            font_size: defaults::BODY_FONT_SIZE,
            color: Color::BLACK,
            is_bold: false,
            is_underline: false,
            is_unicode: false,
            line_spacing: 0.0,
        }
    }
}

impl TextStyle {
    pub fn new(font_name: &str, font_size: f32) -> Self {
        Self {
            font_name: font_name.to_string(),
            font_size,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.is_bold = true;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Explicit text overrides awaiting resolution. `None` means "use the
/// fallback"; loosely typed inputs (empty font name, non-positive size)
/// normalise to `None` through [`non_empty`] and [`positive`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOverride {
    pub font_name: Option<String>,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub is_bold: Option<bool>,
}

impl TextOverride {
    pub fn font(font_name: &str, font_size: f32) -> Self {
        Self {
            font_name: non_empty(font_name),
            font_size: positive(font_size),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Merge an explicit value against its nearest enclosing fallback.
pub fn resolve<T>(explicit: Option<T>, fallback: T) -> T {
    explicit.unwrap_or(fallback)
}

/// Resolve a full text style: the explicit value wins per attribute,
/// otherwise the fallback is used. Pure – same inputs always yield the
/// same output.
pub fn resolve_text(explicit: &TextOverride, fallback: &TextStyle) -> TextStyle {
    TextStyle {
        font_name: explicit
            .font_name
            .clone()
            .unwrap_or_else(|| fallback.font_name.clone()),
        font_size: explicit.font_size.unwrap_or(fallback.font_size),
        color: explicit.color.unwrap_or(fallback.color),
        is_bold: explicit.is_bold.unwrap_or(fallback.is_bold),
        is_underline: fallback.is_underline,
        is_unicode: fallback.is_unicode,
        line_spacing: fallback.line_spacing,
    }
}

/// Treat an empty string as an absent override.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Treat a non-positive size as an absent override.
pub fn positive(value: f32) -> Option<f32> {
    if value > 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.533).abs() < 0.01);
    }

    #[test]
    fn explicit_attribute_wins() {
        let fallback = TextStyle::new("Arial", 9.0);
        let explicit = TextOverride {
            font_size: Some(14.0),
            ..TextOverride::default()
        };
        let resolved = resolve_text(&explicit, &fallback);
        assert_eq!(resolved.font_size, 14.0);
        assert_eq!(resolved.font_name, "Arial");
    }

    #[test]
    fn empty_overrides_fall_back() {
        let fallback = TextStyle::new("Helvetica", 12.0).bold();
        let resolved = resolve_text(&TextOverride::font("", 0.0), &fallback);
        assert_eq!(resolved, fallback);
    }

    #[test]
    fn resolution_is_idempotent() {
        let fallback = TextStyle::new("Arial", 9.0).colored(Color::WHITE);
        let explicit = TextOverride {
            font_name: Some("Helvetica".to_string()),
            is_bold: Some(true),
            ..TextOverride::default()
        };
        let first = resolve_text(&explicit, &fallback);
        let second = resolve_text(&explicit, &fallback);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_font_size_is_absent() {
        assert_eq!(positive(0.0), None);
        assert_eq!(positive(-1.0), None);
        assert_eq!(positive(9.0), Some(9.0));
    }
}
