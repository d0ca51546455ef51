//! Colors for structural highlights
//!
//! The structure walker only tags regions with a category and role. The
//! [`Palette`] trait is the lookup a renderer uses to turn those tags into
//! colors and opacities; built-in defaults live here, user overrides in
//! [`crate::config::HighlightSettings`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::structure::{Category, Role};

/// Default opacity for block tint (and identifier emphasis)
pub const DEFAULT_BLOCK_OPACITY: f64 = 0.035;
/// Default opacity for header bands
pub const DEFAULT_HEADER_OPACITY: f64 = 0.1;
/// Default opacity for subheader bands
pub const DEFAULT_SUBHEADER_OPACITY: f64 = 0.06;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Return this color with an opacity in `[0, 1]` applied as alpha
    pub fn with_opacity(&self, opacity: f64) -> Self {
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Built-in tint color for a category (blocks and heading bands)
pub const fn default_color(category: Category) -> Color {
    match category {
        Category::Enum => Color::rgb(0xEF, 0x77, 0xEF),
        Category::Struct => Color::rgb(0x16, 0x16, 0xCA),
        Category::Trait => Color::rgb(0x03, 0xE5, 0x38),
        Category::ImplBlock => Color::rgb(0x99, 0x66, 0x1A),
        Category::Function => Color::rgb(0x99, 0x1A, 0x1A),
        Category::Module => Color::rgb(0x66, 0x66, 0x66),
    }
}

/// Built-in background color for identifier emphasis
pub const fn default_highlight_color(category: Category) -> Color {
    match category {
        Category::Enum => Color::rgb(0xF6, 0xF1, 0xF6),
        Category::Struct => Color::rgb(0xF1, 0xF1, 0xF8),
        Category::Trait => Color::rgb(0xED, 0xF6, 0xED),
        Category::ImplBlock => Color::rgb(0xF1, 0xED, 0xED),
        Category::Function => Color::rgb(0xF8, 0xF2, 0xF2),
        Category::Module => Color::rgb(0xEA, 0xEA, 0xEA),
    }
}

/// Presentation lookup for structural regions
pub trait Palette {
    /// Tint for full-line regions of a (effective) category
    fn color(&self, category: Category) -> Color;

    /// Background for exact-range identifier regions
    fn highlight_color(&self, category: Category) -> Color;

    /// Opacity in `[0, 1]` for a region role
    fn opacity(&self, role: Role) -> f64;
}

/// The built-in palette, with no user overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPalette;

impl Palette for DefaultPalette {
    fn color(&self, category: Category) -> Color {
        default_color(category)
    }

    fn highlight_color(&self, category: Category) -> Color {
        default_highlight_color(category)
    }

    fn opacity(&self, role: Role) -> f64 {
        match role {
            Role::Block | Role::Identifier => DEFAULT_BLOCK_OPACITY,
            Role::Header => DEFAULT_HEADER_OPACITY,
            Role::Subheader => DEFAULT_SUBHEADER_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_keeps_alpha() {
        let opaque = Color::from_hex("#1616CA").unwrap();
        assert_eq!(opaque, Color::rgb(0x16, 0x16, 0xCA));
        assert_eq!(opaque.to_hex(), "#1616CA");

        let translucent = Color::from_hex("#1616CA80").unwrap();
        assert_eq!(translucent.a, 0x80);
        assert_eq!(translucent.to_hex(), "#1616CA80");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_with_opacity() {
        let color = Color::rgb(10, 20, 30).with_opacity(0.1);
        assert_eq!(color.a, 26);
        assert_eq!(Color::rgb(0, 0, 0).with_opacity(4.0).a, 255);
    }

    #[test]
    fn test_default_palette() {
        let palette = DefaultPalette;
        assert_eq!(palette.color(Category::Module), Color::rgb(0x66, 0x66, 0x66));
        assert_eq!(
            palette.highlight_color(Category::Function),
            Color::rgb(0xF8, 0xF2, 0xF2)
        );
        assert_eq!(palette.opacity(Role::Identifier), DEFAULT_BLOCK_OPACITY);
        assert_eq!(palette.opacity(Role::Header), DEFAULT_HEADER_OPACITY);
        assert_eq!(palette.opacity(Role::Subheader), DEFAULT_SUBHEADER_OPACITY);
    }
}
