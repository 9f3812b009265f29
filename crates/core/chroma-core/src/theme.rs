use crate::error::{AppError, AppResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Built-in themes embedded at compile time.
const DEFAULT_TOML: &str = include_str!("../themes/default.toml");
const PAPER_TOML: &str = include_str!("../themes/paper.toml");
const OCEAN_DEPTH_TOML: &str = include_str!("../themes/ocean-depth.toml");

/// Name of the built-in theme every fallback resolves to.
pub const DEFAULT_THEME_NAME: &str = "default";

const BUILTIN_DOCS: &[&str] = &[DEFAULT_TOML, PAPER_TOML, OCEAN_DEPTH_TOML];

/// Parses the embedded built-in themes, in shipping order.
///
/// The first entry is always the `default` theme; `ThemeRegistry::new`
/// enforces this so fallback resolution can never dangle.
pub fn builtin_themes() -> AppResult<Vec<Theme>> {
    BUILTIN_DOCS
        .iter()
        .map(|doc| {
            let mut theme: Theme = toml::from_str(doc)
                .map_err(|e| AppError::Config(format!("Invalid built-in theme: {}", e)))?;
            theme.is_user_theme = false;
            Ok(theme)
        })
        .collect()
}

/// RGB color, serialized as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> AppResult<Self> {
        let hex = s.trim_start_matches('#');
        // Byte-indexed slicing below requires ASCII-only input.
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(AppError::Config(format!("Invalid color format: {:?}", s)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| AppError::Config(format!("Invalid color {:?}: {}", s, e)))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
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
        Color::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Core color tokens of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub destructive: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

/// Corner-radius tokens, displayed verbatim on the preview surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corners {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// Classifier used to pick light- or dark-flavored glyphs and scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MostLike {
    Light,
    #[default]
    Dark,
}

impl MostLike {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A named bundle of visual tokens.
///
/// `name` is the unique registry key; `display_name` is what the UI shows.
/// Only themes with `is_user_theme = true` may ever be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub colors: Option<Palette>,
    #[serde(default)]
    pub fonts: Option<FontSet>,
    #[serde(default)]
    pub corners: Option<Corners>,
    #[serde(default)]
    pub most_like: MostLike,
    #[serde(default)]
    pub is_user_theme: bool,
}

impl Theme {
    /// Display-friendly heading font, first family only.
    pub fn heading_font(&self) -> &str {
        self.fonts
            .as_ref()
            .and_then(|f| f.heading.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_parse_and_lead_with_default() {
        let themes = builtin_themes().unwrap();
        assert!(!themes.is_empty());
        assert_eq!(themes[0].name, DEFAULT_THEME_NAME);
        assert!(themes.iter().all(|t| !t.is_user_theme));
    }

    #[test]
    fn color_hex_round_trip() {
        let c = Color::from_hex("#A385FF").unwrap();
        assert_eq!(c, Color::rgb(0xA3, 0x85, 0xFF));
        assert_eq!(c.to_hex(), "#A385FF");
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn multibyte_color_strings_are_rejected() {
        // 6 bytes, but a char boundary falls inside a slice window.
        assert!(Color::from_hex("#a\u{2665}ab").is_err());
        assert!(Color::from_hex("♥♥").is_err());
        // Same path as a corrupted themes.json entry.
        let parsed: Result<Color, _> = serde_json::from_str("\"#a\u{2665}ab\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn heading_font_falls_back() {
        let themes = builtin_themes().unwrap();
        let ocean = themes.iter().find(|t| t.name == "ocean-depth").unwrap();
        assert_eq!(ocean.heading_font(), "Default");
    }
}
