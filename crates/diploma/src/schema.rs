//! Design configuration schema types

use crate::{DiplomaError, Result};
use serde::{Deserialize, Serialize};

/// RGB color for a text field, written as `"#RRGGBB"` in config JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Render as a `#rrggbb` hex string
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color '{value}', expected #RRGGBB"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

/// Size, position and color of one overlaid text field.
///
/// Horizontal position is never stored; every field is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Font size in pixels
    pub size: u32,

    /// Vertical position of the text's top edge, in pixels from the top
    pub y: u32,

    /// Text color
    #[serde(default)]
    pub color: Color,
}

impl FieldSpec {
    /// Create a field spec
    pub fn new(size: u32, y: u32, color: Color) -> Self {
        Self { size, y, color }
    }
}

/// The full design for one generation run: one spec per field plus the
/// identifier prefix. Immutable once a batch starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Student name field
    #[serde(default = "default_name_field")]
    pub name: FieldSpec,

    /// Identifier field
    #[serde(default = "default_id_field")]
    pub id: FieldSpec,

    /// Intro phrase field
    #[serde(default = "default_intro_field")]
    pub intro: FieldSpec,

    /// Course title field
    #[serde(default = "default_course_field")]
    pub course: FieldSpec,

    /// Hours line field
    #[serde(default = "default_hours_field")]
    pub hours: FieldSpec,

    /// Prefix prepended (with a single space) to every identifier
    #[serde(rename = "idPrefix", default = "default_id_prefix")]
    pub id_prefix: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            name: default_name_field(),
            id: default_id_field(),
            intro: default_intro_field(),
            course: default_course_field(),
            hours: default_hours_field(),
            id_prefix: default_id_prefix(),
        }
    }
}

fn default_name_field() -> FieldSpec {
    FieldSpec::new(160, 600, Color::black())
}

fn default_id_field() -> FieldSpec {
    FieldSpec::new(50, 750, Color::rgb(0x55, 0x55, 0x55))
}

fn default_intro_field() -> FieldSpec {
    FieldSpec::new(45, 850, Color::rgb(0x00, 0x2d, 0x55))
}

fn default_course_field() -> FieldSpec {
    FieldSpec::new(90, 1000, Color::rgb(0x00, 0x2d, 0x55))
}

fn default_hours_field() -> FieldSpec {
    FieldSpec::new(35, 1150, Color::rgb(0x00, 0x2d, 0x55))
}

fn default_id_prefix() -> String {
    "C.C.".to_string()
}

/// The three lines shared by every page of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTexts {
    /// Intro phrase above the course title
    #[serde(default = "default_intro_text")]
    pub intro: String,

    /// Course title
    #[serde(default = "default_course_text")]
    pub course: String,

    /// Hours / details line
    #[serde(default = "default_hours_text")]
    pub hours: String,
}

impl Default for StaticTexts {
    fn default() -> Self {
        Self {
            intro: default_intro_text(),
            course: default_course_text(),
            hours: default_hours_text(),
        }
    }
}

fn default_intro_text() -> String {
    "Por haber participado y aprobado el:".to_string()
}

fn default_course_text() -> String {
    "DIPLOMADO EN GESTIÓN".to_string()
}

fn default_hours_text() -> String {
    "Intensidad: 120 Horas".to_string()
}

/// Root config document: design plus static texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Field layout and the identifier prefix
    #[serde(default)]
    pub design: DesignConfig,

    /// Static text lines
    #[serde(default)]
    pub texts: StaticTexts,
}

/// Parse a generation config from JSON
pub fn parse_config(json: &str) -> Result<GenerationConfig> {
    serde_json::from_str(json).map_err(|e| DiplomaError::ConfigParse(e.to_string()))
}
