use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Template identifier
// ────────────────────────────────────────────────────────────────────────────

/// The four layouts the renderer knows about.
///
/// Decoding never fails: any tag outside the known set becomes `Minimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateKind {
    #[default]
    Minimal,
    Professional,
    Creative,
    Modern,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Minimal,
        TemplateKind::Professional,
        TemplateKind::Creative,
        TemplateKind::Modern,
    ];

    /// Case-insensitive lookup with the documented fallback to `Minimal`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "professional" => TemplateKind::Professional,
            "creative" => TemplateKind::Creative,
            "modern" => TemplateKind::Modern,
            "minimal" => TemplateKind::Minimal,
            other => {
                tracing::debug!("Unknown template tag '{other}', falling back to minimal");
                TemplateKind::Minimal
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateKind::Minimal => "minimal",
            TemplateKind::Professional => "professional",
            TemplateKind::Creative => "creative",
            TemplateKind::Modern => "modern",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Minimal => "Minimal",
            TemplateKind::Professional => "Professional",
            TemplateKind::Creative => "Creative",
            TemplateKind::Modern => "Modern",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::Minimal => {
                "Clean and straightforward design perfect for traditional industries"
            }
            TemplateKind::Professional => {
                "Refined layout with elegant typography and balanced sections"
            }
            TemplateKind::Creative => "Bold design with visual elements for creative professionals",
            TemplateKind::Modern => {
                "Contemporary design with a minimalist aesthetic and unique layout"
            }
        }
    }
}

impl From<String> for TemplateKind {
    fn from(tag: String) -> Self {
        TemplateKind::from_tag(&tag)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accent color
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ACCENT: &str = "#3B82F6";

/// Recommended swatches offered next to the free-form picker.
pub const RECOMMENDED_COLORS: [&str; 8] = [
    "#3B82F6", // Blue
    "#8B5CF6", // Purple
    "#EC4899", // Pink
    "#10B981", // Green
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#171717", // Almost Black
    "#6B7280", // Gray
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a hex color (expected #RRGGBB)")]
pub struct InvalidColor(pub String);

/// A `#RRGGBB` accent color. Always valid once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    /// Accepts `#RRGGBB` or the `#RGB` shorthand; output is upper-cased `#RRGGBB`.
    pub fn parse(input: &str) -> Result<Self, InvalidColor> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| InvalidColor(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColor(input.to_string()));
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(InvalidColor(input.to_string())),
        };

        Ok(AccentColor(format!("#{}", expanded.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS 8-digit form with the given alpha suffix, e.g. `#3B82F620`.
    pub fn with_alpha(&self, alpha_hex: &str) -> String {
        format!("{}{}", self.0, alpha_hex)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor(DEFAULT_ACCENT.to_string())
    }
}

impl TryFrom<String> for AccentColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccentColor::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
