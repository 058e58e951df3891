//! Press sheet catalog
//!
//! Resolves a sheet key (or custom dimensions) to concrete sheet dimensions.
//! Presets live in an immutable static table; the `Custom` key takes its
//! dimensions from the caller, clamped to a printable minimum.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::constants::{
    DEFAULT_CUSTOM_HEIGHT_MM, DEFAULT_CUSTOM_WIDTH_MM, MIN_SHEET_DIMENSION_MM,
};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Known press sheet sizes
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetKey {
    A5,
    A4,
    A3,
    SRA4,
    #[default]
    SRA3,
    Letter,
    Tabloid,
    #[cfg_attr(feature = "serde", serde(rename = "12x18"))]
    Sheet12x18,
    #[cfg_attr(feature = "serde", serde(rename = "13x19"))]
    Sheet13x19,
    /// Caller-supplied dimensions
    Custom,
}

/// A row of the static preset table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetPreset {
    pub key: SheetKey,
    pub label: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Preset table, ordered like the `SheetKey` variants.
static SHEET_PRESETS: [SheetPreset; 10] = [
    SheetPreset::new(SheetKey::A5, "A5 (148 × 210 mm)", 148.0, 210.0),
    SheetPreset::new(SheetKey::A4, "A4 (210 × 297 mm)", 210.0, 297.0),
    SheetPreset::new(SheetKey::A3, "A3 (297 × 420 mm)", 297.0, 420.0),
    SheetPreset::new(SheetKey::SRA4, "SRA4 (225 × 320 mm)", 225.0, 320.0),
    SheetPreset::new(SheetKey::SRA3, "SRA3 (320 × 450 mm)", 320.0, 450.0),
    SheetPreset::new(SheetKey::Letter, "Letter (8.5 × 11 in)", 215.9, 279.4),
    SheetPreset::new(SheetKey::Tabloid, "Tabloid (11 × 17 in)", 279.4, 431.8),
    SheetPreset::new(SheetKey::Sheet12x18, "12 × 18 in", 304.8, 457.2),
    SheetPreset::new(SheetKey::Sheet13x19, "13 × 19 in", 330.2, 482.6),
    SheetPreset::new(
        SheetKey::Custom,
        "Custom",
        DEFAULT_CUSTOM_WIDTH_MM,
        DEFAULT_CUSTOM_HEIGHT_MM,
    ),
];

impl SheetPreset {
    const fn new(key: SheetKey, label: &'static str, width_mm: f64, height_mm: f64) -> Self {
        Self {
            key,
            label,
            width_mm,
            height_mm,
        }
    }
}

/// All known presets, including the `Custom` default
pub fn sheet_presets() -> &'static [SheetPreset] {
    &SHEET_PRESETS
}

impl SheetKey {
    pub const ALL: [SheetKey; 10] = [
        SheetKey::A5,
        SheetKey::A4,
        SheetKey::A3,
        SheetKey::SRA4,
        SheetKey::SRA3,
        SheetKey::Letter,
        SheetKey::Tabloid,
        SheetKey::Sheet12x18,
        SheetKey::Sheet13x19,
        SheetKey::Custom,
    ];

    /// The key as written in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            SheetKey::A5 => "A5",
            SheetKey::A4 => "A4",
            SheetKey::A3 => "A3",
            SheetKey::SRA4 => "SRA4",
            SheetKey::SRA3 => "SRA3",
            SheetKey::Letter => "Letter",
            SheetKey::Tabloid => "Tabloid",
            SheetKey::Sheet12x18 => "12x18",
            SheetKey::Sheet13x19 => "13x19",
            SheetKey::Custom => "Custom",
        }
    }

    pub fn preset(self) -> &'static SheetPreset {
        &SHEET_PRESETS[self as usize]
    }

    /// Resolve to concrete dimensions.
    ///
    /// Presets ignore the custom inputs. `Custom` uses them, falling back to
    /// the stored default when missing or non-finite, and never goes below
    /// [`MIN_SHEET_DIMENSION_MM`].
    pub fn resolve(
        self,
        custom_width_mm: Option<f64>,
        custom_height_mm: Option<f64>,
    ) -> SheetSpec {
        let preset = self.preset();
        match self {
            SheetKey::Custom => SheetSpec {
                key: self,
                label: preset.label.to_string(),
                width_mm: custom_dimension(custom_width_mm, preset.width_mm),
                height_mm: custom_dimension(custom_height_mm, preset.height_mm),
            },
            _ => SheetSpec {
                key: self,
                label: preset.label.to_string(),
                width_mm: preset.width_mm,
                height_mm: preset.height_mm,
            },
        }
    }
}

fn custom_dimension(value: Option<f64>, default_mm: f64) -> f64 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default_mm)
        .max(MIN_SHEET_DIMENSION_MM)
}

impl fmt::Display for SheetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetKey {
    type Err = ImposeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        SheetKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ImposeError::UnknownSheet(s.to_string()))
    }
}

/// A resolved press sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SheetSpec {
    pub key: SheetKey,
    pub label: String,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SheetSpec {
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// Which sheet a request targets, with optional custom dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SheetSelection {
    pub key: SheetKey,
    pub custom_width_mm: Option<f64>,
    pub custom_height_mm: Option<f64>,
}

impl SheetSelection {
    pub fn preset(key: SheetKey) -> Self {
        Self {
            key,
            custom_width_mm: None,
            custom_height_mm: None,
        }
    }

    pub fn custom(width_mm: f64, height_mm: f64) -> Self {
        Self {
            key: SheetKey::Custom,
            custom_width_mm: Some(width_mm),
            custom_height_mm: Some(height_mm),
        }
    }

    pub fn resolve(&self) -> SheetSpec {
        self.key.resolve(self.custom_width_mm, self.custom_height_mm)
    }
}

/// Resolve a sheet by its string key.
///
/// Unknown keys resolve as `Custom`. Use [`SheetKey::from_str`] when an
/// unknown key should be reported instead.
pub fn resolve_sheet(
    sheet_key: &str,
    custom_width_mm: Option<f64>,
    custom_height_mm: Option<f64>,
) -> SheetSpec {
    let key = sheet_key.parse::<SheetKey>().unwrap_or_else(|_| {
        warn!("Unknown sheet key {sheet_key:?}, using custom dimensions");
        SheetKey::Custom
    });
    key.resolve(custom_width_mm, custom_height_mm)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table_matches_key_order() {
        for key in SheetKey::ALL {
            assert_eq!(key.preset().key, key);
        }
        assert_eq!(sheet_presets().len(), SheetKey::ALL.len());
    }

    #[test]
    fn test_resolve_a4_ignores_custom_inputs() {
        let sheet = resolve_sheet("A4", Some(500.0), Some(500.0));
        assert_eq!(sheet.key, SheetKey::A4);
        assert_eq!(sheet.width_mm, 210.0);
        assert_eq!(sheet.height_mm, 297.0);
    }

    #[test]
    fn test_custom_clamped_to_minimum() {
        let sheet = resolve_sheet("Custom", Some(10.0), Some(10.0));
        assert_eq!(sheet.width_mm, 40.0);
        assert_eq!(sheet.height_mm, 40.0);
    }

    #[test]
    fn test_custom_non_finite_uses_default() {
        let sheet = resolve_sheet("Custom", Some(f64::NAN), None);
        assert_eq!(sheet.width_mm, 330.0);
        assert_eq!(sheet.height_mm, 483.0);
    }

    #[test]
    fn test_unknown_key_falls_back_to_custom() {
        let sheet = resolve_sheet("A44", Some(200.0), Some(300.0));
        assert_eq!(sheet.key, SheetKey::Custom);
        assert_eq!(sheet.width_mm, 200.0);
        assert_eq!(sheet.height_mm, 300.0);
    }

    #[test]
    fn test_strict_parse_reports_unknown_key() {
        match "A44".parse::<SheetKey>() {
            Err(ImposeError::UnknownSheet(key)) => assert_eq!(key, "A44"),
            other => panic!("Expected UnknownSheet error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sra3".parse::<SheetKey>().unwrap(), SheetKey::SRA3);
        assert_eq!("12X18".parse::<SheetKey>().unwrap(), SheetKey::Sheet12x18);
        assert_eq!(" letter ".parse::<SheetKey>().unwrap(), SheetKey::Letter);
    }
}
