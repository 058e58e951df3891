use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown sheet size: {0}")]
    UnknownSheet(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Binding methods for booklet imposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BindingType {
    /// Folded sheets nested into one block and stapled at the spine
    #[default]
    SaddleStitch,
    /// Signatures gathered side by side and glued at the spine
    PerfectBinding,
}

impl BindingType {
    pub fn label(self) -> &'static str {
        match self {
            BindingType::SaddleStitch => "saddle-stitch",
            BindingType::PerfectBinding => "perfect-binding",
        }
    }
}

/// Printer's marks requested for an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrinterMarks {
    /// L-shaped trim marks at each item corner
    pub crop: bool,
    /// Marks indicating the bleed boundary
    pub bleed: bool,
    /// Registration targets for plate alignment
    pub registration: bool,
}

impl PrinterMarks {
    /// Check if any mark is enabled
    pub fn any(&self) -> bool {
        self.crop || self.bleed || self.registration
    }
}

/// Width and height of a rectangle in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Size {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Size {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    pub fn area(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}
