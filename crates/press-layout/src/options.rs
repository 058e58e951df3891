use crate::constants::*;
use crate::sheet::{SheetKey, SheetSelection};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for laying out one item on a press sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutRequest {
    // Sheet
    pub sheet: SheetSelection,

    // Item trim size
    pub item_width_mm: f64,
    pub item_height_mm: f64,

    // Spacing
    pub margin_mm: f64,
    pub bleed_mm: f64,
    pub gap_mm: f64,

    pub allow_rotation: bool,
    pub quantity: u32,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            sheet: SheetSelection::default(),
            item_width_mm: DEFAULT_ITEM_WIDTH_MM,
            item_height_mm: DEFAULT_ITEM_HEIGHT_MM,
            margin_mm: DEFAULT_MARGIN_MM,
            bleed_mm: DEFAULT_BLEED_MM,
            gap_mm: DEFAULT_GAP_MM,
            allow_rotation: true,
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl LayoutRequest {
    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        load_json(path).await
    }

    /// Save the request to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        save_json(self, path).await
    }

    /// Copy with every numeric field clamped to a usable value.
    ///
    /// Non-finite lengths fall back to the defaults, negative lengths become
    /// zero and the quantity is at least 1.
    pub fn sanitized(&self) -> Self {
        Self {
            sheet: self.sheet,
            item_width_mm: clamp_length(self.item_width_mm, DEFAULT_ITEM_WIDTH_MM),
            item_height_mm: clamp_length(self.item_height_mm, DEFAULT_ITEM_HEIGHT_MM),
            margin_mm: clamp_length(self.margin_mm, DEFAULT_MARGIN_MM),
            bleed_mm: clamp_length(self.bleed_mm, DEFAULT_BLEED_MM),
            gap_mm: clamp_length(self.gap_mm, DEFAULT_GAP_MM),
            allow_rotation: self.allow_rotation,
            quantity: self.quantity.max(1),
        }
    }

    /// Report values that [`sanitized`](Self::sanitized) would silently repair
    pub fn validate(&self) -> Result<()> {
        check_length("Item width", self.item_width_mm, true)?;
        check_length("Item height", self.item_height_mm, true)?;
        check_length("Margin", self.margin_mm, false)?;
        check_length("Bleed", self.bleed_mm, false)?;
        check_length("Gap", self.gap_mm, false)?;
        check_sheet(&self.sheet)?;

        if self.quantity == 0 {
            return Err(ImposeError::Config(
                "Quantity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parameters for imposing a booklet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct BookSpec {
    pub total_pages: u32,
    pub binding_type: BindingType,
    /// Pages per signature (perfect binding only)
    pub signature_size: u32,

    // Trim size of a single page
    pub page_width_mm: f64,
    pub page_height_mm: f64,

    // Press sheet for the flat spreads
    pub sheet: SheetSelection,
    pub margin_mm: f64,
    pub bleed_mm: f64,
    pub gap_mm: f64,
}

impl Default for BookSpec {
    fn default() -> Self {
        let (page_width_mm, page_height_mm) = default_page_size();
        Self {
            total_pages: 16,
            binding_type: BindingType::SaddleStitch,
            signature_size: 16,
            page_width_mm,
            page_height_mm,
            sheet: SheetSelection::preset(SheetKey::SRA3),
            margin_mm: DEFAULT_MARGIN_MM,
            bleed_mm: DEFAULT_BLEED_MM,
            gap_mm: DEFAULT_GAP_MM,
        }
    }
}

/// A5 portrait, the most common booklet page
fn default_page_size() -> (f64, f64) {
    let a5 = SheetKey::A5.preset();
    (a5.width_mm, a5.height_mm)
}

impl BookSpec {
    /// Load a book spec from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        load_json(path).await
    }

    /// Save the book spec to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        save_json(self, path).await
    }

    /// Copy with page count in `1..=MAX_BOOK_PAGES` and lengths clamped like
    /// [`LayoutRequest::sanitized`].
    pub fn sanitized(&self) -> Self {
        let (default_width, default_height) = default_page_size();
        Self {
            total_pages: self.total_pages.clamp(1, MAX_BOOK_PAGES),
            binding_type: self.binding_type,
            signature_size: self.signature_size,
            page_width_mm: clamp_length(self.page_width_mm, default_width),
            page_height_mm: clamp_length(self.page_height_mm, default_height),
            sheet: self.sheet,
            margin_mm: clamp_length(self.margin_mm, DEFAULT_MARGIN_MM),
            bleed_mm: clamp_length(self.bleed_mm, DEFAULT_BLEED_MM),
            gap_mm: clamp_length(self.gap_mm, DEFAULT_GAP_MM),
        }
    }

    /// Report values that [`sanitized`](Self::sanitized) would silently repair
    pub fn validate(&self) -> Result<()> {
        if self.total_pages == 0 {
            return Err(ImposeError::Config(
                "Book must have at least one page".to_string(),
            ));
        }

        if self.total_pages > MAX_BOOK_PAGES {
            return Err(ImposeError::Config(format!(
                "Book must have at most {MAX_BOOK_PAGES} pages"
            )));
        }

        if self.binding_type == BindingType::PerfectBinding
            && (self.signature_size < 4 || self.signature_size % 4 != 0)
        {
            return Err(ImposeError::Config(
                "Pages per signature must be a multiple of 4".to_string(),
            ));
        }

        check_length("Page width", self.page_width_mm, true)?;
        check_length("Page height", self.page_height_mm, true)?;
        check_length("Margin", self.margin_mm, false)?;
        check_length("Bleed", self.bleed_mm, false)?;
        check_length("Gap", self.gap_mm, false)?;
        check_sheet(&self.sheet)
    }
}

fn clamp_length(value: f64, default_mm: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        default_mm
    }
}

fn check_length(name: &str, value: f64, positive: bool) -> Result<()> {
    if !value.is_finite() {
        return Err(ImposeError::Config(format!("{name} must be a finite number")));
    }
    if positive && value <= 0.0 {
        return Err(ImposeError::Config(format!("{name} must be greater than 0")));
    }
    if value < 0.0 {
        return Err(ImposeError::Config(format!("{name} must not be negative")));
    }
    Ok(())
}

fn check_sheet(sheet: &SheetSelection) -> Result<()> {
    if sheet.key != SheetKey::Custom {
        return Ok(());
    }
    for (name, value) in [
        ("Custom sheet width", sheet.custom_width_mm),
        ("Custom sheet height", sheet.custom_height_mm),
    ] {
        match value {
            Some(v) if v.is_finite() && v < MIN_SHEET_DIMENSION_MM => {
                return Err(ImposeError::Config(format!(
                    "{name} must be at least {MIN_SHEET_DIMENSION_MM} mm"
                )));
            }
            Some(v) if !v.is_finite() => {
                return Err(ImposeError::Config(format!("{name} must be a finite number")));
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
async fn load_json<T: serde::de::DeserializeOwned>(path: impl AsRef<std::path::Path>) -> Result<T> {
    let bytes = tokio::fs::read(path).await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(feature = "serde")]
async fn save_json<T: Serialize>(value: &T, path: impl AsRef<std::path::Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
