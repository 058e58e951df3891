//! Shared constants for sheet layout
//!
//! This module centralizes defaults, limits and rounding helpers used
//! throughout the layout engine.

// =============================================================================
// Sheet Limits
// =============================================================================

/// Smallest accepted sheet dimension for custom sheets (mm)
pub const MIN_SHEET_DIMENSION_MM: f64 = 40.0;

/// Default custom sheet width (mm)
pub const DEFAULT_CUSTOM_WIDTH_MM: f64 = 330.0;

/// Default custom sheet height (mm)
pub const DEFAULT_CUSTOM_HEIGHT_MM: f64 = 483.0;

// =============================================================================
// Layout Defaults
// =============================================================================

/// Default item size: a standard 90 × 54 mm business card
pub const DEFAULT_ITEM_WIDTH_MM: f64 = 90.0;
pub const DEFAULT_ITEM_HEIGHT_MM: f64 = 54.0;

/// Default sheet margin (mm)
pub const DEFAULT_MARGIN_MM: f64 = 5.0;

/// Default bleed on each side of an item (mm)
pub const DEFAULT_BLEED_MM: f64 = 2.0;

/// Default gap between adjacent items (mm)
pub const DEFAULT_GAP_MM: f64 = 2.0;

/// Default print quantity
pub const DEFAULT_QUANTITY: u32 = 100;

/// Most items a single sheet layout may hold. Denser grids count as no fit.
pub const MAX_ITEMS_PER_SHEET: u32 = 100_000;

// =============================================================================
// Book Imposition
// =============================================================================

/// Pages carried by one folded sheet (two sides, two pages each)
pub const PAGES_PER_SHEET: u32 = 4;

/// Largest page count a book spec is clamped to
pub const MAX_BOOK_PAGES: u32 = 100_000;

/// Label used for the single section of a non-signature book
pub const BOOK_BLOCK_LABEL: &str = "Book Block";

// =============================================================================
// Export Sizing
// =============================================================================

/// Lowest resolution accepted for exports
pub const MIN_EXPORT_DPI: u32 = 72;

/// Resolution the size estimate is calibrated against
pub const REFERENCE_DPI: f64 = 300.0;

/// Approximate megabytes per sheet at the reference resolution
pub const MB_PER_SHEET_AT_REFERENCE: f64 = 2.4;

/// Floor for the export size estimate (MB)
pub const MIN_ESTIMATED_MB: f64 = 1.2;

/// Output stem used when a job name has no usable characters
pub const FALLBACK_OUTPUT_STEM: &str = "print-job";

// =============================================================================
// Rounding
// =============================================================================

/// Round to 2 decimals (mm and area values)
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal (percentages, megabytes)
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
