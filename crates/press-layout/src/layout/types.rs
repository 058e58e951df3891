//! Layout data types
//!
//! These types carry the result of a sheet layout from the optimizer to
//! preview rendering and export planning.

use crate::sheet::SheetSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tiling candidate for a single item orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    /// Whether the item is turned 90° on the sheet
    pub rotated: bool,
    /// Item width in this orientation (trim size)
    pub width: f64,
    /// Item height in this orientation (trim size)
    pub height: f64,
    /// Item width plus bleed on both sides
    pub placed_width: f64,
    /// Item height plus bleed on both sides
    pub placed_height: f64,
    /// Sheet width inside the margins
    pub usable_width: f64,
    /// Sheet height inside the margins
    pub usable_height: f64,
    pub columns: u32,
    pub rows: u32,
    pub item_count: u32,
    /// Width of the placed block including inner gaps
    pub used_width: f64,
    /// Height of the placed block including inner gaps
    pub used_height: f64,
    /// Usable area not covered by the placed block
    pub waste_area_mm2: f64,
}

impl GridFit {
    pub fn usable_area(&self) -> f64 {
        self.usable_width * self.usable_height
    }

    pub fn used_area(&self) -> f64 {
        self.used_width * self.used_height
    }
}

/// The item as laid out in the winning orientation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub placed_width_mm: f64,
    pub placed_height_mm: f64,
}

/// Production figures for a layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutSummary {
    pub columns: u32,
    pub rows: u32,
    /// Units per sheet
    pub item_count: u32,
    /// Sheets needed for the requested quantity (0 when nothing fits)
    pub sheet_count: u32,
    /// Used area over usable area, in percent
    pub efficiency: f64,
    pub rotated: bool,
    pub used_width_mm: f64,
    pub used_height_mm: f64,
    pub waste_area_mm2: f64,
}

/// Request settings after clamping, echoed back with the result
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutSettings {
    pub margin_mm: f64,
    pub bleed_mm: f64,
    pub gap_mm: f64,
    pub allow_rotation: bool,
    pub quantity: u32,
}

/// Position of one item on the sheet
///
/// `x` and `y` locate the top-left corner of the placed box (item plus
/// bleed), measured from the top-left corner of the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Placement {
    /// 1-based, row-major
    pub index: u32,
    pub x: f64,
    pub y: f64,
    /// Placed width, bleed included
    pub width_mm: f64,
    /// Placed height, bleed included
    pub height_mm: f64,
    pub bleed_mm: f64,
    pub rotated: bool,
}

impl Placement {
    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width_mm
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height_mm
    }

    /// Trim box as (x, y, width, height), bleed removed
    pub fn trim_box(&self) -> (f64, f64, f64, f64) {
        (
            self.x + self.bleed_mm,
            self.y + self.bleed_mm,
            self.width_mm - 2.0 * self.bleed_mm,
            self.height_mm - 2.0 * self.bleed_mm,
        )
    }
}

/// Complete layout of one press sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutResult {
    pub sheet: SheetSpec,
    pub item: ItemSpec,
    pub summary: LayoutSummary,
    pub settings: LayoutSettings,
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    /// Whether at least one item fits on the sheet
    pub fn fits(&self) -> bool {
        self.summary.item_count > 0
    }
}
