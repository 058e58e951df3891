//! Grid fit calculation
//!
//! This module tiles one item orientation across the usable sheet area,
//! counting columns and rows and measuring the placed block.

use crate::constants::MAX_ITEMS_PER_SHEET;

use super::GridFit;

// =============================================================================
// Grid Fit
// =============================================================================

/// Compute how many copies of an item tile the sheet in one orientation.
///
/// # Arguments
/// * `sheet_width` / `sheet_height` - Full sheet size in mm
/// * `item_width` / `item_height` - Trim size of the item in mm
/// * `margin` - Sheet margin on every side
/// * `bleed` - Bleed added on every side of the item
/// * `gap` - Spacing between neighbouring items (none after the last one)
/// * `rotated` - Swap the item's width and height
///
/// A grid holding more than [`MAX_ITEMS_PER_SHEET`] items is reported as no
/// fit at all.
#[allow(clippy::too_many_arguments)]
pub fn compute_grid_fit(
    sheet_width: f64,
    sheet_height: f64,
    item_width: f64,
    item_height: f64,
    margin: f64,
    bleed: f64,
    gap: f64,
    rotated: bool,
) -> GridFit {
    let (width, height) = if rotated {
        (item_height, item_width)
    } else {
        (item_width, item_height)
    };

    let placed_width = width + 2.0 * bleed;
    let placed_height = height + 2.0 * bleed;

    let usable_width = (sheet_width - 2.0 * margin).max(0.0);
    let usable_height = (sheet_height - 2.0 * margin).max(0.0);

    let mut columns = fit_count(usable_width, placed_width, gap);
    let mut rows = fit_count(usable_height, placed_height, gap);

    let item_count = match u64::from(columns).checked_mul(u64::from(rows)) {
        Some(count) if count <= u64::from(MAX_ITEMS_PER_SHEET) => count as u32,
        _ => 0,
    };
    if item_count == 0 {
        columns = 0;
        rows = 0;
    }

    let (used_width, used_height) = if item_count == 0 {
        (0.0, 0.0)
    } else {
        (
            block_extent(columns, placed_width, gap),
            block_extent(rows, placed_height, gap),
        )
    };

    let waste_area_mm2 = (usable_width * usable_height - used_width * used_height).max(0.0);

    GridFit {
        rotated,
        width,
        height,
        placed_width,
        placed_height,
        usable_width,
        usable_height,
        columns,
        rows,
        item_count,
        used_width,
        used_height,
        waste_area_mm2,
    }
}

/// Items that fit along one axis. The trailing item needs no gap, hence the
/// extra gap in the numerator.
fn fit_count(usable: f64, placed: f64, gap: f64) -> u32 {
    let step = placed + gap;
    if placed <= 0.0 || step <= 0.0 {
        return 0;
    }
    let count = ((usable + gap) / step).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}

fn block_extent(count: u32, placed: f64, gap: f64) -> f64 {
    count as f64 * placed + (count as f64 - 1.0) * gap
}

// =============================================================================
// Tests
// =============================================================================
