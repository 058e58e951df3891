//! Sheet layout optimization
//!
//! Evaluates each allowed item orientation, keeps the best tiling and
//! emits centered, row-major placements for it.

use std::cmp::Ordering;

use log::debug;

use crate::constants::{round1, round2};
use crate::options::LayoutRequest;

use super::{
    GridFit, ItemSpec, LayoutResult, LayoutSettings, LayoutSummary, Placement, compute_grid_fit,
};

// =============================================================================
// Candidate Selection
// =============================================================================

/// Order two candidates, best first: more items wins, then less waste.
pub fn compare_fits(a: &GridFit, b: &GridFit) -> Ordering {
    b.item_count
        .cmp(&a.item_count)
        .then_with(|| a.waste_area_mm2.total_cmp(&b.waste_area_mm2))
}

/// Pick the best candidate. On a tie the earlier candidate is kept.
pub fn best_fit(first: GridFit, others: impl IntoIterator<Item = GridFit>) -> GridFit {
    others.into_iter().fold(first, |best, candidate| {
        match compare_fits(&candidate, &best) {
            Ordering::Less => candidate,
            _ => best,
        }
    })
}

// =============================================================================
// Layout
// =============================================================================

/// Lay out as many copies of the requested item as fit on one sheet.
///
/// Never fails. When nothing fits the result has no placements and a zero
/// sheet count; check [`LayoutResult::fits`] before using it for production.
pub fn optimize_sheet_layout(request: &LayoutRequest) -> LayoutResult {
    let request = request.sanitized();
    let sheet = request.sheet.resolve();

    let fit = |rotated| {
        compute_grid_fit(
            sheet.width_mm,
            sheet.height_mm,
            request.item_width_mm,
            request.item_height_mm,
            request.margin_mm,
            request.bleed_mm,
            request.gap_mm,
            rotated,
        )
    };

    let normal = fit(false);
    let rotated = request.allow_rotation.then(|| fit(true));
    let best = best_fit(normal, rotated);

    debug!(
        "Sheet {}: {}x{} = {} up ({}), waste {:.2} mm²",
        sheet.key,
        best.columns,
        best.rows,
        best.item_count,
        if best.rotated { "rotated" } else { "normal" },
        best.waste_area_mm2
    );

    let offset_x = round2((sheet.width_mm - best.used_width) / 2.0);
    let offset_y = round2((sheet.height_mm - best.used_height) / 2.0);
    let placements = emit_placements(&best, offset_x, offset_y, request.bleed_mm, request.gap_mm);

    let sheet_count = if best.item_count > 0 {
        request.quantity.div_ceil(best.item_count)
    } else {
        0
    };

    LayoutResult {
        sheet,
        item: ItemSpec {
            width_mm: round2(best.width),
            height_mm: round2(best.height),
            placed_width_mm: round2(best.placed_width),
            placed_height_mm: round2(best.placed_height),
        },
        summary: LayoutSummary {
            columns: best.columns,
            rows: best.rows,
            item_count: best.item_count,
            sheet_count,
            efficiency: efficiency(&best),
            rotated: best.rotated,
            used_width_mm: round2(best.used_width),
            used_height_mm: round2(best.used_height),
            waste_area_mm2: round2(best.waste_area_mm2),
        },
        settings: LayoutSettings {
            margin_mm: request.margin_mm,
            bleed_mm: request.bleed_mm,
            gap_mm: request.gap_mm,
            allow_rotation: request.allow_rotation,
            quantity: request.quantity,
        },
        placements,
    }
}

/// Row-major placements: outer loop rows, inner loop columns.
fn emit_placements(
    fit: &GridFit,
    offset_x: f64,
    offset_y: f64,
    bleed: f64,
    gap: f64,
) -> Vec<Placement> {
    if fit.item_count == 0 {
        return Vec::new();
    }

    let step_x = fit.placed_width + gap;
    let step_y = fit.placed_height + gap;
    let mut placements = Vec::with_capacity(fit.item_count as usize);

    for row in 0..fit.rows {
        for col in 0..fit.columns {
            placements.push(Placement {
                index: row * fit.columns + col + 1,
                x: round2(offset_x + col as f64 * step_x),
                y: round2(offset_y + row as f64 * step_y),
                width_mm: round2(fit.placed_width),
                height_mm: round2(fit.placed_height),
                bleed_mm: round2(bleed),
                rotated: fit.rotated,
            });
        }
    }

    placements
}

/// Used block area over usable area, in percent
fn efficiency(fit: &GridFit) -> f64 {
    let usable = fit.usable_area();
    if usable <= 0.0 {
        return 0.0;
    }
    round1((fit.used_area() / usable * 100.0).clamp(0.0, 100.0))
}

// =============================================================================
// Tests
// =============================================================================
