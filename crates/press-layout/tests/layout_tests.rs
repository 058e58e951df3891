use press_layout::*;

fn request(sheet: SheetKey, item_w: f64, item_h: f64) -> LayoutRequest {
    LayoutRequest {
        sheet: SheetSelection::preset(sheet),
        item_width_mm: item_w,
        item_height_mm: item_h,
        margin_mm: 5.0,
        bleed_mm: 2.0,
        gap_mm: 2.0,
        allow_rotation: true,
        quantity: 100,
    }
}

fn sample_requests() -> Vec<LayoutRequest> {
    let mut requests = Vec::new();
    for sheet in [SheetKey::A4, SheetKey::A3, SheetKey::SRA3, SheetKey::Sheet13x19] {
        for (w, h) in [(90.0, 54.0), (85.0, 55.0), (50.0, 50.0), (148.0, 210.0), (63.5, 38.1)] {
            for allow_rotation in [false, true] {
                let mut r = request(sheet, w, h);
                r.allow_rotation = allow_rotation;
                requests.push(r);
            }
        }
    }
    requests
}

#[test]
fn test_business_cards_on_a4() {
    let result = optimize_sheet_layout(&request(SheetKey::A4, 90.0, 54.0));

    assert!(result.summary.columns > 0);
    assert!(result.summary.rows > 0);
    assert_eq!(
        result.summary.item_count,
        result.summary.columns * result.summary.rows
    );
    assert_eq!(
        result.summary.sheet_count,
        100u32.div_ceil(result.summary.item_count)
    );
    assert_eq!(result.sheet.width_mm, 210.0);
    assert_eq!(result.sheet.height_mm, 297.0);
}

#[test]
fn test_placement_count_matches_item_count() {
    for r in sample_requests() {
        let result = optimize_sheet_layout(&r);
        assert_eq!(result.placements.len() as u32, result.summary.item_count);
        for (i, p) in result.placements.iter().enumerate() {
            assert_eq!(p.index, i as u32 + 1);
        }
    }
}

#[test]
fn test_no_overlap_and_within_usable_area() {
    for r in sample_requests() {
        let result = optimize_sheet_layout(&r);
        let usable_w = result.sheet.width_mm - 2.0 * r.margin_mm;
        let usable_h = result.sheet.height_mm - 2.0 * r.margin_mm;

        let placed_area = result.item.placed_width_mm * result.item.placed_height_mm;
        assert!(result.summary.item_count as f64 * placed_area <= usable_w * usable_h + 1e-6);

        for p in &result.placements {
            assert!(p.x >= r.margin_mm - 0.02);
            assert!(p.y >= r.margin_mm - 0.02);
            assert!(p.right() <= result.sheet.width_mm - r.margin_mm + 0.02);
            assert!(p.bottom() <= result.sheet.height_mm - r.margin_mm + 0.02);
        }

        for (i, a) in result.placements.iter().enumerate() {
            for b in &result.placements[i + 1..] {
                let separated = a.right() <= b.x + 0.01
                    || b.right() <= a.x + 0.01
                    || a.bottom() <= b.y + 0.01
                    || b.bottom() <= a.y + 0.01;
                assert!(separated, "placements {} and {} overlap", a.index, b.index);
            }
        }
    }
}

#[test]
fn test_deterministic() {
    for r in sample_requests() {
        assert_eq!(optimize_sheet_layout(&r), optimize_sheet_layout(&r));
    }
}

#[test]
fn test_rotation_never_worse() {
    for mut r in sample_requests() {
        r.allow_rotation = false;
        let fixed = optimize_sheet_layout(&r);
        r.allow_rotation = true;
        let free = optimize_sheet_layout(&r);
        assert!(free.summary.item_count >= fixed.summary.item_count);
    }
}

#[test]
fn test_efficiency_in_range() {
    for r in sample_requests() {
        let result = optimize_sheet_layout(&r);
        assert!((0.0..=100.0).contains(&result.summary.efficiency));
    }
}

#[test]
fn test_efficiency_value() {
    // Rotated 3x3 block of 58 x 94 with 2mm gaps: 178 x 286 on 200 x 287 usable
    let result = optimize_sheet_layout(&request(SheetKey::A4, 90.0, 54.0));
    assert_eq!(result.summary.efficiency, 88.7);
    assert_eq!(result.summary.waste_area_mm2, 200.0 * 287.0 - 178.0 * 286.0);
}

#[test]
fn test_quantity_clamped_to_one() {
    let mut r = request(SheetKey::A4, 90.0, 54.0);
    r.quantity = 0;
    let result = optimize_sheet_layout(&r);
    assert_eq!(result.settings.quantity, 1);
    assert_eq!(result.summary.sheet_count, 1);
}

#[test]
fn test_non_finite_inputs_use_defaults() {
    let mut r = request(SheetKey::A4, f64::NAN, f64::INFINITY);
    r.margin_mm = f64::NAN;
    r.gap_mm = -3.0;
    let result = optimize_sheet_layout(&r);

    assert_eq!(result.settings.margin_mm, 5.0);
    assert_eq!(result.settings.gap_mm, 0.0);
    // Falls back to the default 90 x 54 card
    assert!(result.fits());
    let trim = (result.item.width_mm, result.item.height_mm);
    assert!(trim == (90.0, 54.0) || trim == (54.0, 90.0));
}

#[test]
fn test_item_larger_than_sheet() {
    let result = optimize_sheet_layout(&request(SheetKey::A4, 300.0, 300.0));
    assert!(!result.fits());
    assert_eq!(result.summary.sheet_count, 0);
    assert!(result.placements.is_empty());
}

#[test]
fn test_microscopic_item_does_not_fit() {
    let mut req = request(SheetKey::A4, 0.00001, 0.00001);
    req.margin_mm = 0.0;
    req.bleed_mm = 0.0;
    req.gap_mm = 0.0;
    assert!(req.validate().is_ok());

    let result = optimize_sheet_layout(&req);
    assert!(!result.fits());
    assert_eq!(result.summary.item_count, 0);
    assert_eq!(result.summary.sheet_count, 0);
    assert!(result.placements.is_empty());
}

#[test]
fn test_dense_grid_indexes_stay_in_range() {
    let mut req = request(SheetKey::A4, 1.0, 1.0);
    req.margin_mm = 0.0;
    req.bleed_mm = 0.0;
    req.gap_mm = 0.0;
    req.allow_rotation = false;
    req.quantity = 100_000;

    let result = optimize_sheet_layout(&req);
    // 210 x 297 one-millimetre items
    assert_eq!(result.summary.item_count, 62_370);
    assert_eq!(result.placements.len(), 62_370);
    assert_eq!(result.placements.last().map(|p| p.index), Some(62_370));
    assert_eq!(result.summary.sheet_count, 2);
}

#[test]
fn test_custom_sheet() {
    let mut r = request(SheetKey::Custom, 50.0, 50.0);
    r.sheet = SheetSelection::custom(120.0, 120.0);
    r.bleed_mm = 0.0;
    r.gap_mm = 0.0;
    r.margin_mm = 10.0;
    let result = optimize_sheet_layout(&r);

    assert_eq!(result.sheet.key, SheetKey::Custom);
    assert_eq!(result.summary.item_count, 4);
    assert_eq!(result.summary.efficiency, 100.0);
    assert_eq!(result.placements[0].x, 10.0);
    assert_eq!(result.placements[0].y, 10.0);
}

#[test]
fn test_placement_trim_box() {
    let result = optimize_sheet_layout(&request(SheetKey::A4, 90.0, 54.0));
    let (x, y, w, h) = result.placements[0].trim_box();
    assert_eq!(x, result.placements[0].x + 2.0);
    assert_eq!(y, result.placements[0].y + 2.0);
    assert_eq!((w, h), (54.0, 90.0));
}
