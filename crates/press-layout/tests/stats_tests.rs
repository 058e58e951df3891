use press_layout::*;

#[test]
fn test_stats_saddle_stitch() {
    let spec = BookSpec {
        total_pages: 10,
        binding_type: BindingType::SaddleStitch,
        ..Default::default()
    };
    let stats = calculate_book_statistics(&build_book_imposition(&spec));

    assert_eq!(stats.total_pages, 10);
    // 10 pages padded to 12 (3 folded sheets)
    assert_eq!(stats.padded_pages, 12);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.sections, 1);
    assert_eq!(stats.spreads, 3);
    assert_eq!(stats.printed_sides, 6);
    assert_eq!(stats.spreads_per_sheet, 2);
    assert_eq!(stats.press_sheets, 3);
}

#[test]
fn test_stats_perfect_binding() {
    let spec = BookSpec {
        total_pages: 50,
        binding_type: BindingType::PerfectBinding,
        signature_size: 16,
        ..Default::default()
    };
    let stats = calculate_book_statistics(&build_book_imposition(&spec));

    // 50 pages padded to 52: signatures of 16, 16, 16 and 4
    assert_eq!(stats.padded_pages, 52);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.sections, 4);
    assert_eq!(stats.spreads, 13);
    assert_eq!(stats.printed_sides, 26);
    assert_eq!(stats.press_sheets, 13);
}

#[test]
fn test_stats_exact_fit() {
    let spec = BookSpec {
        total_pages: 16,
        ..Default::default()
    };
    let stats = calculate_book_statistics(&build_book_imposition(&spec));
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.spreads, 4);
}

#[test]
fn test_stats_spread_does_not_fit() {
    let spec = BookSpec {
        total_pages: 8,
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        sheet: SheetSelection::preset(SheetKey::A4),
        ..Default::default()
    };
    let stats = calculate_book_statistics(&build_book_imposition(&spec));
    assert_eq!(stats.spreads, 2);
    assert_eq!(stats.spreads_per_sheet, 0);
    assert_eq!(stats.press_sheets, 0);
}

#[test]
fn test_stats_for_hand_built_plan() {
    let mut plan = build_book_imposition(&BookSpec::default());
    // Inconsistent counts must not underflow
    plan.total_pages = plan.padded_pages + 4;
    let stats = calculate_book_statistics(&plan);
    assert_eq!(stats.blank_pages_added, 0);
}
