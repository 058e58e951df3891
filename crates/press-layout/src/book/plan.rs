//! Book imposition planning
//!
//! Splits a padded page range into sections, pairs pages within each
//! section, then lays out the flat two-page spreads on the press sheet.

use log::debug;

use crate::constants::BOOK_BLOCK_LABEL;
use crate::layout::optimize_sheet_layout;
use crate::options::{BookSpec, LayoutRequest};
use crate::types::{BindingType, Size};

use super::{BookPlan, Section, build_saddle_signature, pad_page_count};

/// Plan page pairing and sheet layout for a booklet.
pub fn build_book_imposition(spec: &BookSpec) -> BookPlan {
    let spec = spec.sanitized();
    let padded_pages = pad_page_count(spec.total_pages);
    let section_size = section_size(spec.binding_type, spec.signature_size, padded_pages);

    let sections = build_sections(spec.binding_type, section_size, padded_pages);
    let spread_count: u32 = sections.iter().map(|s| s.spreads.len() as u32).sum();

    debug!(
        "{} book: {} pages padded to {}, {} section(s), {} spreads",
        spec.binding_type.label(),
        spec.total_pages,
        padded_pages,
        sections.len(),
        spread_count
    );

    // Front and back of every spread are printed separately
    let layout = optimize_sheet_layout(&LayoutRequest {
        sheet: spec.sheet,
        item_width_mm: spec.page_width_mm * 2.0,
        item_height_mm: spec.page_height_mm,
        margin_mm: spec.margin_mm,
        bleed_mm: spec.bleed_mm,
        gap_mm: spec.gap_mm,
        allow_rotation: false,
        quantity: spread_count * 2,
    });

    BookPlan {
        binding_type: spec.binding_type,
        total_pages: spec.total_pages,
        padded_pages,
        page_size: Size::new(spec.page_width_mm, spec.page_height_mm),
        sheet: layout.sheet.clone(),
        sections,
        layout,
    }
}

/// Pages per section: whole signatures for perfect binding, otherwise the
/// entire book as one block.
fn section_size(binding_type: BindingType, signature_size: u32, padded_pages: u32) -> u32 {
    match binding_type {
        BindingType::PerfectBinding => (signature_size / 4 * 4).max(4),
        BindingType::SaddleStitch => padded_pages,
    }
}

fn build_sections(binding_type: BindingType, section_size: u32, padded_pages: u32) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut start_page = 1;

    while start_page <= padded_pages {
        let end_page = start_page
            .saturating_add(section_size.saturating_sub(1))
            .min(padded_pages);
        let label = match binding_type {
            BindingType::PerfectBinding => format!("Signature {}", sections.len() + 1),
            BindingType::SaddleStitch => BOOK_BLOCK_LABEL.to_string(),
        };

        sections.push(Section {
            label,
            spreads: build_saddle_signature(start_page, end_page),
            start_page,
            end_page,
        });

        match end_page.checked_add(1) {
            Some(next) => start_page = next,
            None => break,
        }
    }

    sections
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_size() {
        assert_eq!(section_size(BindingType::PerfectBinding, 16, 64), 16);
        assert_eq!(section_size(BindingType::PerfectBinding, 18, 64), 16);
        assert_eq!(section_size(BindingType::PerfectBinding, 2, 64), 4);
        assert_eq!(section_size(BindingType::SaddleStitch, 16, 64), 64);
    }

    #[test]
    fn test_sections_cover_all_pages() {
        let sections = build_sections(BindingType::PerfectBinding, 16, 40);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Signature 1");
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 16));
        assert_eq!((sections[1].start_page, sections[1].end_page), (17, 32));
        // Last signature is short
        assert_eq!((sections[2].start_page, sections[2].end_page), (33, 40));
        assert_eq!(sections[2].spreads.len(), 2);
        assert_eq!(sections[2].label, "Signature 3");
    }

    #[test]
    fn test_saddle_stitch_single_block() {
        let sections = build_sections(BindingType::SaddleStitch, 12, 12);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "Book Block");
        assert_eq!(sections[0].page_count(), 12);
        assert_eq!(sections[0].spreads.len(), 3);
    }

    #[test]
    fn test_oversized_signature_covers_whole_book() {
        let size = section_size(BindingType::PerfectBinding, u32::MAX, 8);
        assert_eq!(size, u32::MAX - 3);
        let sections = build_sections(BindingType::PerfectBinding, size, 8);
        assert_eq!(sections.len(), 1);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 8));
        assert_eq!(sections[0].spreads.len(), 2);
    }

    #[test]
    fn test_page_count_clamped_before_planning() {
        let plan = build_book_imposition(&BookSpec {
            total_pages: u32::MAX - 2,
            binding_type: BindingType::PerfectBinding,
            signature_size: 32,
            ..Default::default()
        });
        assert_eq!(plan.total_pages, crate::constants::MAX_BOOK_PAGES);
        assert_eq!(plan.padded_pages, crate::constants::MAX_BOOK_PAGES);
        assert_eq!(plan.sections.last().map(|s| s.end_page), Some(plan.padded_pages));
    }
}
