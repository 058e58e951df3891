use crate::book::BookPlan;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Production figures for a book plan
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookStatistics {
    /// Pages supplied by the caller
    pub total_pages: u32,
    /// Pages after rounding up to whole folded sheets
    pub padded_pages: u32,
    /// Number of blank pages added for padding
    pub blank_pages_added: u32,
    /// Signatures (perfect binding) or 1 for a single block
    pub sections: u32,
    /// Folded sheets across all sections
    pub spreads: u32,
    /// Front and back faces to print
    pub printed_sides: u32,
    /// Flat spreads that fit on one press sheet
    pub spreads_per_sheet: u32,
    /// Press sheets needed for one copy (0 when a spread does not fit)
    pub press_sheets: u32,
}

/// Calculate statistics for a book plan
pub fn calculate_book_statistics(plan: &BookPlan) -> BookStatistics {
    let spreads = plan.spread_count();

    BookStatistics {
        total_pages: plan.total_pages,
        padded_pages: plan.padded_pages,
        blank_pages_added: plan.padded_pages.saturating_sub(plan.total_pages),
        sections: plan.sections.len() as u32,
        spreads,
        printed_sides: spreads * 2,
        spreads_per_sheet: plan.layout.summary.item_count,
        press_sheets: plan.layout.summary.sheet_count,
    }
}
