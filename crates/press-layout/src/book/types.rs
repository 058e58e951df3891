//! Book imposition data types

use crate::layout::LayoutResult;
use crate::sheet::SheetSpec;
use crate::types::{BindingType, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page numbers printed side by side on one face of a folded sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PagePair {
    pub left: u32,
    pub right: u32,
}

impl PagePair {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }
}

/// Both faces of one folded sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spread {
    pub front: PagePair,
    pub back: PagePair,
}

impl Spread {
    /// All four page numbers, front first
    pub fn pages(&self) -> [u32; 4] {
        [
            self.front.left,
            self.front.right,
            self.back.left,
            self.back.right,
        ]
    }
}

/// A run of nested spreads bound as one unit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Section {
    pub label: String,
    pub spreads: Vec<Spread>,
    pub start_page: u32,
    pub end_page: u32,
}

impl Section {
    pub fn page_count(&self) -> u32 {
        self.end_page - self.start_page + 1
    }
}

/// Page pairing and flat sheet layout for a booklet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookPlan {
    pub binding_type: BindingType,
    pub total_pages: u32,
    pub padded_pages: u32,
    pub page_size: Size,
    pub sheet: SheetSpec,
    pub sections: Vec<Section>,
    /// Layout of flat spreads (two pages wide) on the press sheet
    pub layout: LayoutResult,
}

impl BookPlan {
    /// Spreads across all sections
    pub fn spread_count(&self) -> u32 {
        self.sections.iter().map(|s| s.spreads.len() as u32).sum()
    }
}
