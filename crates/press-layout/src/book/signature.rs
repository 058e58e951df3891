//! Saddle-stitch page pairing
//!
//! Folded sheets nest inside each other, so the outermost sheet carries the
//! first and last pages and each sheet further in moves two pages closer to
//! the middle:
//!
//! ```text
//! 16 pages, outside-in:
//!   sheet 1: front [16 | 1]   back [2 | 15]
//!   sheet 2: front [14 | 3]   back [4 | 13]
//!   sheet 3: front [12 | 5]   back [6 | 11]
//!   sheet 4: front [10 | 7]   back [8 | 9]
//! ```

use crate::constants::PAGES_PER_SHEET;

use super::{PagePair, Spread};

/// Round a page count up to whole folded sheets (multiple of 4, at least 4).
///
/// Counts within 4 of `u32::MAX` pad down to the largest multiple of 4.
pub fn pad_page_count(pages: u32) -> u32 {
    let sheets = pages
        .max(1)
        .div_ceil(PAGES_PER_SHEET)
        .min(u32::MAX / PAGES_PER_SHEET);
    sheets * PAGES_PER_SHEET
}

/// Lazy outside-in walk over the spreads of one saddle-stitched block.
///
/// Clone the walk before iterating to replay the same range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaddleSpreads {
    low: u32,
    high: u32,
}

/// Spreads for pages `start_page..=end_page`, outermost sheet first.
pub fn saddle_spreads(start_page: u32, end_page: u32) -> SaddleSpreads {
    SaddleSpreads {
        low: start_page,
        high: end_page,
    }
}

impl Iterator for SaddleSpreads {
    type Item = Spread;

    fn next(&mut self) -> Option<Spread> {
        if self.low >= self.high {
            return None;
        }

        let spread = Spread {
            front: PagePair::new(self.high, self.low),
            back: PagePair::new(self.low + 1, self.high - 1),
        };

        self.low = self.low.saturating_add(2);
        self.high = self.high.saturating_sub(2);
        Some(spread)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.low >= self.high {
            0
        } else {
            ((self.high - self.low) as usize).div_ceil(4)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SaddleSpreads {}

/// Collect the spreads for pages `start_page..=end_page`.
pub fn build_saddle_signature(start_page: u32, end_page: u32) -> Vec<Spread> {
    saddle_spreads(start_page, end_page).collect()
}

// =============================================================================
// Tests
// =============================================================================
