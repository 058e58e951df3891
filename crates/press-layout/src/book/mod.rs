//! Booklet imposition
//!
//! This module pairs book pages onto folded sheets:
//! - Signature walk (which pages share a sheet face)
//! - Planning (sections, spreads and the flat press-sheet layout)

mod plan;
mod signature;
mod types;

pub use plan::*;
pub use signature::*;
pub use types::*;
