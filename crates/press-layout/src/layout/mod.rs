//! Layout calculation modules for sheet imposition
//!
//! This module handles all the geometric calculations for placing items on
//! a press sheet:
//! - Grid fit (columns, rows and waste for one orientation)
//! - Optimization (orientation choice, centering, placement emission)

mod grid;
mod optimize;
mod types;

pub use grid::*;
pub use optimize::*;
pub use types::*;
