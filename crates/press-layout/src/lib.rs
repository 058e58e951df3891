pub mod book;
pub mod constants;
mod export;
mod hotfolder;
pub mod layout;
mod options;
mod sheet;
mod stats;
mod types;

pub use book::{
    BookPlan, Section, Spread, build_book_imposition, build_saddle_signature, pad_page_count,
    saddle_spreads,
};
pub use export::{
    ExportPlan, build_export_plan, build_export_plan_at, estimate_size_mb, slugify,
};
pub use hotfolder::{HotFolderRecipe, build_hot_folder_recipe, build_hot_folder_recipe_at};
pub use layout::{LayoutResult, Placement, compute_grid_fit, optimize_sheet_layout};
pub use options::*;
pub use sheet::*;
pub use stats::*;
pub use types::*;
