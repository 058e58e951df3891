//! Hot folder recipes
//!
//! A recipe captures everything an automation watcher needs to impose and
//! export files dropped into a folder. Watching the folder happens elsewhere.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::export::{clamp_dpi, normalize_format, slugify};
use crate::options::LayoutRequest;
use crate::types::PrinterMarks;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HotFolderRecipe {
    pub id: String,
    pub name: String,
    pub module_name: String,
    pub watch_folder: PathBuf,
    pub output_folder: PathBuf,
    /// Layout applied to every incoming file
    pub request: LayoutRequest,
    pub format: String,
    pub dpi: u32,
    pub marks: PrinterMarks,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Build an enabled recipe stamped with the current time.
#[allow(clippy::too_many_arguments)]
pub fn build_hot_folder_recipe(
    name: &str,
    module_name: &str,
    watch_folder: impl Into<PathBuf>,
    output_folder: impl Into<PathBuf>,
    request: &LayoutRequest,
    format: &str,
    dpi: u32,
    marks: PrinterMarks,
) -> HotFolderRecipe {
    build_hot_folder_recipe_at(
        name,
        module_name,
        watch_folder,
        output_folder,
        request,
        format,
        dpi,
        marks,
        Utc::now(),
    )
}

/// Build an enabled recipe with a fixed creation time.
#[allow(clippy::too_many_arguments)]
pub fn build_hot_folder_recipe_at(
    name: &str,
    module_name: &str,
    watch_folder: impl Into<PathBuf>,
    output_folder: impl Into<PathBuf>,
    request: &LayoutRequest,
    format: &str,
    dpi: u32,
    marks: PrinterMarks,
    created_at: DateTime<Utc>,
) -> HotFolderRecipe {
    HotFolderRecipe {
        id: format!("hotfolder-{}-{}", slugify(name), created_at.timestamp_millis()),
        name: name.to_string(),
        module_name: module_name.to_string(),
        watch_folder: watch_folder.into(),
        output_folder: output_folder.into(),
        request: request.sanitized(),
        format: normalize_format(format),
        dpi: clamp_dpi(dpi),
        marks,
        enabled: true,
        created_at,
    }
}
