//! Export plan descriptors
//!
//! An export plan tells the external export pipeline what to produce for a
//! layout: output name, format, resolution, marks and an estimated file
//! size. Nothing here touches the filesystem.

use chrono::{DateTime, Utc};

use crate::constants::*;
use crate::layout::LayoutResult;
use crate::types::PrinterMarks;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptor for one export job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExportPlan {
    pub id: String,
    pub job_name: String,
    pub module_name: String,
    /// Upper-case format name, e.g. `PDF`
    pub format: String,
    pub dpi: u32,
    pub marks: PrinterMarks,
    pub output_name: String,
    pub item_count: u32,
    pub sheet_count: u32,
    pub estimated_mb: f64,
    pub created_at: DateTime<Utc>,
}

/// Build an export plan stamped with the current time.
pub fn build_export_plan(
    job_name: &str,
    module_name: &str,
    format: &str,
    dpi: u32,
    marks: PrinterMarks,
    layout: &LayoutResult,
) -> ExportPlan {
    build_export_plan_at(job_name, module_name, format, dpi, marks, layout, Utc::now())
}

/// Build an export plan with a fixed creation time.
pub fn build_export_plan_at(
    job_name: &str,
    module_name: &str,
    format: &str,
    dpi: u32,
    marks: PrinterMarks,
    layout: &LayoutResult,
    created_at: DateTime<Utc>,
) -> ExportPlan {
    let format = normalize_format(format);
    let dpi = clamp_dpi(dpi);
    let sheet_count = layout.summary.sheet_count;

    ExportPlan {
        id: format!("export-{}", created_at.timestamp_millis()),
        job_name: job_name.to_string(),
        module_name: module_name.to_string(),
        output_name: output_name(job_name, &format),
        format,
        dpi,
        marks,
        item_count: layout.summary.item_count,
        sheet_count,
        estimated_mb: estimate_size_mb(sheet_count, dpi),
        created_at,
    }
}

/// Rough output size: 2.4 MB per sheet at 300 dpi, scaled linearly.
pub fn estimate_size_mb(sheet_count: u32, dpi: u32) -> f64 {
    let estimate = sheet_count as f64 * (dpi as f64 / REFERENCE_DPI) * MB_PER_SHEET_AT_REFERENCE;
    round1(estimate.max(MIN_ESTIMATED_MB))
}

pub(crate) fn clamp_dpi(dpi: u32) -> u32 {
    dpi.max(MIN_EXPORT_DPI)
}

pub(crate) fn normalize_format(format: &str) -> String {
    let format = format.trim().trim_start_matches('.');
    if format.is_empty() {
        "PDF".to_string()
    } else {
        format.to_uppercase()
    }
}

/// `<slug>.<format>` with a lower-case extension
fn output_name(job_name: &str, format: &str) -> String {
    format!("{}.{}", slugify(job_name), format.to_lowercase())
}

/// Lower-case ASCII slug: runs of other characters become a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_OUTPUT_STEM.to_string()
    } else {
        slug
    }
}

// =============================================================================
// Tests
// =============================================================================
