mod logger;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use press_layout::{BindingType, BookSpec, LayoutRequest, PrinterMarks, SheetKey, SheetSelection};
use std::path::PathBuf;

use logger::StderrLogger;

#[derive(Parser)]
#[command(name = "prest", about = "Press sheet layout tools", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known press sheet sizes
    Sheets,

    /// Fit copies of one item onto a press sheet
    Layout {
        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        spacing: SpacingArgs,

        /// Item trim width in mm
        #[arg(long, default_value = "90.0")]
        width: f64,

        /// Item trim height in mm
        #[arg(long, default_value = "54.0")]
        height: f64,

        /// Keep items in their given orientation
        #[arg(long)]
        no_rotation: bool,

        /// Number of copies to print
        #[arg(short, long, default_value = "100")]
        quantity: u32,

        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Pair booklet pages and lay out the flat spreads
    Book {
        #[command(flatten)]
        sheet: SheetArgs,

        #[command(flatten)]
        spacing: SpacingArgs,

        /// Number of pages in the book
        #[arg(short, long, default_value = "16")]
        pages: u32,

        /// Binding type
        #[arg(long, default_value = "saddle-stitch", value_enum)]
        binding: BindingArg,

        /// Pages per signature (perfect binding)
        #[arg(long, default_value = "16")]
        signature_size: u32,

        /// Page trim width in mm
        #[arg(long, default_value = "148.0")]
        page_width: f64,

        /// Page trim height in mm
        #[arg(long, default_value = "210.0")]
        page_height: f64,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct SheetArgs {
    /// Press sheet size (A5, A4, A3, SRA4, SRA3, Letter, Tabloid, 12x18, 13x19, Custom)
    #[arg(long, default_value = "SRA3")]
    sheet: SheetKey,

    /// Custom sheet width in mm
    #[arg(long)]
    sheet_width: Option<f64>,

    /// Custom sheet height in mm
    #[arg(long)]
    sheet_height: Option<f64>,
}

#[derive(Args)]
struct SpacingArgs {
    /// Sheet margin in mm (uniform on all sides)
    #[arg(long, default_value = "5.0")]
    margin: f64,

    /// Bleed around each item in mm
    #[arg(long, default_value = "2.0")]
    bleed: f64,

    /// Gap between items in mm
    #[arg(long, default_value = "2.0")]
    gap: f64,
}

#[derive(Args)]
struct ConfigArgs {
    /// Load settings from a JSON file instead of the flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExportArgs {
    /// Also plan an export for this job name
    #[arg(long)]
    job_name: Option<String>,

    /// Module recorded in the export plan
    #[arg(long, default_value = "layout")]
    module: String,

    /// Export format
    #[arg(long, default_value = "pdf")]
    format: String,

    /// Export resolution
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// Add crop marks
    #[arg(long)]
    crop_marks: bool,

    /// Add bleed marks
    #[arg(long)]
    bleed_marks: bool,

    /// Add registration marks
    #[arg(long)]
    registration_marks: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    SaddleStitch,
    Perfect,
}

impl From<BindingArg> for BindingType {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::SaddleStitch => Self::SaddleStitch,
            BindingArg::Perfect => Self::PerfectBinding,
        }
    }
}

impl From<&SheetArgs> for SheetSelection {
    fn from(args: &SheetArgs) -> Self {
        Self {
            key: args.sheet,
            custom_width_mm: args.sheet_width,
            custom_height_mm: args.sheet_height,
        }
    }
}

impl From<&ExportArgs> for PrinterMarks {
    fn from(args: &ExportArgs) -> Self {
        Self {
            crop: args.crop_marks,
            bleed: args.bleed_marks,
            registration: args.registration_marks,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Sheets => {
            for preset in press_layout::sheet_presets() {
                println!(
                    "{:<8} {:>7.1} x {:>7.1} mm  {}",
                    preset.key.as_str(),
                    preset.width_mm,
                    preset.height_mm,
                    preset.label
                );
            }
        }

        Commands::Layout {
            sheet,
            spacing,
            width,
            height,
            no_rotation,
            quantity,
            config,
            export,
        } => {
            let request = match &config.config {
                Some(path) => {
                    info!("Loading layout settings from {}", path.display());
                    LayoutRequest::load(path).await?
                }
                None => LayoutRequest {
                    sheet: SheetSelection::from(&sheet),
                    item_width_mm: width,
                    item_height_mm: height,
                    margin_mm: spacing.margin,
                    bleed_mm: spacing.bleed,
                    gap_mm: spacing.gap,
                    allow_rotation: !no_rotation,
                    quantity,
                },
            };

            if let Err(e) = request.validate() {
                warn!("{e}; out-of-range values will be clamped");
            }

            if let Some(path) = &config.save_config {
                request.save(path).await?;
                info!("Saved layout settings to {}", path.display());
            }

            let result = press_layout::optimize_sheet_layout(&request);
            let plan = export.job_name.as_deref().map(|job_name| {
                press_layout::build_export_plan(
                    job_name,
                    &export.module,
                    &export.format,
                    export.dpi,
                    PrinterMarks::from(&export),
                    &result,
                )
            });

            if config.json {
                let output = serde_json::json!({ "layout": result, "export": plan });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            let summary = &result.summary;
            println!("Sheet Layout:");
            println!(
                "  Sheet: {} ({} x {} mm)",
                result.sheet.label, result.sheet.width_mm, result.sheet.height_mm
            );
            if !result.fits() {
                println!("  Item does not fit on the sheet");
                return Ok(());
            }
            println!(
                "  Grid: {} x {} = {} up{}",
                summary.columns,
                summary.rows,
                summary.item_count,
                if summary.rotated { " (rotated)" } else { "" }
            );
            println!("  Sheets needed: {}", summary.sheet_count);
            println!("  Efficiency: {}%", summary.efficiency);
            println!("  Waste: {} mm²", summary.waste_area_mm2);

            if let Some(plan) = plan {
                println!("Export Plan:");
                println!("  Output: {} ({}, {} dpi)", plan.output_name, plan.format, plan.dpi);
                println!("  Estimated size: {} MB", plan.estimated_mb);
            }
        }

        Commands::Book {
            sheet,
            spacing,
            pages,
            binding,
            signature_size,
            page_width,
            page_height,
            config,
        } => {
            let spec = match &config.config {
                Some(path) => {
                    info!("Loading book settings from {}", path.display());
                    BookSpec::load(path).await?
                }
                None => BookSpec {
                    total_pages: pages,
                    binding_type: binding.into(),
                    signature_size,
                    page_width_mm: page_width,
                    page_height_mm: page_height,
                    sheet: SheetSelection::from(&sheet),
                    margin_mm: spacing.margin,
                    bleed_mm: spacing.bleed,
                    gap_mm: spacing.gap,
                },
            };

            if let Err(e) = spec.validate() {
                warn!("{e}; out-of-range values will be clamped");
            }

            if let Some(path) = &config.save_config {
                spec.save(path).await?;
                info!("Saved book settings to {}", path.display());
            }

            let plan = press_layout::build_book_imposition(&spec);
            let stats = press_layout::calculate_book_statistics(&plan);

            if config.json {
                let output = serde_json::json!({ "plan": plan, "statistics": stats });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("Book Imposition:");
            println!("  Binding: {}", plan.binding_type.label());
            println!("  Pages: {} (padded to {})", stats.total_pages, stats.padded_pages);
            println!("  Blank pages added: {}", stats.blank_pages_added);
            for section in &plan.sections {
                println!(
                    "  {} (pages {}-{}):",
                    section.label, section.start_page, section.end_page
                );
                for spread in &section.spreads {
                    println!(
                        "    front [{} | {}]  back [{} | {}]",
                        spread.front.left, spread.front.right, spread.back.left, spread.back.right
                    );
                }
            }
            println!("  Printed sides: {}", stats.printed_sides);
            if stats.spreads_per_sheet == 0 {
                println!("  Spreads do not fit on {}", plan.sheet.label);
            } else {
                println!(
                    "  Press sheets: {} ({} spreads per {})",
                    stats.press_sheets, stats.spreads_per_sheet, plan.sheet.label
                );
            }
        }
    }

    Ok(())
}
