use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_recrop::{Orientation, PageRange, SheetSize, SplitOptions, TrimOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recrop", about = "Crop and re-paginate PDF pages", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split each landscape page into two overlapping portrait pages
    Split {
        /// Input PDF file
        #[arg(short = 'i', long = "ifile")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short = 'o', long = "ofile")]
        output: PathBuf,

        /// Source sheet size, read in landscape
        #[arg(long, default_value = "a3", value_enum)]
        source: SheetArg,

        /// Target sheet size for each slice, read in portrait
        #[arg(long, default_value = "a4", value_enum)]
        target: SheetArg,

        /// Custom source sheet width in mm (portrait), overrides --source
        #[arg(long)]
        source_width_mm: Option<f32>,

        /// Custom source sheet height in mm (portrait), overrides --source
        #[arg(long)]
        source_height_mm: Option<f32>,

        /// Custom target sheet width in mm (portrait), overrides --target
        #[arg(long)]
        target_width_mm: Option<f32>,

        /// Custom target sheet height in mm (portrait), overrides --target
        #[arg(long)]
        target_height_mm: Option<f32>,

        /// Overlap between the two slices in mm (match your printer's
        /// physical print margin)
        #[arg(long, default_value = "4.0")]
        overlap: f32,

        /// Show page counts only, don't write a PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Trim a scanner's excess capture off the left and bottom edges
    Trim {
        /// Input PDF file
        #[arg(short = 'i', long = "ifile")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short = 'o', long = "ofile")]
        output: PathBuf,

        /// Measured scan area width in mm
        #[arg(long, default_value = "432.65")]
        scan_width_mm: f32,

        /// Measured scan area height in mm
        #[arg(long, default_value = "297.01")]
        scan_height_mm: f32,

        /// Nominal sheet the scan should measure
        #[arg(long, default_value = "a3", value_enum)]
        nominal: SheetArg,

        /// Orientation the nominal sheet was scanned in
        #[arg(long, default_value = "landscape", value_enum)]
        nominal_orientation: OrientationArg,

        /// Custom nominal sheet width in mm (portrait), overrides --nominal
        #[arg(long)]
        nominal_width_mm: Option<f32>,

        /// Custom nominal sheet height in mm (portrait), overrides --nominal
        #[arg(long)]
        nominal_height_mm: Option<f32>,

        /// Trim every page instead of only the first
        #[arg(long)]
        all_pages: bool,

        /// Show page counts only, don't write a PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    A3,
    A4,
    A5,
    Letter,
    Ledger,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<SheetArg> for SheetSize {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::A3 => Self::A3,
            SheetArg::A4 => Self::A4,
            SheetArg::A5 => Self::A5,
            SheetArg::Letter => Self::Letter,
            SheetArg::Ledger => Self::Ledger,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// Resolve a sheet from its preset, or from an explicit custom size when
/// both dimensions are given.
fn sheet_from_args(
    flag: &str,
    preset: SheetArg,
    width_mm: Option<f32>,
    height_mm: Option<f32>,
) -> Result<SheetSize> {
    match (width_mm, height_mm) {
        (None, None) => Ok(preset.into()),
        (Some(width_mm), Some(height_mm)) => Ok(SheetSize::Custom {
            width_mm,
            height_mm,
        }),
        _ => bail!("custom {flag} sheet needs both --{flag}-width-mm and --{flag}-height-mm"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            source,
            target,
            source_width_mm,
            source_height_mm,
            target_width_mm,
            target_height_mm,
            overlap,
            stats_only,
        } => {
            let options = SplitOptions {
                source: sheet_from_args("source", source, source_width_mm, source_height_mm)?,
                target: sheet_from_args("target", target, target_width_mm, target_height_mm)?,
                overlap_mm: overlap,
            };

            let doc = pdf_recrop::load_pdf(&input)
                .await
                .with_context(|| format!("failed to read {}", input.display()))?;

            let stats = pdf_recrop::calculate_split_statistics(&doc)
                .with_context(|| format!("cannot split {}", input.display()))?;
            println!("Source pages: {}", stats.source_pages);
            println!("Output pages: {}", stats.output_pages);

            if stats_only {
                return Ok(());
            }

            let cropped = pdf_recrop::split(&doc, &options)
                .await
                .with_context(|| format!("failed to split {}", input.display()))?;
            pdf_recrop::save_pdf(cropped, &output)
                .await
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Split → {}", output.display());
        }

        Commands::Trim {
            input,
            output,
            scan_width_mm,
            scan_height_mm,
            nominal,
            nominal_orientation,
            nominal_width_mm,
            nominal_height_mm,
            all_pages,
            stats_only,
        } => {
            let pages = if all_pages {
                PageRange::All
            } else {
                PageRange::First
            };
            let options = TrimOptions {
                scan_width_mm,
                scan_height_mm,
                nominal: sheet_from_args("nominal", nominal, nominal_width_mm, nominal_height_mm)?,
                nominal_orientation: nominal_orientation.into(),
                pages,
            };

            let doc = pdf_recrop::load_pdf(&input)
                .await
                .with_context(|| format!("failed to read {}", input.display()))?;

            let stats = pdf_recrop::calculate_trim_statistics(&doc, pages)
                .with_context(|| format!("cannot trim {}", input.display()))?;
            println!("Source pages: {}", stats.source_pages);
            println!("Output pages: {}", stats.output_pages);

            if stats_only {
                return Ok(());
            }

            let cropped = pdf_recrop::trim(&doc, &options)
                .await
                .with_context(|| format!("failed to trim {}", input.display()))?;
            pdf_recrop::save_pdf(cropped, &output)
                .await
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Trimmed → {}", output.display());
        }
    }

    Ok(())
}
