//! strawberry2coco: convert the strawberries folder dataset to COCO JSON.
//!
//! The dataset keeps one folder per subcategory, each with `images/` and a
//! `csv/` file of boxes per image, plus a category-level `labelmap.json` and
//! `sets/<split>.txt` split lists. This crate turns that tree into one COCO
//! object-detection document per split.
//!
//! # Modules
//!
//! - [`dataset`]: Readers for the on-disk layout (split lists, label map, box CSVs, image headers)
//! - [`conversion`]: Collecting records per split and writing the documents
//! - [`ir`]: COCO record types and JSON I/O
//! - [`error`]: Error types for strawberry2coco operations

pub mod conversion;
pub mod dataset;
pub mod error;
pub mod ir;

use std::path::PathBuf;

use clap::Parser;

pub use dataset::Split;
pub use error::ConvertError;

/// The strawberry2coco CLI application.
#[derive(Parser)]
#[command(name = "strawberry2coco")]
#[command(version, author, about)]
struct Cli {
    /// Dataset root directory (default: the parent of the executable's directory).
    #[arg(long, env = "STRAWBERRY2COCO_ROOT")]
    root: Option<PathBuf>,

    /// Output directory for COCO JSON files (default: <root>/annotations).
    #[arg(long, env = "STRAWBERRY2COCO_OUT")]
    out: Option<PathBuf>,

    /// Dataset splits to generate.
    #[arg(
        long,
        value_enum,
        num_args = 1..,
        default_values_t = Split::ALL.to_vec()
    )]
    splits: Vec<Split>,
}

/// Run the strawberry2coco CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => default_dataset_root()?,
    };
    let out_dir = cli.out.unwrap_or_else(|| root.join("annotations"));

    let options = conversion::ConvertOptions {
        root,
        out_dir,
        splits: cli.splits,
        category: dataset::CATEGORY_NAME.to_string(),
    };

    conversion::convert_dataset(&options, |report| println!("{}", report))?;
    Ok(())
}

/// The directory two levels above the running executable.
///
/// The tool is expected to live in a folder directly under the dataset root
/// (for example `<root>/scripts/strawberry2coco`).
fn default_dataset_root() -> Result<PathBuf, ConvertError> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe
        .parent()
        .and_then(|dir| dir.parent())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}
