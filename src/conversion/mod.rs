//! Folder dataset to COCO conversion.
//!
//! # ID Assignment Policy (for determinism)
//!
//! Within one split:
//! - **Subcategories** are visited in file-name order.
//! - **Images** inside a subcategory are visited in base-name order and get
//!   ids 1, 2, 3, ... across the whole split as they are emitted.
//! - **Annotations** get ids 1, 2, 3, ... in image order, then CSV row order.
//! - **Categories** keep their label-map ids.
//!
//! A listed image that cannot be resolved to a file consumes no id, so both
//! sequences are always contiguous. Re-running over an unchanged tree yields
//! byte-identical documents.

pub mod report;

pub use report::{SplitCounts, SplitReport};

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::dataset::boxes::read_csv_boxes;
use crate::dataset::labelmap::{load_label_map, LabelMap};
use crate::dataset::probe::image_dimensions;
use crate::dataset::split::read_split_list;
use crate::dataset::{
    output_file_name, split_file_path, supercategory_for, Split, CSV_DIR, IMAGES_DIR,
    LABELMAP_FILE, LISTED_IMAGE_EXTENSIONS, RESOLVE_IMAGE_EXTENSIONS, SETS_DIR,
};
use crate::error::ConvertError;
use crate::ir::io_coco_json::write_coco_json;
use crate::ir::{
    Annotation, AnnotationId, Category, CocoDocument, DatasetInfo, IdSequence, Image, ImageId,
    COCO_DOCUMENT_VERSION,
};

/// Source URL recorded in every document's `info` block.
pub const SOURCE_URL: &str = "https://www.kaggle.com/datasets/abdallahalidev/plantvillage-dataset";

/// Year recorded in every document's `info` block.
pub const SOURCE_YEAR: u32 = 2015;

/// Records gathered for one split, before wrapping into a document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectedSplit {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
    /// CSV data rows dropped across all selected images.
    pub rows_skipped: usize,
    /// Listed base names with no resolvable image file.
    pub images_unresolved: usize,
}

/// Metadata for a document's `info` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub description: String,
    pub url: String,
    pub year: u32,
}

impl DocumentMetadata {
    /// The metadata written for `split` of `category`.
    pub fn for_split(category: &str, split: Split) -> Self {
        Self {
            description: format!("PlantVillage {} {} split", category, split),
            url: SOURCE_URL.to_string(),
            year: SOURCE_YEAR,
        }
    }
}

/// Builds the COCO categories from a label map, ordered by label id.
pub fn build_categories(label_map: &LabelMap, category_name: &str) -> Vec<Category> {
    let supercategory = supercategory_for(category_name);
    label_map
        .iter()
        .map(|(&id, name)| Category::new(id, name.clone(), supercategory))
        .collect()
}

/// Collects the images, annotations and categories of one split.
///
/// `category_root` is `<root>/<category_name>`. The label map, split list
/// and per-image CSVs are optional; only I/O failures on files that exist,
/// a malformed label map, or an unreadable image header are errors.
pub fn collect_split(
    category_root: &Path,
    split: Split,
    category_name: &str,
) -> Result<CollectedSplit, ConvertError> {
    let label_map = load_label_map(&category_root.join(LABELMAP_FILE))?;
    let selected = read_split_list(&split_file_path(category_root, split))?;

    let mut collected = CollectedSplit {
        categories: build_categories(&label_map, category_name),
        ..Default::default()
    };
    let mut image_ids = IdSequence::new();
    let mut annotation_ids = IdSequence::new();

    for (subcategory, subcategory_dir) in list_subcategories(category_root)? {
        let images_dir = subcategory_dir.join(IMAGES_DIR);
        if !images_dir.is_dir() {
            log::debug!("skipping {}: no {} folder", subcategory, IMAGES_DIR);
            continue;
        }
        let csv_dir = subcategory_dir.join(CSV_DIR);

        let available = listed_image_stems(&images_dir)?;
        for stem in selected.intersection(&available) {
            let Some(image_path) = resolve_image(&images_dir, stem) else {
                log::debug!("no image file for '{}' in {}", stem, images_dir.display());
                collected.images_unresolved += 1;
                continue;
            };

            let (width, height) = image_dimensions(&image_path)?;
            let image_id: ImageId = image_ids.next_id();
            collected.images.push(Image::new(
                image_id,
                format!(
                    "{}/{}/images/{}",
                    category_name,
                    subcategory,
                    file_name_of(&image_path)
                ),
                width,
                height,
            ));

            let parsed = read_csv_boxes(&csv_dir.join(format!("{}.csv", stem)))?;
            collected.rows_skipped += parsed.rows_skipped;
            for parsed_box in parsed.boxes {
                let annotation_id: AnnotationId = annotation_ids.next_id();
                collected.annotations.push(Annotation::new(
                    annotation_id,
                    image_id,
                    parsed_box.category_id,
                    parsed_box.bbox,
                ));
            }
        }
    }

    Ok(collected)
}

/// Wraps collected records into a complete COCO document.
pub fn build_coco_document(
    images: Vec<Image>,
    annotations: Vec<Annotation>,
    categories: Vec<Category>,
    metadata: &DocumentMetadata,
) -> CocoDocument {
    CocoDocument {
        info: DatasetInfo {
            year: metadata.year,
            version: COCO_DOCUMENT_VERSION.to_string(),
            description: metadata.description.clone(),
            url: metadata.url.clone(),
        },
        images,
        annotations,
        categories,
        licenses: vec![],
    }
}

/// Collects one split and writes `<out_dir>/<category>_instances_<split>.json`.
pub fn convert_split(
    category_root: &Path,
    out_dir: &Path,
    split: Split,
    category_name: &str,
) -> Result<SplitReport, ConvertError> {
    let collected = collect_split(category_root, split, category_name)?;

    let mut report = SplitReport::new(split, out_dir.join(output_file_name(category_name, split)));
    report.counts = SplitCounts {
        images: collected.images.len(),
        categories: collected.categories.len(),
        annotations: collected.annotations.len(),
    };
    report.rows_skipped = collected.rows_skipped;
    report.images_unresolved = collected.images_unresolved;

    let doc = build_coco_document(
        collected.images,
        collected.annotations,
        collected.categories,
        &DocumentMetadata::for_split(category_name, split),
    );
    write_coco_json(&report.output, &doc)?;

    Ok(report)
}

/// Resolved inputs for a whole conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Dataset root; the category lives at `<root>/<category>`.
    pub root: PathBuf,
    /// Directory receiving one JSON file per split.
    pub out_dir: PathBuf,
    pub splits: Vec<Split>,
    pub category: String,
}

/// Converts every requested split, calling `on_split` after each file is written.
///
/// The output directory is created first. Splits are written one at a time,
/// so a failure leaves earlier splits' files in place.
///
/// # Errors
/// Returns [`ConvertError::CategoryRootMissing`] if `<root>/<category>` is
/// not a directory, or the first error any split hits.
pub fn convert_dataset(
    options: &ConvertOptions,
    mut on_split: impl FnMut(&SplitReport),
) -> Result<Vec<SplitReport>, ConvertError> {
    fs::create_dir_all(&options.out_dir)?;

    let category_root = options.root.join(&options.category);
    if !category_root.is_dir() {
        return Err(ConvertError::CategoryRootMissing {
            category: options.category.clone(),
            path: category_root,
        });
    }

    let mut reports = Vec::with_capacity(options.splits.len());
    for &split in &options.splits {
        let report = convert_split(&category_root, &options.out_dir, split, &options.category)?;
        if report.rows_skipped > 0 || report.images_unresolved > 0 {
            log::debug!(
                "{}: dropped {} box row(s), {} unresolved image(s)",
                split,
                report.rows_skipped,
                report.images_unresolved
            );
        }
        on_split(&report);
        reports.push(report);
    }

    Ok(reports)
}

/// Direct subdirectories of the category root in name order, excluding `sets`.
fn list_subcategories(category_root: &Path) -> Result<Vec<(String, PathBuf)>, ConvertError> {
    let mut subcategories = Vec::new();

    for entry in shallow_walk(category_root) {
        let entry = entry.map_err(|source| ConvertError::DirectoryWalk {
            path: category_root.to_path_buf(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_dir() || name == SETS_DIR {
            continue;
        }
        subcategories.push((name, entry.into_path()));
    }

    Ok(subcategories)
}

/// Base names of entries in `images_dir` carrying one of the listed extensions.
///
/// Any entry kind counts here, hidden names included; [`resolve_image`] later
/// insists on a regular file.
fn listed_image_stems(images_dir: &Path) -> Result<BTreeSet<String>, ConvertError> {
    let mut stems = BTreeSet::new();

    for entry in shallow_walk(images_dir) {
        let entry = entry.map_err(|source| ConvertError::DirectoryWalk {
            path: images_dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        let has_listed_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| LISTED_IMAGE_EXTENSIONS.contains(&ext));
        if !has_listed_extension {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            stems.insert(stem.to_string_lossy().into_owned());
        }
    }

    Ok(stems)
}

/// First existing `<stem>.<ext>` in resolution order.
fn resolve_image(images_dir: &Path, stem: &str) -> Option<PathBuf> {
    RESOLVE_IMAGE_EXTENSIONS
        .iter()
        .map(|ext| images_dir.join(format!("{}.{}", stem, ext)))
        .find(|candidate| candidate.is_file())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn shallow_walk(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}
