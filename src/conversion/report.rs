//! Per-split conversion report.

use std::fmt;
use std::path::PathBuf;

use crate::dataset::Split;

/// What one split's conversion produced and what it dropped along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitReport {
    pub split: String,
    /// Where the document was written.
    pub output: PathBuf,
    pub counts: SplitCounts,
    /// CSV data rows dropped as malformed or non-positive.
    pub rows_skipped: usize,
    /// Listed base names whose image file could not be resolved.
    pub images_unresolved: usize,
}

impl SplitReport {
    pub fn new(split: Split, output: impl Into<PathBuf>) -> Self {
        Self {
            split: split.as_str().to_string(),
            output: output.into(),
            counts: SplitCounts::default(),
            rows_skipped: 0,
            images_unresolved: 0,
        }
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated: {} ({} images, {} annotations)",
            self.output.display(),
            self.counts.images,
            self.counts.annotations
        )
    }
}

/// Record counts in a written document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitCounts {
    pub images: usize,
    pub categories: usize,
    pub annotations: usize,
}
