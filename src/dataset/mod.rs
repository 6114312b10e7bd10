//! Readers for the on-disk strawberries dataset layout.
//!
//! ```text
//! <root>/<category>/sets/<split>.txt
//! <root>/<category>/labelmap.json
//! <root>/<category>/<subcategory>/images/*.{jpg,JPG,png,PNG,bmp,BMP}
//! <root>/<category>/<subcategory>/csv/<stem>.csv
//! ```
//!
//! Split lists, label maps and box CSVs are all optional: a missing file
//! contributes no data. Each reader surfaces that through [`read_optional`]
//! rather than by swallowing I/O errors, so a file that exists but cannot
//! be read still fails loudly.

pub mod boxes;
pub mod labelmap;
pub mod probe;
pub mod split;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// The only category this tool converts.
pub const CATEGORY_NAME: &str = "strawberries";

/// Directory under the category root holding the split lists; never a subcategory.
pub const SETS_DIR: &str = "sets";

/// Label map file name under the category root.
pub const LABELMAP_FILE: &str = "labelmap.json";

/// Per-subcategory image folder.
pub const IMAGES_DIR: &str = "images";

/// Per-subcategory box CSV folder.
pub const CSV_DIR: &str = "csv";

/// Extensions whose stems are considered for a split (exact case).
pub const LISTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "JPG", "png", "PNG"];

/// Extensions tried, in order, when resolving a selected stem to a file.
pub const RESOLVE_IMAGE_EXTENSIONS: &[&str] = &["jpg", "JPG", "png", "PNG", "bmp", "BMP"];

/// A dataset partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in their conventional order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<category_root>/sets/<split>.txt`
pub fn split_file_path(category_root: &Path, split: Split) -> PathBuf {
    category_root
        .join(SETS_DIR)
        .join(format!("{}.txt", split.as_str()))
}

/// `<category>_instances_<split>.json`
pub fn output_file_name(category: &str, split: Split) -> String {
    format!("{}_instances_{}.json", category, split.as_str())
}

/// COCO supercategory for a category directory name: one trailing `s`
/// stripped, otherwise the name unchanged.
pub fn supercategory_for(category: &str) -> &str {
    category.strip_suffix('s').unwrap_or(category)
}

/// Reads a UTF-8 file, returning `None` if it does not exist.
///
/// Every other I/O failure is returned as an error.
pub fn read_optional(path: &Path) -> Result<Option<String>, ConvertError> {
    missing_as_none(fs::read_to_string(path))
}

/// Like [`read_optional`], but returns raw bytes without requiring UTF-8.
pub fn read_optional_bytes(path: &Path) -> Result<Option<Vec<u8>>, ConvertError> {
    missing_as_none(fs::read(path))
}

fn missing_as_none<T>(result: io::Result<T>) -> Result<Option<T>, ConvertError> {
    match result {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConvertError::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supercategory_strips_single_trailing_s() {
        assert_eq!(supercategory_for("strawberries"), "strawberrie");
        assert_eq!(supercategory_for("grass"), "gras");
        assert_eq!(supercategory_for("apple"), "apple");
        assert_eq!(supercategory_for(""), "");
    }

    #[test]
    fn test_paths() {
        let root = Path::new("/data/strawberries");
        assert_eq!(
            split_file_path(root, Split::Val),
            PathBuf::from("/data/strawberries/sets/val.txt")
        );
        assert_eq!(
            output_file_name(CATEGORY_NAME, Split::Test),
            "strawberries_instances_test.json"
        );
    }

    #[test]
    fn test_read_optional_missing_is_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("nope.txt");
        assert!(read_optional(&missing).expect("no error").is_none());

        let present = temp.path().join("yes.txt");
        fs::write(&present, "hello").expect("write");
        assert_eq!(
            read_optional(&present).expect("no error").as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn test_read_optional_bytes_accepts_non_utf8() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("latin1.csv");
        fs::write(&path, b"caf\xE9").expect("write");

        assert!(read_optional(&path).is_err());
        assert_eq!(
            read_optional_bytes(&path).expect("no error").as_deref(),
            Some(&b"caf\xE9"[..])
        );
        assert!(read_optional_bytes(&temp.path().join("nope.csv"))
            .expect("no error")
            .is_none());
    }

    #[test]
    fn test_read_optional_directory_is_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(read_optional(temp.path()).is_err());
    }
}
