//! COCO JSON reader and writer.
//!
//! COCO bounding boxes use `[x, y, width, height]` where `(x, y)` is the
//! top-left corner in absolute pixel coordinates.
//!
//! # Deterministic Output
//!
//! The writer emits records in the order they appear in the document and
//! always uses the same pretty-printer (2-space indentation, no trailing
//! newline), so identical documents produce byte-identical files.
//! Non-ASCII characters are written as UTF-8, not escaped.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::model::CocoDocument;
use crate::error::ConvertError;

/// Reads a COCO document from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use strawberry2coco::ir::io_coco_json::read_coco_json;
///
/// let doc = read_coco_json(Path::new("annotations/strawberries_instances_train.json"))?;
/// # Ok::<(), strawberry2coco::ConvertError>(())
/// ```
pub fn read_coco_json(path: &Path) -> Result<CocoDocument, ConvertError> {
    let file = File::open(path).map_err(ConvertError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| ConvertError::CocoJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a COCO document to a JSON file, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_coco_json(path: &Path, doc: &CocoDocument) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(ConvertError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, doc).map_err(|source| {
        ConvertError::CocoJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    writer.flush().map_err(ConvertError::Io)
}

/// Reads a COCO document from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_coco_str(json: &str) -> Result<CocoDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a COCO document to a pretty-printed JSON string.
///
/// Produces exactly the bytes [`write_coco_json`] puts on disk.
pub fn to_coco_string(doc: &CocoDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}
