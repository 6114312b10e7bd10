//! Label map loader (`labelmap.json`).
//!
//! The file is a JSON array of `{"label_id": int, "object_name": str}`
//! objects. Any other keys on an entry are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::read_optional;
use crate::error::ConvertError;
use crate::ir::CategoryId;

/// Object name reserved for the background class; never becomes a category.
pub const BACKGROUND_LABEL: &str = "background";

/// A single label map entry as it appears on disk.
#[derive(Debug, Deserialize)]
struct LabelMapEntry {
    label_id: i64,
    object_name: String,
}

/// Label id to object name, ordered by id, with the background entry removed.
pub type LabelMap = BTreeMap<CategoryId, String>;

/// Loads a label map from disk.
///
/// A missing file yields an empty map.
///
/// # Errors
/// Returns [`ConvertError::LabelMapParse`] if the file exists but is not a
/// JSON array of entries with both required fields.
pub fn load_label_map(path: &Path) -> Result<LabelMap, ConvertError> {
    let Some(content) = read_optional(path)? else {
        return Ok(LabelMap::new());
    };

    parse_label_map(&content).map_err(|source| ConvertError::LabelMapParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses label map JSON.
///
/// When two entries share a `label_id`, the later one wins.
pub fn parse_label_map(json: &str) -> Result<LabelMap, serde_json::Error> {
    let entries: Vec<LabelMapEntry> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.object_name != BACKGROUND_LABEL)
        .map(|entry| (CategoryId::new(entry.label_id), entry.object_name))
        .collect())
}
