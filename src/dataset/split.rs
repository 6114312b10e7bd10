//! Split list reader (`sets/<split>.txt`).

use std::collections::BTreeSet;
use std::path::Path;

use super::read_optional;
use crate::error::ConvertError;

/// Reads the image base names listed in a split file.
///
/// Blank lines are ignored and surrounding whitespace is trimmed. A missing
/// file yields an empty set.
pub fn read_split_list(path: &Path) -> Result<BTreeSet<String>, ConvertError> {
    Ok(read_optional(path)?
        .map(|content| parse_split_list(&content))
        .unwrap_or_default())
}

/// Parses split file content into a set of base names.
pub fn parse_split_list(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
