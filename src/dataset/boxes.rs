//! Per-image bounding box CSV reader (`csv/<stem>.csv`).
//!
//! # Format
//!
//! A header row naming at least `x`, `y`, `width`, `height` and `label`;
//! column order is free and unknown columns are ignored. Coordinates are
//! absolute pixels with a top-left origin.
//!
//! # Row Policy
//!
//! The reader is deliberately forgiving. A row is dropped, never fatal, when:
//! - any present numeric cell fails to parse (or is NaN/infinite)
//! - the row is too short to contain a present column
//! - the row is not valid UTF-8
//! - `width <= 0` or `height <= 0`
//!
//! An absent `label` column defaults every row to label 1; an absent
//! coordinate column defaults to 0 (which drops the row for `width`/`height`).
//! Labels are signed integers and are passed through unchanged.
//!
//! Files are read as bytes. Header names are matched byte-wise, so a
//! non-UTF-8 header on an unrelated column does not affect the file.

use std::path::Path;
use std::str::FromStr;

use csv::{ByteRecord, StringRecord};

use super::read_optional_bytes;
use crate::error::ConvertError;
use crate::ir::{BBoxXYWH, CategoryId};

/// Label applied when the CSV has no `label` column.
pub const DEFAULT_LABEL: i64 = 1;

/// One accepted box row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedBox {
    pub bbox: BBoxXYWH,
    pub category_id: CategoryId,
}

/// Accepted boxes from one CSV file plus the number of data rows dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedBoxes {
    pub boxes: Vec<ParsedBox>,
    pub rows_skipped: usize,
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    x: Option<usize>,
    y: Option<usize>,
    width: Option<usize>,
    height: Option<usize>,
    label: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &ByteRecord) -> Self {
        // Later duplicates shadow earlier ones, as with a dict-keyed row.
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name.as_bytes())
                .map(|(idx, _)| idx)
                .last()
        };
        Self {
            x: find("x"),
            y: find("y"),
            width: find("width"),
            height: find("height"),
            label: find("label"),
        }
    }
}

/// Reads the boxes for one image.
///
/// A missing file yields no boxes (an image may have no annotations).
///
/// # Errors
/// Returns an error only if the file exists but cannot be read, or the CSV
/// reader fails on the header row.
pub fn read_csv_boxes(path: &Path) -> Result<ParsedBoxes, ConvertError> {
    let Some(content) = read_optional_bytes(path)? else {
        return Ok(ParsedBoxes::default());
    };

    parse_csv_boxes_slice(&content).map_err(|source| ConvertError::CsvRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses box CSV content from a string.
pub fn parse_csv_boxes(content: &str) -> Result<ParsedBoxes, csv::Error> {
    parse_csv_boxes_slice(content.as_bytes())
}

/// Parses box CSV content from raw bytes.
///
/// Rows that are not valid UTF-8 are dropped individually.
pub fn parse_csv_boxes_slice(content: &[u8]) -> Result<ParsedBoxes, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);

    let columns = Columns::from_headers(reader.byte_headers()?);
    let mut parsed = ParsedBoxes::default();

    for (row_idx, result) in reader.records().enumerate() {
        let accepted = result
            .ok()
            .and_then(|record| parse_row(&record, &columns));

        match accepted {
            Some(parsed_box) => parsed.boxes.push(parsed_box),
            None => {
                log::debug!("dropping box row {}", row_idx + 1);
                parsed.rows_skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Option<ParsedBox> {
    let x: f64 = cell(record, columns.x, 0.0)?;
    let y: f64 = cell(record, columns.y, 0.0)?;
    let width: f64 = cell(record, columns.width, 0.0)?;
    let height: f64 = cell(record, columns.height, 0.0)?;
    let label: i64 = cell(record, columns.label, DEFAULT_LABEL)?;

    let bbox = BBoxXYWH::new(x, y, width, height);
    if !bbox.is_finite() || !bbox.has_positive_size() {
        return None;
    }

    Some(ParsedBox {
        bbox,
        category_id: CategoryId::new(label),
    })
}

/// Parses the cell at `column`, or returns `default` if the column is absent.
fn cell<T: FromStr>(record: &StringRecord, column: Option<usize>, default: T) -> Option<T> {
    match column {
        None => Some(default),
        Some(idx) => record.get(idx)?.trim().parse().ok(),
    }
}
