//! Fuzz target for per-image box CSV parsing.
//!
//! Malformed rows must be dropped, never panic, and every kept box must have
//! a positive, finite size.
//!
//! Run with:
//!   cargo +nightly fuzz run box_csv_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use strawberry2coco::dataset::boxes::parse_csv_boxes_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    if let Ok(parsed) = parse_csv_boxes_slice(data) {
        for parsed_box in &parsed.boxes {
            assert!(parsed_box.bbox.is_finite());
            assert!(parsed_box.bbox.has_positive_size());
        }
    }
});
