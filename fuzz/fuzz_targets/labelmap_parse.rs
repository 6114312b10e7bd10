//! Fuzz target for label map JSON parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strawberry2coco::dataset::labelmap::{parse_label_map, BACKGROUND_LABEL};

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(map) = parse_label_map(text) {
        assert!(map.values().all(|name| name != BACKGROUND_LABEL));
    }
});
