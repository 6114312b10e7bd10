//! Bounding box type in COCO's XYWH layout.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box as `[x, y, width, height]` in pixels,
/// with `(x, y)` the top-left corner.
///
/// Serializes as a four-element JSON array, which is what COCO expects
/// under `annotations[].bbox`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBoxXYWH {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBoxXYWH {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `width * height`.
    ///
    /// Negative if exactly one dimension is negative; callers filter with
    /// [`BBoxXYWH::has_positive_size`] first.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if both dimensions are strictly positive.
    #[inline]
    pub fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns true if all four components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<[f64; 4]> for BBoxXYWH {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BBoxXYWH> for [f64; 4] {
    fn from(bbox: BBoxXYWH) -> Self {
        [bbox.x, bbox.y, bbox.width, bbox.height]
    }
}
