//! COCO document model.
//!
//! These types mirror the COCO object-detection JSON one-to-one; field
//! declaration order is the key order in the written file.

use serde::{Deserialize, Serialize};

use super::bbox::BBoxXYWH;
use super::ids::{AnnotationId, CategoryId, ImageId};

/// Version string written into every document's `info` block.
pub const COCO_DOCUMENT_VERSION: &str = "1.0.0";

/// A complete COCO document for one split.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoDocument {
    pub info: DatasetInfo,

    pub images: Vec<Image>,

    pub annotations: Vec<Annotation>,

    pub categories: Vec<Category>,

    /// Always written empty; the source dataset carries no licensing data.
    #[serde(default)]
    pub licenses: Vec<License>,
}

/// The COCO `info` block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub year: u32,
    pub version: String,
    pub description: String,
    pub url: String,
}

/// A COCO license entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An image record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,

    /// Path relative to the dataset root,
    /// `<category>/<subcategory>/images/<filename>`.
    pub file_name: String,

    pub width: u32,

    pub height: u32,
}

impl Image {
    pub fn new(
        id: impl Into<ImageId>,
        file_name: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            width,
            height,
        }
    }
}

/// A COCO category (class label).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    pub supercategory: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        supercategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supercategory: supercategory.into(),
        }
    }
}

/// An annotation (bounding box with label).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,

    /// Id of the image this box was drawn on.
    pub image_id: ImageId,

    pub category_id: CategoryId,

    pub bbox: BBoxXYWH,

    /// `bbox.width * bbox.height`.
    pub area: f64,

    /// Always 0: every box is an individual object.
    pub iscrowd: u8,
}

impl Annotation {
    /// Creates an annotation, deriving `area` from the box.
    pub fn new(
        id: impl Into<AnnotationId>,
        image_id: impl Into<ImageId>,
        category_id: impl Into<CategoryId>,
        bbox: BBoxXYWH,
    ) -> Self {
        Self {
            id: id.into(),
            image_id: image_id.into(),
            category_id: category_id.into(),
            area: bbox.area(),
            bbox,
            iscrowd: 0,
        }
    }
}
