//! COCO record types and their JSON serialization.
//!
//! Unlike a general-purpose converter, there is no format-agnostic
//! intermediate layer here: the only output format is COCO, so the model
//! types *are* the COCO schema and serialize directly.
//!
//! # Example
//!
//! ```
//! use strawberry2coco::ir::{Annotation, BBoxXYWH, Category, CocoDocument, Image};
//!
//! let doc = CocoDocument {
//!     images: vec![Image::new(1u64, "strawberries/healthy/images/a.jpg", 640, 480)],
//!     categories: vec![Category::new(1i64, "ripe", "strawberrie")],
//!     annotations: vec![Annotation::new(
//!         1u64, 1u64, 1i64,
//!         BBoxXYWH::new(10.0, 20.0, 90.0, 180.0),
//!     )],
//!     ..Default::default()
//! };
//! assert_eq!(doc.annotations[0].area, 16200.0);
//! ```

mod bbox;
mod ids;
pub mod io_coco_json;
mod model;

// Re-export core types for convenient access
pub use bbox::BBoxXYWH;
pub use ids::{AnnotationId, CategoryId, IdSequence, ImageId};
pub use model::{
    Annotation, Category, CocoDocument, DatasetInfo, Image, License, COCO_DOCUMENT_VERSION,
};
