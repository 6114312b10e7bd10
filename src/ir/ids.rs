//! Newtype IDs for COCO records.
//!
//! Image, annotation and category ids are all plain integers in the COCO
//! document, so newtypes keep an image id from being passed where an
//! annotation id is expected. Image and annotation ids are generated and
//! therefore unsigned; category ids come from user data and may be negative.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident($inner:ty), $getter:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new id.
            #[inline]
            pub fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Returns the underlying integer value.
            #[inline]
            pub fn $getter(&self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self::new(id)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of an image record, assigned sequentially from 1 per split.
    ImageId(u64),
    as_u64
);

define_id!(
    /// Identifier of an annotation record, assigned sequentially from 1 per split.
    AnnotationId(u64),
    as_u64
);

define_id!(
    /// Identifier of a COCO category; taken verbatim from the label map's `label_id`.
    CategoryId(i64),
    as_i64
);

/// Hands out contiguous ids starting at 1.
///
/// The counter only advances when [`IdSequence::next_id`] is called, so ids
/// are consumed exactly once per emitted record.
#[derive(Debug)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id<T: From<u64>>(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        assert_eq!(ImageId(1), ImageId(1));
        assert_ne!(ImageId(1), ImageId(2));
    }

    #[test]
    fn test_id_debug_names_the_kind() {
        assert_eq!(format!("{:?}", AnnotationId(7)), "AnnotationId(7)");
        assert_eq!(CategoryId(3).to_string(), "3");
        assert_eq!(format!("{:?}", CategoryId(-1)), "CategoryId(-1)");
    }

    #[test]
    fn test_category_id_keeps_sign_through_json() {
        let id: CategoryId = serde_json::from_str("-4").expect("parse");
        assert_eq!(id.as_i64(), -4);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "-4");
    }

    #[test]
    fn test_sequence_starts_at_one_and_is_contiguous() {
        let mut seq = IdSequence::new();
        let a: ImageId = seq.next_id();
        let b: ImageId = seq.next_id();
        let c: ImageId = seq.next_id();
        assert_eq!((a, b, c), (ImageId(1), ImageId(2), ImageId(3)));
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut images = IdSequence::new();
        let mut annotations = IdSequence::new();
        let _: ImageId = images.next_id();
        let _: ImageId = images.next_id();
        let first: AnnotationId = annotations.next_id();
        assert_eq!(first, AnnotationId(1));
    }
}
