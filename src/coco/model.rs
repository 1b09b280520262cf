//! Typed COCO schema with verbatim passthrough of untouched fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A COCO-format object detection dataset.
///
/// `images` and `annotations` are typed because the resize pipeline rewrites
/// them in place. `info`, `licenses` and `categories` are opaque passthrough:
/// the pipeline never reshapes them, so they survive byte-for-byte (modulo
/// JSON re-serialization). Record order is preserved on write — downstream
/// consumers may rely on ordinal indexing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CocoDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Value>,

    pub images: Vec<CocoImage>,

    pub annotations: Vec<CocoAnnotation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Value>,

    /// Any other top-level fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A COCO image entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: u64,

    pub width: u32,

    pub height: u32,

    /// Path of the image file, relative to the dataset image root.
    pub file_name: String,

    /// Unmodeled fields (`license`, `date_captured`, ...), preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CocoImage {
    /// Creates a new image entry with the given properties.
    pub fn new(id: u64, file_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            file_name: file_name.into(),
            extra: Map::new(),
        }
    }
}

/// A COCO annotation entry.
///
/// The bbox uses COCO's `[x, y, width, height]` convention with `(x, y)` the
/// top-left corner in absolute pixels. Geometry math works in corner-corner
/// coordinates; see [`crate::geometry::BBox`] for the conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub id: u64,

    pub image_id: u64,

    pub category_id: u64,

    pub bbox: [f64; 4],

    /// Unmodeled fields (`area`, `iscrowd`, `segmentation`, ...), preserved
    /// as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CocoAnnotation {
    /// Creates a new annotation entry with an `[x, y, w, h]` bbox.
    pub fn new(id: u64, image_id: u64, category_id: u64, bbox: [f64; 4]) -> Self {
        Self {
            id,
            image_id,
            category_id,
            bbox,
            extra: Map::new(),
        }
    }
}
