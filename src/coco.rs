//! COCO format data structures
//!
//! Typed document model for COCO-style annotation files. Geometry-bearing
//! fields are required at load time; everything else rides along untouched
//! in flattened passthrough maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One annotation file: the image and annotation records that take part in
/// rescaling, with the remaining top-level blocks carried through opaquely.
///
/// Field order fixes the key order of the serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub images: Vec<ImageRecord>,
    pub categories: Value,
    pub annotations: Vec<AnnotationRecord>,
    pub info: Value,
    pub metainfo: Value,
}

/// COCO image entry. `width` and `height` are rewritten on rescale; all
/// other fields (id, file_name, ...) pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// COCO object annotation. Only `bbox`, `segmentation` and `area` take part
/// in rescaling; id, image_id, category_id, iscrowd and anything else pass
/// through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// [x, y, width, height]
    pub bbox: [f64; 4],
    /// One or more polygons, each a flat [x1, y1, x2, y2, ...] sequence
    pub segmentation: Vec<Vec<f64>>,
    pub area: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
