//! COCO dataset rescaler
//!
//! This library rescales COCO-style object-detection datasets (images,
//! bounding boxes, polygon segmentations, areas) from their original
//! coordinate space to a fixed target resolution prior to model training.

pub mod coco;
pub mod config;
pub mod dataset;
pub mod image;
pub mod io;
pub mod rescale;

// Re-export commonly used types and functions
pub use coco::{AnnotationDocument, AnnotationRecord, ImageRecord};
pub use config::{Args, RescaleConfig};
pub use dataset::{process_document, process_image, rescale_document, run};
pub use rescale::{scale_area, scale_bbox, scale_segmentation, GeometryRescaler};
