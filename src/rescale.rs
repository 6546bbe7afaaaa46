//! Geometric rescaling of COCO annotation records.
//!
//! Everything here is pure: a rate derived from `target_size / source_size`
//! is applied multiplicatively to bbox and polygon coordinates, and the
//! results are rounded onto the integer grid of the target image.

use crate::coco::{AnnotationRecord, ImageRecord};
use crate::config::RescaleConfig;

/// Scale an area by `rate`, truncating toward zero as an integer cast would.
pub fn scale_area(area: f64, rate: f64) -> f64 {
    (area * rate).trunc()
}

/// Scale a `[x, y, width, height]` bbox. Even indices take `rate_x`, odd
/// indices `rate_y`; every component is rounded to the nearest integer with
/// ties going to even.
pub fn scale_bbox(bbox: &[f64; 4], rate_x: f64, rate_y: f64) -> [f64; 4] {
    [
        (bbox[0] * rate_x).round_ties_even(),
        (bbox[1] * rate_y).round_ties_even(),
        (bbox[2] * rate_x).round_ties_even(),
        (bbox[3] * rate_y).round_ties_even(),
    ]
}

/// Scale every polygon of a segmentation. Polygons are flat
/// `[x1, y1, x2, y2, ...]` sequences, so even-indexed values are x
/// coordinates and take `rate_x`, odd-indexed values take `rate_y`.
/// Polygon order and per-polygon point counts are preserved.
pub fn scale_segmentation(polygons: &[Vec<f64>], rate_x: f64, rate_y: f64) -> Vec<Vec<f64>> {
    polygons
        .iter()
        .map(|polygon| {
            polygon
                .iter()
                .enumerate()
                .map(|(i, &coord)| {
                    let rate = if i % 2 == 0 { rate_x } else { rate_y };
                    (coord * rate).round_ties_even()
                })
                .collect()
        })
        .collect()
}

/// Applies a uniform rescale to whole records.
#[derive(Debug, Clone, Copy)]
pub struct GeometryRescaler {
    target_size: u32,
    rate: f64,
}

impl GeometryRescaler {
    pub fn new(config: RescaleConfig) -> Self {
        Self {
            target_size: config.target_size,
            rate: config.rate(),
        }
    }

    /// The multiplicative factor applied to coordinates and area.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Copy an image record with its dimensions pinned to the target size,
    /// regardless of the recorded source dimensions.
    pub fn rescale_image(&self, image: &ImageRecord) -> ImageRecord {
        let mut rescaled = image.clone();
        rescaled.width = self.target_size;
        rescaled.height = self.target_size;
        rescaled
    }

    /// Copy an annotation record with bbox, segmentation and area rescaled.
    /// The same rate is applied to both axes.
    pub fn rescale_annotation(&self, annotation: &AnnotationRecord) -> AnnotationRecord {
        let mut rescaled = annotation.clone();
        rescaled.bbox = scale_bbox(&annotation.bbox, self.rate, self.rate);
        rescaled.segmentation = scale_segmentation(&annotation.segmentation, self.rate, self.rate);
        rescaled.area = scale_area(annotation.area, self.rate);
        rescaled
    }
}
