//! Collision Detector: does the stream land on the paper?

use crate::types::{Point, TargetRegion};

/// Inclusive point-in-rectangle test. All four edges count as a hit.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionDetector;

impl CollisionDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn test(&self, terminus: Point, region: &TargetRegion) -> bool {
        let (x, y) = (terminus.x as i64, terminus.y as i64);
        (region.x() as i64..=region.right()).contains(&x)
            && (region.y() as i64..=region.bottom()).contains(&y)
    }
}
