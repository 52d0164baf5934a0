//! Stream Projector: where the poured liquid lands
//!
//! Two named strategies, picked once per session:
//!
//! - `VerticalDrop`: from the tube mouth (bottom-centre of the body) straight
//!   down by 120px. The tilt angle is ignored.
//! - `Angled`: the mouth offset `(-width/2, 0)` is rotated by the tilt about
//!   the top-centre of the tube, then the stream falls 130px and drifts 45px
//!   left.
//!
//! Both are pure. The terminus returned here is the one that is drawn and
//! the one that is tested against the paper.

use serde::{Deserialize, Serialize};

use crate::types::{Point, TrajectoryStrategy, TubeGeometry};
use crate::{ANGLED_STREAM_DROP, ANGLED_STREAM_LATERAL, STREAM_FALL_DISTANCE};

/// A stream from the tube mouth to its landing point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSegment {
    pub start: Point,
    pub terminus: Point,
}

/// Computes stream trajectories for one strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamProjector {
    strategy: TrajectoryStrategy,
}

impl StreamProjector {
    pub fn new(strategy: TrajectoryStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> TrajectoryStrategy {
        self.strategy
    }

    /// Landing point of the stream
    pub fn project(&self, anchor: Point, geometry: &TubeGeometry, angle: f64) -> Point {
        self.segment(anchor, geometry, angle).terminus
    }

    /// Full stream, mouth to landing point
    pub fn segment(&self, anchor: Point, geometry: &TubeGeometry, angle: f64) -> StreamSegment {
        match self.strategy {
            TrajectoryStrategy::VerticalDrop => vertical_drop(anchor, geometry),
            TrajectoryStrategy::Angled => angled(anchor, geometry, angle),
        }
    }
}

fn vertical_drop(anchor: Point, geometry: &TubeGeometry) -> StreamSegment {
    let start = geometry.mouth(anchor);
    StreamSegment {
        start,
        terminus: start.offset(0, STREAM_FALL_DISTANCE),
    }
}

fn angled(anchor: Point, geometry: &TubeGeometry, angle: f64) -> StreamSegment {
    let half = (geometry.width() / 2) as i32;
    let pivot = geometry.top_left(anchor).offset(half, 0);
    let mouth_offset = -(half as f64);
    let rad = angle.to_radians();

    // Truncate toward zero after adding, like an int() cast on the sum
    let start = Point::new(
        (pivot.x as f64 + mouth_offset * rad.cos()) as i32,
        (pivot.y as f64 + mouth_offset * rad.sin()) as i32,
    );

    StreamSegment {
        start,
        terminus: start.offset(ANGLED_STREAM_LATERAL, ANGLED_STREAM_DROP),
    }
}

// =============================================================================
// TESTS
// =============================================================================
