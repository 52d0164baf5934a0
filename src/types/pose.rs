//! Per-frame hand observation

use serde::{Deserialize, Serialize};

use crate::types::Point;
use crate::{MAX_TILT_DEG, MIN_TILT_DEG};

/// One frame's hand pose: tilt angle plus the wrist pixel the tube hangs on.
///
/// Produced by the external detector. A frame without a hand is
/// `Option::<PoseSample>::None`, never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    /// Hand tilt in degrees, expected within 0–90
    pub angle: f64,
    /// Wrist x in pixels
    pub x: i32,
    /// Wrist y in pixels
    pub y: i32,
}

impl PoseSample {
    pub fn new(angle: f64, x: i32, y: i32) -> Self {
        Self { angle, x, y }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Angle forced into 0–90. Non-finite input counts as a flat hand.
    pub fn clamped_angle(&self) -> f64 {
        if !self.angle.is_finite() {
            return MIN_TILT_DEG;
        }
        self.angle.clamp(MIN_TILT_DEG, MAX_TILT_DEG)
    }

    /// Did the upstream detector break the 0–90 contract?
    pub fn angle_out_of_range(&self) -> bool {
        !self.angle.is_finite() || self.angle < MIN_TILT_DEG || self.angle > MAX_TILT_DEG
    }
}
