//! Pour Controller: hand tilt → pouring decision
//!
//! - No hand → angle 0, not pouring
//! - Hand → pouring iff angle > threshold (34° by default, exclusive)
//!
//! With the default zero release band every frame is decided from that
//! frame's sample alone. A positive band keeps an already-pouring tube
//! pouring until the tilt drops to `threshold - band`.

use tracing::warn;

use crate::types::{PoseSample, PourState};
use crate::POUR_THRESHOLD_DEG;

/// Pour controller state
#[derive(Debug, Clone)]
pub struct PourController {
    threshold_deg: f64,
    release_band_deg: f64,
    /// Previous frame's decision, read only when the band is positive
    pouring: bool,
}

impl Default for PourController {
    fn default() -> Self {
        Self::new()
    }
}

impl PourController {
    /// Controller with the 34° threshold and no release band
    pub fn new() -> Self {
        Self::with_threshold(POUR_THRESHOLD_DEG, 0.0)
    }

    /// Custom threshold and release band, both in degrees
    pub fn with_threshold(threshold_deg: f64, release_band_deg: f64) -> Self {
        Self {
            threshold_deg,
            release_band_deg: release_band_deg.max(0.0),
            pouring: false,
        }
    }

    /// Decide this frame's pour state
    pub fn update(&mut self, pose: Option<&PoseSample>) -> PourState {
        let state = match pose {
            None => PourState::idle(),
            Some(pose) => {
                if pose.angle_out_of_range() {
                    warn!(raw = pose.angle, "tilt outside 0-90 from pose source, clamping");
                }
                let angle = pose.clamped_angle();
                PourState {
                    current_angle: angle,
                    is_pouring: angle > self.cutoff(),
                }
            }
        };
        self.pouring = state.is_pouring;
        state
    }

    /// Angle that must be exceeded this frame
    fn cutoff(&self) -> f64 {
        if self.pouring && self.release_band_deg > 0.0 {
            self.threshold_deg - self.release_band_deg
        } else {
            self.threshold_deg
        }
    }

    pub fn threshold_deg(&self) -> f64 {
        self.threshold_deg
    }

    pub fn release_band_deg(&self) -> f64 {
        self.release_band_deg
    }

    /// Was the last frame pouring?
    pub fn is_pouring(&self) -> bool {
        self.pouring
    }
}

// =============================================================================
// TESTS
// =============================================================================
