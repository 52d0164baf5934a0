//! Session configuration
//!
//! Layers, later wins: built-in defaults → JSON file → CLI overrides.
//! Everything is checked here so the per-frame path cannot fail.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};
use crate::types::{Point, ReactionVariant, TargetRegion, TrajectoryStrategy, TubeGeometry};
use crate::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, MAX_TILT_DEG, MIN_TILT_DEG, POUR_THRESHOLD_DEG};

/// Immutable per-session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Frame size, used to park the tube at the centre when no hand is seen
    pub frame_width: u32,
    pub frame_height: u32,
    pub tube: TubeGeometry,
    pub paper: TargetRegion,
    pub strategy: TrajectoryStrategy,
    pub variant: ReactionVariant,
    pub pour_threshold_deg: f64,
    /// 0 disables debouncing
    pub release_band_deg: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            tube: TubeGeometry::default(),
            paper: TargetRegion::default(),
            strategy: TrajectoryStrategy::default(),
            variant: ReactionVariant::default(),
            pour_threshold_deg: POUR_THRESHOLD_DEG,
            release_band_deg: 0.0,
        }
    }
}

impl LabConfig {
    /// Defaults with a given variant
    pub fn for_variant(variant: ReactionVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: TrajectoryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_variant(mut self, variant: ReactionVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_tube(mut self, tube: TubeGeometry) -> Self {
        self.tube = tube;
        self
    }

    pub fn with_paper(mut self, paper: TargetRegion) -> Self {
        self.paper = paper;
        self
    }

    /// Parse and validate a JSON document. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: LabConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading lab config");
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(error::config(&format!(
                "frame must have positive size, got {}x{}",
                self.frame_width, self.frame_height
            )));
        }
        if !(MIN_TILT_DEG..=MAX_TILT_DEG).contains(&self.pour_threshold_deg) {
            return Err(error::config(&format!(
                "pour threshold {} outside 0-90",
                self.pour_threshold_deg
            )));
        }
        if !(0.0..=self.pour_threshold_deg).contains(&self.release_band_deg) {
            return Err(error::config(&format!(
                "release band {} outside 0-{}",
                self.release_band_deg, self.pour_threshold_deg
            )));
        }
        Ok(())
    }

    /// Centre of the frame, where the tube waits for a hand
    pub fn frame_center(&self) -> Point {
        Point::new((self.frame_width / 2) as i32, (self.frame_height / 2) as i32)
    }
}
