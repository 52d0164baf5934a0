//! vlab: gesture-driven virtual litmus lab
//!
//! A tilted hand pours a simulated test tube. When the liquid stream lands on
//! the litmus paper the paper flips color, once and for good.
//!
//! Pipeline per frame: pose → pour controller → stream projector →
//! collision → reaction latch → color table → render plan.

pub mod core;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::{LabError, Result};

// =============================================================================
// POURING
// =============================================================================

/// Tilt (degrees) above which the tube pours. Exactly this angle is idle.
pub const POUR_THRESHOLD_DEG: f64 = 34.0;

/// Lowest tilt the pose source is expected to report
pub const MIN_TILT_DEG: f64 = 0.0;

/// Highest tilt the pose source is expected to report
pub const MAX_TILT_DEG: f64 = 90.0;

// =============================================================================
// STREAM TRAJECTORIES
// =============================================================================

/// Vertical-drop fall distance below the tube mouth (pixels)
pub const STREAM_FALL_DISTANCE: i32 = 120;

/// Angled trajectory: sideways displacement of the stream end
pub const ANGLED_STREAM_LATERAL: i32 = -45;

/// Angled trajectory: downward displacement of the stream end
pub const ANGLED_STREAM_DROP: i32 = 130;

// =============================================================================
// SCENE DEFAULTS
// =============================================================================

pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

pub const DEFAULT_TUBE_WIDTH: u32 = 50;
pub const DEFAULT_TUBE_HEIGHT: u32 = 180;

/// Fraction of the tube filled with liquid
pub const LIQUID_LEVEL: f64 = 0.7;

/// Litmus paper hit box, bottom-left of the frame
pub const PAPER_X: i32 = 20;
pub const PAPER_Y: i32 = 350;
pub const PAPER_WIDTH: u32 = 80;
pub const PAPER_HEIGHT: u32 = 100;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
