//! Per-frame report for terminals, logs and websocket clients

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Point, ReactionState, ReactionVariant, ReasonCode};

/// Outcome of one `step`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub timestamp: DateTime<Utc>,
    /// Zero-based frame index within the session
    pub frame: u64,
    pub variant: ReactionVariant,
    pub hand_present: bool,
    /// Angle used for the pour decision (after clamping)
    pub angle: f64,
    /// The detector sent an angle outside 0–90
    pub angle_clamped: bool,
    pub pouring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminus: Option<Point>,
    /// Stream touched the paper this frame
    pub hit: bool,
    pub reaction: ReactionState,
    /// Frame at which the reaction fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<u64>,
    pub reason: ReasonCode,
}

impl FrameReport {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let pour = if self.pouring {
            "POURING".cyan().bold()
        } else {
            "idle".normal()
        };
        format!(
            "{} #{:<5} angle={:>5.1} | {} | {} | {}",
            self.reaction.emoji(),
            self.frame,
            self.angle,
            pour,
            self.reaction.painted(),
            self.reason.code().dimmed()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let terminus = self
            .terminus
            .map(|t| format!("{},{}", t.x, t.y))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "frame={} | angle={:.1} | pouring={} | terminus={} | hit={} | reaction={} | reason={}",
            self.frame,
            self.angle,
            self.pouring,
            terminus,
            self.hit,
            self.reaction,
            self.reason.code()
        )
    }
}
