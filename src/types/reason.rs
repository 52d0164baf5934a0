//! Reason codes explaining each frame's outcome

use serde::{Deserialize, Serialize};

/// Why a frame ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    /// No hand in frame, tube parked at frame centre
    R001_NO_HAND,
    /// Hand present but tilt at or below the pour threshold
    R002_TILT_IDLE,
    /// Pouring, stream landed outside the paper
    R003_POUR_MISS,
    /// Stream hit the paper this frame, reaction fired
    R004_REACTION_TRIGGERED,
    /// Reaction already happened, collision skipped
    R005_REACTION_LATCHED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_NO_HAND => "R001_NO_HAND",
            Self::R002_TILT_IDLE => "R002_TILT_IDLE",
            Self::R003_POUR_MISS => "R003_POUR_MISS",
            Self::R004_REACTION_TRIGGERED => "R004_REACTION_TRIGGERED",
            Self::R005_REACTION_LATCHED => "R005_REACTION_LATCHED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_NO_HAND => "No hand detected",
            Self::R002_TILT_IDLE => "Tube upright",
            Self::R003_POUR_MISS => "Pouring, missed the paper",
            Self::R004_REACTION_TRIGGERED => "Liquid hit the paper",
            Self::R005_REACTION_LATCHED => "Reaction complete",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
