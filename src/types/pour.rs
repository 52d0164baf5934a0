//! Pouring state and trajectory strategy

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Result of the pour controller for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PourState {
    /// Angle retained for this frame (0 when no hand)
    pub current_angle: f64,
    /// Is liquid leaving the tube?
    pub is_pouring: bool,
}

impl PourState {
    /// No hand, no pour
    pub const fn idle() -> Self {
        Self {
            current_angle: 0.0,
            is_pouring: false,
        }
    }
}

impl Default for PourState {
    fn default() -> Self {
        Self::idle()
    }
}

/// How the stream's landing point is derived from the tube pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryStrategy {
    /// Straight down from the tube mouth, angle ignored
    #[default]
    #[serde(alias = "vertical")]
    VerticalDrop,
    /// Mouth rotated about the tube top, then a fixed fall offset
    #[serde(alias = "angled_trajectory")]
    Angled,
}

impl TrajectoryStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VerticalDrop => "vertical_drop",
            Self::Angled => "angled",
        }
    }
}

impl std::fmt::Display for TrajectoryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TrajectoryStrategy {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "vertical_drop" | "vertical" => Ok(Self::VerticalDrop),
            "angled" | "angled_trajectory" => Ok(Self::Angled),
            _ => Err(LabError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let idle = PourState::idle();
        assert_eq!(idle.current_angle, 0.0);
        assert!(!idle.is_pouring);
        assert_eq!(PourState::default(), idle);
    }

    #[test]
    fn test_strategy_names_parse() {
        assert_eq!("vertical".parse::<TrajectoryStrategy>().unwrap(), TrajectoryStrategy::VerticalDrop);
        assert_eq!("Vertical-Drop".parse::<TrajectoryStrategy>().unwrap(), TrajectoryStrategy::VerticalDrop);
        assert_eq!("angled".parse::<TrajectoryStrategy>().unwrap(), TrajectoryStrategy::Angled);
        assert!(matches!(
            "bezier".parse::<TrajectoryStrategy>(),
            Err(LabError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_strategy_serde_aliases() {
        let s: TrajectoryStrategy = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(s, TrajectoryStrategy::VerticalDrop);
        assert_eq!(serde_json::to_string(&TrajectoryStrategy::Angled).unwrap(), "\"angled\"");
    }
}
