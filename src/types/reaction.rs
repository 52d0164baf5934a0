//! Reaction latch state, variants and colors

use std::str::FromStr;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// The two states of the litmus reaction. `Triggered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionState {
    /// Paper still shows its initial color
    #[default]
    Untriggered,
    /// Liquid reached the paper, color flipped for good
    Triggered,
}

impl ReactionState {
    pub fn is_triggered(&self) -> bool {
        *self == ReactionState::Triggered
    }

    /// State name painted for terminal display
    pub fn painted(&self) -> colored::ColoredString {
        match self {
            ReactionState::Untriggered => self.to_string().bright_black(),
            ReactionState::Triggered => self.to_string().green().bold(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionState::Untriggered => "🧪",
            ReactionState::Triggered => "✅",
        }
    }
}

impl std::fmt::Display for ReactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReactionState::Untriggered => "UNTRIGGERED",
            ReactionState::Triggered => "TRIGGERED",
        };
        write!(f, "{}", name)
    }
}

/// Which liquid is poured on which paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionVariant {
    /// Basic liquid on red litmus: red → blue
    #[default]
    #[serde(alias = "red_litmus")]
    Base,
    /// Acidic liquid on blue litmus: blue → red
    #[serde(alias = "blue_litmus")]
    Acid,
}

impl ReactionVariant {
    pub const ALL: [ReactionVariant; 2] = [ReactionVariant::Base, ReactionVariant::Acid];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Acid => "acid",
        }
    }

    /// Caption drawn above the paper
    pub fn paper_label(&self) -> &'static str {
        match self {
            Self::Base => "Red Litmus",
            Self::Acid => "Blue Litmus",
        }
    }
}

impl std::fmt::Display for ReactionVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReactionVariant {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "base" | "red_litmus" => Ok(Self::Base),
            "acid" | "blue_litmus" => Ok(Self::Acid),
            _ => Err(LabError::UnknownVariant(s.to_string())),
        }
    }
}

/// 8-bit RGB color, opaque to the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel order expected by BGR frame buffers
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color triple for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionColors {
    pub liquid: Rgb,
    pub initial_paper: Rgb,
    pub triggered_paper: Rgb,
}

impl ReactionColors {
    /// Paper color for the given latch state
    pub fn paper_for(&self, state: ReactionState) -> Rgb {
        match state {
            ReactionState::Untriggered => self.initial_paper,
            ReactionState::Triggered => self.triggered_paper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_order_is_monotone_direction() {
        assert!(ReactionState::Untriggered < ReactionState::Triggered);
        assert!(!ReactionState::default().is_triggered());
    }

    #[test]
    fn test_variant_names_parse() {
        assert_eq!("base".parse::<ReactionVariant>().unwrap(), ReactionVariant::Base);
        assert_eq!("RED_LITMUS".parse::<ReactionVariant>().unwrap(), ReactionVariant::Base);
        assert_eq!("blue-litmus".parse::<ReactionVariant>().unwrap(), ReactionVariant::Acid);
        assert!(matches!(
            "neutral".parse::<ReactionVariant>(),
            Err(LabError::UnknownVariant(v)) if v == "neutral"
        ));
    }

    #[test]
    fn test_variant_serde() {
        let v: ReactionVariant = serde_json::from_str("\"red_litmus\"").unwrap();
        assert_eq!(v, ReactionVariant::Base);
        assert!(serde_json::from_str::<ReactionVariant>("\"salt\"").is_err());
        assert_eq!(serde_json::to_string(&ReactionVariant::Acid).unwrap(), "\"acid\"");
    }

    #[test]
    fn test_rgb_formats() {
        let c = Rgb::new(40, 80, 220);
        assert_eq!(c.to_bgr(), [220, 80, 40]);
        assert_eq!(c.to_hex(), "#2850dc");
    }

    #[test]
    fn test_state_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&ReactionState::Triggered).unwrap(),
            "\"TRIGGERED\""
        );
    }
}
