//! Color Policy: variant → (liquid, initial paper, triggered paper)
//!
//! The paper always ends up the color of what was poured on it.

use crate::types::{ReactionColors, ReactionVariant, Rgb};

pub const LITMUS_BLUE: Rgb = Rgb::new(40, 80, 220);
pub const LITMUS_RED: Rgb = Rgb::new(220, 40, 40);

const BASE_COLORS: ReactionColors = ReactionColors {
    liquid: LITMUS_BLUE,
    initial_paper: LITMUS_RED,
    triggered_paper: LITMUS_BLUE,
};

const ACID_COLORS: ReactionColors = ReactionColors {
    liquid: LITMUS_RED,
    initial_paper: LITMUS_BLUE,
    triggered_paper: LITMUS_RED,
};

/// Fixed per-variant colors, no state
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorPolicy;

impl ColorPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn colors_for(&self, variant: ReactionVariant) -> ReactionColors {
        match variant {
            ReactionVariant::Base => BASE_COLORS,
            ReactionVariant::Acid => ACID_COLORS,
        }
    }
}
