//! Virtual Lab Session: one call per video frame
//!
//! pose → pour → stream (only while pouring) → collision (only while
//! untriggered) → latch → colors → render plan.
//!
//! The reaction latch is the only state that matters across frames. The pour
//! controller also remembers the last decision, but only reads it when a
//! release band is configured.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::colors::ColorPolicy;
use crate::core::config::LabConfig;
use crate::core::collision::CollisionDetector;
use crate::core::pour::PourController;
use crate::core::reaction::ReactionStateMachine;
use crate::core::stream::{StreamProjector, StreamSegment};
use crate::error::Result;
use crate::types::{
    FrameReport, HudReadout, PaperDrawing, Point, PoseSample, PourState, ReactionColors,
    ReactionState, ReactionVariant, ReasonCode, Rect, RenderPlan, StreamDrawing, TextDrawing,
    TubeDrawing, TubeGeometry, CAPTION_COLOR, GLASS_COLOR, GLASS_THICKNESS, PAPER_BORDER_COLOR,
    REACTION_LABEL, REACTION_LABEL_COLOR, STREAM_SPLASH_RADIUS, STREAM_THICKNESS,
    TUBE_BOTTOM_RADIUS_Y,
};
use crate::LIQUID_LEVEL;

/// What one frame produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub plan: RenderPlan,
    pub report: FrameReport,
}

/// A single lab session: one tube, one paper, one reaction
#[derive(Debug, Clone)]
pub struct VirtualLabSession {
    config: LabConfig,
    pour: PourController,
    projector: StreamProjector,
    collision: CollisionDetector,
    colors: ColorPolicy,
    reaction: ReactionStateMachine,
    frame_count: u64,
}

impl VirtualLabSession {
    /// Build a session, rejecting invalid configuration up front
    pub fn new(config: LabConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Default scene for a variant
    pub fn for_variant(variant: ReactionVariant) -> Self {
        Self::build(LabConfig::for_variant(variant))
    }

    fn build(config: LabConfig) -> Self {
        Self {
            pour: PourController::with_threshold(config.pour_threshold_deg, config.release_band_deg),
            projector: StreamProjector::new(config.strategy),
            collision: CollisionDetector::new(),
            colors: ColorPolicy::new(),
            reaction: ReactionStateMachine::new(),
            frame_count: 0,
            config,
        }
    }

    /// Process one frame and return what to draw
    pub fn step(&mut self, pose: Option<&PoseSample>, variant: ReactionVariant) -> RenderPlan {
        self.advance_with(pose, variant).plan
    }

    /// Process one frame with the session's configured variant
    pub fn advance(&mut self, pose: Option<&PoseSample>) -> FrameOutput {
        self.advance_with(pose, self.config.variant)
    }

    /// Process one frame, returning both the plan and the report
    pub fn advance_with(&mut self, pose: Option<&PoseSample>, variant: ReactionVariant) -> FrameOutput {
        let frame = self.frame_count;
        self.frame_count += 1;

        let pour = self.pour.update(pose);
        let anchor = pose
            .map(PoseSample::anchor)
            .unwrap_or_else(|| self.config.frame_center());

        let segment = pour
            .is_pouring
            .then(|| self.projector.segment(anchor, &self.config.tube, pour.current_angle));

        let latched = self.reaction.is_triggered();
        let hit = match segment {
            Some(seg) if !latched => self.collision.test(seg.terminus, &self.config.paper),
            _ => false,
        };
        let state = self.reaction.maybe_trigger_at(hit, Some(frame));

        let reason = match (pose, pour.is_pouring) {
            (None, _) => ReasonCode::R001_NO_HAND,
            (Some(_), false) => ReasonCode::R002_TILT_IDLE,
            (Some(_), true) if latched => ReasonCode::R005_REACTION_LATCHED,
            (Some(_), true) if hit => ReasonCode::R004_REACTION_TRIGGERED,
            (Some(_), true) => ReasonCode::R003_POUR_MISS,
        };

        debug!(
            frame,
            angle = pour.current_angle,
            pouring = pour.is_pouring,
            hit,
            reason = reason.code(),
            "frame"
        );

        let colors = self.colors.colors_for(variant);
        let plan = render_plan(&self.config, anchor, &pour, segment, variant, &colors, state, pose.is_some());

        let report = FrameReport {
            timestamp: Utc::now(),
            frame,
            variant,
            hand_present: pose.is_some(),
            angle: pour.current_angle,
            angle_clamped: pose.map(PoseSample::angle_out_of_range).unwrap_or(false),
            pouring: pour.is_pouring,
            terminus: segment.map(|s| s.terminus),
            hit,
            reaction: state,
            triggered_at: self.reaction.triggered_at(),
            reason,
        };

        FrameOutput { plan, report }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn reaction_state(&self) -> ReactionState {
        self.reaction.state()
    }

    pub fn triggered_at(&self) -> Option<u64> {
        self.reaction.triggered_at()
    }

    /// Number of frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Assemble the draw instructions from one frame's computed pieces
#[allow(clippy::too_many_arguments)]
pub fn render_plan(
    config: &LabConfig,
    anchor: Point,
    pour: &PourState,
    segment: Option<StreamSegment>,
    variant: ReactionVariant,
    colors: &ReactionColors,
    state: ReactionState,
    hand_present: bool,
) -> RenderPlan {
    let paper = config.paper.as_rect();
    let triggered = state.is_triggered();

    RenderPlan {
        tube: tube_drawing(&config.tube, anchor, colors),
        stream: segment.map(|seg| StreamDrawing {
            start: seg.start,
            terminus: seg.terminus,
            color: colors.liquid,
            thickness: STREAM_THICKNESS,
            splash_radius: STREAM_SPLASH_RADIUS,
        }),
        paper: PaperDrawing {
            region: paper,
            fill: colors.paper_for(state),
            border: PAPER_BORDER_COLOR,
            caption: TextDrawing {
                text: variant.paper_label().to_string(),
                origin: paper.top_left().offset(0, -10),
                color: CAPTION_COLOR,
                scale: 0.45,
            },
        },
        show_reaction_label: triggered,
        reaction_label: triggered.then(|| TextDrawing {
            text: REACTION_LABEL.to_string(),
            origin: Point::new(paper.x.saturating_sub(10), paper.bottom_right().y.saturating_add(25)),
            color: REACTION_LABEL_COLOR,
            scale: 0.65,
        }),
        hud: HudReadout {
            angle: hand_present.then_some(pour.current_angle),
            pouring: pour.is_pouring,
        },
    }
}

fn tube_drawing(tube: &TubeGeometry, anchor: Point, colors: &ReactionColors) -> TubeDrawing {
    let outline = tube.body(anchor);
    let liquid_height = (tube.height() as f64 * LIQUID_LEVEL) as u32;
    let liquid_top = outline.y.saturating_add_unsigned(tube.height() - liquid_height);

    TubeDrawing {
        anchor,
        outline,
        outline_color: GLASS_COLOR,
        outline_thickness: GLASS_THICKNESS,
        // Inset 3px from the glass walls, 5px above the base
        liquid: Rect {
            x: outline.x.saturating_add(3),
            y: liquid_top,
            width: tube.width().saturating_sub(6),
            height: liquid_height.saturating_sub(5),
        },
        liquid_color: colors.liquid,
        bottom_center: tube.mouth(anchor),
        bottom_radii: (tube.width() / 2, TUBE_BOTTOM_RADIUS_Y),
    }
}

// =============================================================================
// TESTS
// =============================================================================
