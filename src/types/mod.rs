//! Core types for vlab

mod geometry;
mod output;
mod plan;
mod pose;
mod pour;
mod reaction;
mod reason;

pub use geometry::{Point, Rect, TargetRegion, TubeGeometry};
pub use output::FrameReport;
pub use plan::{
    HudReadout, PaperDrawing, RenderPlan, StreamDrawing, TextDrawing, TubeDrawing,
    CAPTION_COLOR, GLASS_COLOR, GLASS_THICKNESS, PAPER_BORDER_COLOR, REACTION_LABEL,
    REACTION_LABEL_COLOR, STREAM_SPLASH_RADIUS, STREAM_THICKNESS, TUBE_BOTTOM_RADIUS_Y,
};
pub use pose::PoseSample;
pub use pour::{PourState, TrajectoryStrategy};
pub use reaction::{ReactionColors, ReactionState, ReactionVariant, Rgb};
pub use reason::ReasonCode;
