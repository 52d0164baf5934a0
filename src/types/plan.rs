//! Render plan: everything the external renderer draws for one frame
//!
//! The core never touches pixels. A renderer walks this struct in field
//! order: paper, tube, stream, labels, HUD.

use serde::{Deserialize, Serialize};

use crate::types::{Point, Rect, Rgb};

/// Glass outline gray
pub const GLASS_COLOR: Rgb = Rgb::new(100, 100, 100);
/// Paper border gray
pub const PAPER_BORDER_COLOR: Rgb = Rgb::new(200, 200, 200);
/// Paper caption white
pub const CAPTION_COLOR: Rgb = Rgb::new(255, 255, 255);
/// "Reaction Complete!" green
pub const REACTION_LABEL_COLOR: Rgb = Rgb::new(0, 255, 0);

pub const GLASS_THICKNESS: u32 = 3;
pub const STREAM_THICKNESS: u32 = 5;
pub const STREAM_SPLASH_RADIUS: u32 = 8;
/// Vertical radius of the rounded tube bottom
pub const TUBE_BOTTOM_RADIUS_Y: u32 = 12;

pub const REACTION_LABEL: &str = "Reaction Complete!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub tube: TubeDrawing,
    /// Present only while pouring
    pub stream: Option<StreamDrawing>,
    pub paper: PaperDrawing,
    pub show_reaction_label: bool,
    /// Present only once the reaction has fired
    pub reaction_label: Option<TextDrawing>,
    pub hud: HudReadout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeDrawing {
    /// Where the tube hangs (wrist, or frame centre without a hand)
    pub anchor: Point,
    pub outline: Rect,
    pub outline_color: Rgb,
    pub outline_thickness: u32,
    pub liquid: Rect,
    pub liquid_color: Rgb,
    /// Half-ellipse closing the tube bottom
    pub bottom_center: Point,
    pub bottom_radii: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDrawing {
    /// Tube mouth
    pub start: Point,
    /// Landing point, the same point used for collision
    pub terminus: Point,
    pub color: Rgb,
    pub thickness: u32,
    pub splash_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperDrawing {
    pub region: Rect,
    pub fill: Rgb,
    pub border: Rgb,
    pub caption: TextDrawing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDrawing {
    pub text: String,
    /// Baseline-left origin
    pub origin: Point,
    pub color: Rgb,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudReadout {
    /// Tilt readout, absent without a hand
    pub angle: Option<f64>,
    /// Show the "POURING!" banner
    pub pouring: bool,
}
