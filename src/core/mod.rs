//! Core modules for vlab

pub mod pour;
pub mod stream;
pub mod collision;
pub mod reaction;
pub mod colors;
pub mod config;
pub mod session;
pub mod pose_parser;
pub mod api;

pub use pour::PourController;
pub use stream::{StreamProjector, StreamSegment};
pub use collision::CollisionDetector;
pub use reaction::ReactionStateMachine;
pub use colors::{ColorPolicy, LITMUS_BLUE, LITMUS_RED};
pub use config::LabConfig;
pub use session::{render_plan, FrameOutput, VirtualLabSession};
pub use pose_parser::PoseParser;
pub use api::{create_router, create_router_with_config, run_server};
