//! Crate error type

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LabError>;

/// Everything that can go wrong before or around a lab session.
///
/// The per-frame path itself never fails: bad configuration is rejected
/// when the session is built.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("unknown reaction variant: {0:?} (expected base/red_litmus or acid/blue_litmus)")]
    UnknownVariant(String),

    #[error("unknown trajectory strategy: {0:?} (expected vertical_drop or angled)")]
    UnknownStrategy(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("cannot parse pose: {0}")]
    PoseParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn geometry(m: &str) -> LabError {
    LabError::InvalidGeometry(m.to_string())
}

pub fn config(m: &str) -> LabError {
    LabError::InvalidConfig(m.to_string())
}

pub fn pose(m: &str) -> LabError {
    LabError::PoseParse(m.to_string())
}
