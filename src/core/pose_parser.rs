//! Pose Parser: text lines → pose samples
//!
//! Accepted per line (case-insensitive):
//! - `-`, `none`, `null`, `absent` → no hand
//! - JSON object: `{"angle": 50, "x": 60, "y": 240}` (or JSON `null`)
//! - key/value: `angle=50 x=60 y=240` (`:` works too, any order)
//! - bare triple: `50 60 240` or `50,60,240`
//!
//! Blank lines and `#` comments are the caller's business; see
//! [`PoseParser::is_skippable`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{self, Result};
use crate::types::PoseSample;

lazy_static! {
    static ref RE_ABSENT: Regex = Regex::new(r"(?i)^(-|none|null|absent)$").unwrap();

    static ref RE_KEY_VALUE: Regex = Regex::new(
        r"(?i)\b(angle|x|y)\s*[=:]\s*([-+]?\d+(?:\.\d+)?)"
    ).unwrap();

    static ref RE_TRIPLE: Regex = Regex::new(
        r"^([-+]?\d+(?:\.\d+)?)[\s,]+([-+]?\d+(?:\.\d+)?)[\s,]+([-+]?\d+(?:\.\d+)?)$"
    ).unwrap();
}

/// Parser for replay files and interactive input
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseParser;

impl PoseParser {
    pub fn new() -> Self {
        Self
    }

    /// Blank or comment line
    pub fn is_skippable(line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    }

    /// Parse one line. `Ok(None)` means a frame with no hand.
    pub fn parse_line(&self, line: &str) -> Result<Option<PoseSample>> {
        let line = line.trim();

        if line.is_empty() {
            return Err(error::pose("empty line"));
        }
        if RE_ABSENT.is_match(line) {
            return Ok(None);
        }
        if line.starts_with('{') {
            let pose: PoseSample = serde_json::from_str(line)?;
            return Ok(Some(pose));
        }
        if let Some(caps) = RE_TRIPLE.captures(line) {
            return Ok(Some(PoseSample::new(
                parse_number(&caps[1])?,
                parse_pixel(&caps[2])?,
                parse_pixel(&caps[3])?,
            )));
        }
        self.parse_key_value(line)
    }

    fn parse_key_value(&self, line: &str) -> Result<Option<PoseSample>> {
        let mut angle = None;
        let mut x = None;
        let mut y = None;

        for caps in RE_KEY_VALUE.captures_iter(line) {
            match caps[1].to_ascii_lowercase().as_str() {
                "angle" => angle = Some(parse_number(&caps[2])?),
                "x" => x = Some(parse_pixel(&caps[2])?),
                _ => y = Some(parse_pixel(&caps[2])?),
            }
        }

        match (angle, x, y) {
            (Some(angle), Some(x), Some(y)) => Ok(Some(PoseSample::new(angle, x, y))),
            (None, None, None) => Err(error::pose(&format!("unrecognised pose line: {:?}", line))),
            _ => Err(error::pose(&format!("pose needs angle, x and y: {:?}", line))),
        }
    }
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| error::pose(&format!("not a number: {:?}", raw)))
}

/// Pixel coordinate, truncated toward zero. Must fit an `i32`.
fn parse_pixel(raw: &str) -> Result<i32> {
    let value = parse_number(raw)?.trunc();
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(error::pose(&format!("pixel coordinate out of range: {}", raw)));
    }
    Ok(value as i32)
}

// =============================================================================
// TESTS
// =============================================================================
