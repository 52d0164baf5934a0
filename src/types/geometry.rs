//! Pixel-space geometry: points, rectangles, tube and paper

use serde::{Deserialize, Serialize};

use crate::error::{self, LabError};
use crate::{
    DEFAULT_TUBE_HEIGHT, DEFAULT_TUBE_WIDTH, PAPER_HEIGHT, PAPER_WIDTH, PAPER_X, PAPER_Y,
};

/// A pixel position. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a pixel offset, pinned at the `i32` bounds
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned rectangle for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(
            self.x.saturating_add_unsigned(self.width),
            self.y.saturating_add_unsigned(self.height),
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Dims {
    width: u32,
    height: u32,
}

/// Test tube body size. Both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Dims")]
pub struct TubeGeometry {
    width: u32,
    height: u32,
}

impl TubeGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self, LabError> {
        if width == 0 || height == 0 {
            return Err(error::geometry(&format!(
                "tube must have positive size, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left corner of the tube body when centred on `anchor`
    pub fn top_left(&self, anchor: Point) -> Point {
        anchor.offset(-((self.width / 2) as i32), -((self.height / 2) as i32))
    }

    /// Tube body rectangle centred on `anchor`
    pub fn body(&self, anchor: Point) -> Rect {
        let corner = self.top_left(anchor);
        Rect {
            x: corner.x,
            y: corner.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Bottom-centre of the tube body, where the liquid leaves
    pub fn mouth(&self, anchor: Point) -> Point {
        let corner = self.top_left(anchor);
        Point::new(
            corner.x.saturating_add_unsigned(self.width / 2),
            corner.y.saturating_add_unsigned(self.height),
        )
    }
}

impl Default for TubeGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_TUBE_WIDTH,
            height: DEFAULT_TUBE_HEIGHT,
        }
    }
}

impl TryFrom<Dims> for TubeGeometry {
    type Error = LabError;

    fn try_from(d: Dims) -> Result<Self, Self::Error> {
        Self::new(d.width, d.height)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Region {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

/// Litmus paper hit box, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Region")]
pub struct TargetRegion {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl TargetRegion {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Result<Self, LabError> {
        if width == 0 || height == 0 {
            return Err(error::geometry(&format!(
                "target region must have positive size, got {}x{}",
                width, height
            )));
        }
        Ok(Self { x, y, width, height })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Right edge, inclusive. Widened so extreme configs cannot overflow.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge, inclusive
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn as_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for TargetRegion {
    fn default() -> Self {
        Self {
            x: PAPER_X,
            y: PAPER_Y,
            width: PAPER_WIDTH,
            height: PAPER_HEIGHT,
        }
    }
}

impl TryFrom<Region> for TargetRegion {
    type Error = LabError;

    fn try_from(r: Region) -> Result<Self, Self::Error> {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tube_rejects_zero_size() {
        assert!(TubeGeometry::new(0, 180).is_err());
        assert!(TubeGeometry::new(50, 0).is_err());
        assert!(TubeGeometry::new(1, 1).is_ok());
    }

    #[test]
    fn test_tube_centred_on_anchor() {
        let tube = TubeGeometry::default();
        let body = tube.body(Point::new(60, 240));
        assert_eq!(body.top_left(), Point::new(35, 150));
        assert_eq!(body.bottom_right(), Point::new(85, 330));
    }

    #[test]
    fn test_mouth_is_bottom_centre() {
        let tube = TubeGeometry::default();
        assert_eq!(tube.mouth(Point::new(60, 240)), Point::new(60, 330));
    }

    #[test]
    fn test_odd_width_uses_floor_half() {
        let tube = TubeGeometry::new(51, 181).unwrap();
        // 51/2 = 25 both ways, so the mouth stays on the anchor column
        assert_eq!(tube.top_left(Point::new(100, 100)), Point::new(75, 10));
        assert_eq!(tube.mouth(Point::new(100, 100)), Point::new(100, 191));
    }

    #[test]
    fn test_region_deserialize_validates() {
        let ok: TargetRegion =
            serde_json::from_str(r#"{"x":20,"y":350,"width":80,"height":100}"#).unwrap();
        assert_eq!(ok, TargetRegion::default());

        let bad = serde_json::from_str::<TargetRegion>(r#"{"x":0,"y":0,"width":0,"height":10}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_offsets_pin_at_bounds() {
        assert_eq!(Point::new(i32::MAX - 5, 0).offset(10, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(0, i32::MIN + 5).offset(0, -10), Point::new(0, i32::MIN));

        let tube = TubeGeometry::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(tube.mouth(Point::new(0, i32::MAX)).y, i32::MAX);

        let rect = Rect { x: i32::MAX - 1, y: 0, width: 80, height: 100 };
        assert_eq!(rect.bottom_right(), Point::new(i32::MAX, 100));
    }

    #[test]
    fn test_region_edges() {
        let region = TargetRegion::default();
        assert_eq!(region.right(), 100);
        assert_eq!(region.bottom(), 450);
    }
}
