//! Geometry shared by the hit tester and the host seam
//!
//! Positions and extents are `f64` so hosts can report sub-cell or pixel
//! coordinates. Terminal cells convert losslessly from ratatui types.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a window-space point into the space whose origin is `origin`
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Self::new(f64::from(pos.x), f64::from(pos.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangular surface as seen by the hit tester
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub size: Size,
    pub visible: bool,
}

impl Surface {
    pub const fn new(size: Size, visible: bool) -> Self {
        Self { size, visible }
    }

    pub fn from_rect(rect: Rect, visible: bool) -> Self {
        Self::new(
            Size::new(f64::from(rect.width), f64::from(rect.height)),
            visible,
        )
    }
}

/// A resolved surface paired with the pointer expressed in its local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHit {
    pub surface: Surface,
    pub local: Point,
}

/// Resolve `pointer` (window space) against a surface laid out at `rect`
pub fn hit_in_rect(rect: Rect, visible: bool, pointer: Point) -> LocalHit {
    let origin = Point::new(f64::from(rect.x), f64::from(rect.y));
    LocalHit {
        surface: Surface::from_rect(rect, visible),
        local: pointer.relative_to(origin),
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
