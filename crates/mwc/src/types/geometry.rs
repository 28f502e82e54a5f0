/*! Geometry types for screen coordinates.

Points and sizes travel as two-element arrays (`[x, y]`, `[width, height]`)
so hosts can destructure them directly.
*/

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A 2D point in global screen coordinates (top-left origin).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Point(pub f64, pub f64);

impl Point {
  pub const ZERO: Self = Self(0.0, 0.0);

  pub const fn new(x: f64, y: f64) -> Self {
    Self(x, y)
  }

  pub const fn x(&self) -> f64 {
    self.0
  }

  pub const fn y(&self) -> f64 {
    self.1
  }

  /// Round both axes to the nearest integer.
  ///
  /// The window server floors fractional coordinates, so callers round
  /// before handing a point to the OS.
  #[must_use]
  pub fn rounded(&self) -> Self {
    Self(self.0.round(), self.1.round())
  }

  pub fn is_finite(&self) -> bool {
    self.0.is_finite() && self.1.is_finite()
  }
}

/// A 2D size in points.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Size(pub f64, pub f64);

impl Size {
  pub const ZERO: Self = Self(0.0, 0.0);

  pub const fn new(width: f64, height: f64) -> Self {
    Self(width, height)
  }

  pub const fn width(&self) -> f64 {
    self.0
  }

  pub const fn height(&self) -> f64 {
    self.1
  }

  /// Both dimensions finite and non-negative.
  pub fn is_valid(&self) -> bool {
    self.0.is_finite() && self.1.is_finite() && self.0 >= 0.0 && self.1 >= 0.0
  }
}

/// Rectangle in global screen coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct Rect {
  pub position: Point,
  pub size: Size,
}

impl Rect {
  pub const fn new(position: Point, size: Size) -> Self {
    Self { position, size }
  }

  pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self {
      position: Point(x, y),
      size: Size(w, h),
    }
  }

  /// Check if two rects match within a margin of error.
  pub fn matches(&self, other: &Rect, margin: f64) -> bool {
    (self.position.0 - other.position.0).abs() <= margin
      && (self.position.1 - other.position.1).abs() <= margin
      && (self.size.0 - other.size.0).abs() <= margin
      && (self.size.1 - other.size.1).abs() <= margin
  }

  /// Check if a point is contained within this rect (edges inclusive).
  pub fn contains(&self, point: Point) -> bool {
    point.0 >= self.position.0
      && point.0 <= self.position.0 + self.size.0
      && point.1 >= self.position.1
      && point.1 <= self.position.1 + self.size.1
  }

  /// Like [`Rect::contains`] but excluding the right and bottom edges, so
  /// rects that share an edge never both contain a point on it.
  pub fn contains_half_open(&self, point: Point) -> bool {
    point.0 >= self.position.0
      && point.0 < self.position.0 + self.size.0
      && point.1 >= self.position.1
      && point.1 < self.position.1 + self.size.1
  }
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  fn coord() -> impl Strategy<Value = f64> {
    -10000.0..10000.0f64
  }

  proptest! {
    /// Rounding is idempotent and never moves a point by more than half a unit.
    #[test]
    fn rounded_is_stable(x in coord(), y in coord()) {
      let p = Point::new(x, y).rounded();
      prop_assert_eq!(p.rounded(), p);
      prop_assert!((p.x() - x).abs() <= 0.5);
      prop_assert!((p.y() - y).abs() <= 0.5);
    }

    /// Rect::matches is symmetric.
    #[test]
    fn matches_symmetric(
      x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
      w in 0.0..5000.0f64, h in 0.0..5000.0f64, m in 0.0..100.0f64
    ) {
      let a = Rect::from_xywh(x1, y1, w, h);
      let b = Rect::from_xywh(x2, y2, w, h);
      prop_assert_eq!(a.matches(&b, m), b.matches(&a, m));
    }

    /// A rect contains its own corners.
    #[test]
    fn corners_contained(x in coord(), y in coord(), w in 0.0..5000.0f64, h in 0.0..5000.0f64) {
      let rect = Rect::from_xywh(x, y, w, h);
      prop_assert!(rect.contains(Point::new(x, y)));
      prop_assert!(rect.contains(Point::new(x + w, y + h)));
    }
  }
}
