/*! Display (screen) snapshot. */

use super::{DisplayId, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A connected display, in global top-left coordinates.
///
/// `name`, `scale_factor` and the visible frame come from AppKit, which only
/// answers on the main thread. Without them `scale_factor` is `None` and the
/// visible frame equals the full frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Display {
  pub id: DisplayId,
  pub name: Option<String>,
  /// The display holding the menu bar (global origin).
  pub main: bool,
  /// Backing pixels per point, when known.
  pub scale_factor: Option<f64>,
  pub size: Size,
  pub position: Point,
  /// Area not covered by the menu bar and Dock.
  pub visible_size: Size,
  pub visible_position: Point,
}

impl Display {
  pub const fn frame(&self) -> Rect {
    Rect::new(self.position, self.size)
  }

  pub const fn visible_frame(&self) -> Rect {
    Rect::new(self.visible_position, self.visible_size)
  }

  /// Whether AppKit's screen details (visible frame, scale, name) were read.
  pub const fn has_screen_details(&self) -> bool {
    self.scale_factor.is_some()
  }

  /// Height of the strip above the visible frame (the menu bar on the main display).
  pub fn top_inset(&self) -> f64 {
    (self.visible_position.y() - self.position.y()).max(0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn display() -> Display {
    Display {
      id: DisplayId(1),
      name: Some("Built-in Retina Display".into()),
      main: true,
      scale_factor: Some(2.0),
      size: Size::new(1512.0, 982.0),
      position: Point::ZERO,
      visible_size: Size::new(1512.0, 875.0),
      visible_position: Point::new(0.0, 33.0),
    }
  }

  #[test]
  fn top_inset_is_menu_bar() {
    assert_eq!(display().top_inset(), 33.0);
  }

  #[test]
  fn serializes_with_array_geometry() {
    let value = serde_json::to_value(display()).unwrap();
    assert_eq!(value["visiblePosition"], serde_json::json!([0.0, 33.0]));
    assert_eq!(value["size"], serde_json::json!([1512.0, 982.0]));
    assert_eq!(value["id"], serde_json::json!(1));
  }
}
