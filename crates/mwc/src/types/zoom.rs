/*! Screen magnification (zoom) request and state types. */

use super::{DisplayId, Point};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Current screen magnification state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ZoomState {
  /// Magnification factor, 1.0 = unzoomed.
  pub scale: f64,
  /// Zoom focus point in global coordinates.
  pub center: Point,
  /// Whether the zoomed image is smoothed.
  pub smooth: bool,
  /// Display the request was resolved against, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub display_id: Option<DisplayId>,
}

/// Selects a display for a zoom read. At most one field may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct ZoomQuery {
  #[serde(default)]
  pub display_id: Option<DisplayId>,
  #[serde(default)]
  pub point: Option<Point>,
}

/// Request to change the zoom state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct SetZoom {
  pub scale: f64,
  /// Defaults to the current center.
  #[serde(default)]
  pub center: Option<Point>,
  /// Defaults to `scale > 1`.
  #[serde(default)]
  pub smooth: Option<bool>,
}

impl SetZoom {
  pub const fn new(scale: f64) -> Self {
    Self {
      scale,
      center: None,
      smooth: None,
    }
  }

  #[must_use]
  pub const fn center(mut self, center: Point) -> Self {
    self.center = Some(center);
    self
  }

  #[must_use]
  pub const fn smooth(mut self, smooth: bool) -> Self {
    self.smooth = Some(smooth);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn set_zoom_requires_numeric_scale() {
    assert!(serde_json::from_value::<SetZoom>(json!({})).is_err());
    assert!(serde_json::from_value::<SetZoom>(json!({"scale": null})).is_err());
    assert!(serde_json::from_value::<SetZoom>(json!({"scale": "nope nope no"})).is_err());
    assert!(serde_json::from_value::<SetZoom>(json!({"scale": 2, "center": [false, 1.1]})).is_err());
    let ok: SetZoom = serde_json::from_value(json!({"scale": 2, "center": [1, 1]})).unwrap();
    assert_eq!(ok, SetZoom::new(2.0).center(Point::new(1.0, 1.0)));
  }

  #[test]
  fn zoom_query_rejects_bad_display_ids() {
    for bad in [json!(-1), json!("asdf"), json!(1.5), json!(true), json!([]), json!({})] {
      assert!(
        serde_json::from_value::<ZoomQuery>(json!({ "displayId": bad })).is_err(),
        "displayId {bad} should be rejected"
      );
    }
    let q: ZoomQuery = serde_json::from_value(json!({"point": [0, 0]})).unwrap();
    assert_eq!(q.point, Some(Point::ZERO));
  }

  #[test]
  fn state_omits_display_when_unset() {
    let state = ZoomState {
      scale: 1.0,
      center: Point::ZERO,
      smooth: false,
      display_id: None,
    };
    assert_eq!(
      serde_json::to_value(state).unwrap(),
      json!({"scale": 1.0, "center": [0.0, 0.0], "smooth": false})
    );
  }
}
