/*! Window snapshots. */

use super::{Point, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A window as seen through the accessibility API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowInfo {
  pub ident: Option<String>,
  pub title: Option<String>,
  /// Estimated titlebar height in points, 0 when it couldn't be measured.
  pub titlebar_height_estimate: f64,
  pub focused: bool,
  pub minimized: bool,
  pub size: Size,
  pub position: Point,
}

/// Window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowFrame {
  pub size: Size,
  pub position: Point,
}

/// Accessibility details of a window, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowInspection {
  pub role: Option<String>,
  pub subrole: Option<String>,
  pub title: Option<String>,
  pub attributes: Vec<String>,
  pub actions: Vec<String>,
  pub parameterized_attributes: Vec<String>,
  pub has_children: bool,
  pub titlebar_height_estimate: f64,
  /// Frame of the first toolbar found under the window.
  pub toolbar: Option<WindowFrame>,
}
