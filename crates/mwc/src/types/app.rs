/*! Running application snapshots. */

use super::{ProcessId, WindowInfo};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A running application.
///
/// Optional fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppInfo {
  pub name: String,
  pub pid: ProcessId,
  pub active: bool,
  pub hidden: bool,
  pub bundle_ident: Option<String>,
  #[serde(rename = "bundleURL")]
  pub bundle_url: Option<String>,
  #[serde(rename = "execURL")]
  pub exec_url: Option<String>,
  /// ISO-8601 launch time (UTC, millisecond precision).
  pub launch_date: Option<String>,
}

/// A running application together with its windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowApp {
  #[serde(flatten)]
  pub app: AppInfo,
  pub windows: Vec<WindowInfo>,
}
