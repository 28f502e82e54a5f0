/*!
Platform abstraction traits.

These traits define the contract between core code and platform implementations.
Platform-specific code (e.g., macOS) implements these traits.
Core code only uses these traits - never platform-specific types directly.
*/

use crate::a11y::AttrValue;
use crate::types::{Display, MwcError, MwcResult, Point, ProcessId};

/// Raw OS error code returned by a failed accessibility call.
pub(crate) type AxCode = i32;

/// Snapshot of a running application as reported by the OS.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AppRecord {
  pub pid: ProcessId,
  pub name: Option<String>,
  pub bundle_id: Option<String>,
  pub bundle_url: Option<String>,
  pub exec_url: Option<String>,
  /// Seconds since the Unix epoch.
  pub launch_time: Option<f64>,
  pub active: bool,
  pub hidden: bool,
  pub finished_launching: bool,
}

/// Per-element accessibility operations. Clone is cheap (reference-counted).
pub(crate) trait AxElement: Clone + PartialEq + Send + Sync + 'static {
  /// Copy an attribute value. `None` when the OS reports an error or no value.
  fn copy_attr(&self, attr: &str) -> Option<AttrValue<Self>>;

  /// Number of values held by an attribute. `None` on error.
  fn attr_count(&self, attr: &str) -> Option<usize>;

  fn attr_names(&self) -> Vec<String>;

  fn action_names(&self) -> Vec<String>;

  fn param_attr_names(&self) -> Vec<String>;

  fn set_attr(&self, attr: &str, value: &AttrValue<Self>) -> Result<(), AxCode>;

  fn perform_action(&self, action: &str) -> Result<(), AxCode>;
}

/// Platform-global operations.
///
/// Implementations are cheap value types; the real platforms are zero-sized.
pub(crate) trait Platform: Send + Sync + 'static {
  /// Element handle type for this platform.
  type Element: AxElement;
  /// Zoom backend for this platform.
  type Zoom: crate::zoom::ZoomBackend;

  /// Check if accessibility permissions are granted.
  fn has_permissions(&self) -> bool;

  /// Gate for operations that talk to other processes.
  fn require_permissions(&self) -> MwcResult<()> {
    if self.has_permissions() {
      Ok(())
    } else {
      Err(MwcError::permission_denied())
    }
  }

  /// Running applications, in the order the OS lists them.
  fn running_apps(&self) -> Vec<AppRecord>;

  /// Root accessibility element for a process.
  fn app_element(&self, pid: ProcessId) -> Self::Element;

  /// Bring an app forward: unhide, yield activation, activate.
  fn activate_app(&self, app: &AppRecord) -> MwcResult<()>;

  /// All active displays, main display flagged.
  fn displays(&self) -> MwcResult<Vec<Display>>;

  /// Current mouse position in global coordinates.
  fn mouse_position(&self) -> Option<Point>;

  /// Resolve the private zoom functions.
  fn zoom_backend(&self) -> MwcResult<Self::Zoom>;
}
