/*!
Stand-in platform for targets without window control.

Every query reports empty results and every operation fails with
`NotSupported`, so the crate (and the bridge above it) still builds and
answers with a typed error.
*/

use super::{AppRecord, AxCode, AxElement, Platform};
use crate::a11y::AttrValue;
use crate::types::{Display, MwcError, MwcResult, Point, ProcessId};
use crate::zoom::{ZoomBackend, ZoomParams};

const PLATFORM: &str = "window control requires macOS";

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Unsupported;

/// Element handle that never holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoElement;

impl AxElement for NoElement {
  fn copy_attr(&self, _attr: &str) -> Option<AttrValue<Self>> {
    None
  }

  fn attr_count(&self, _attr: &str) -> Option<usize> {
    None
  }

  fn attr_names(&self) -> Vec<String> {
    Vec::new()
  }

  fn action_names(&self) -> Vec<String> {
    Vec::new()
  }

  fn param_attr_names(&self) -> Vec<String> {
    Vec::new()
  }

  fn set_attr(&self, _attr: &str, _value: &AttrValue<Self>) -> Result<(), AxCode> {
    Err(-25200)
  }

  fn perform_action(&self, _action: &str) -> Result<(), AxCode> {
    Err(-25200)
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct NoZoom;

impl ZoomBackend for NoZoom {
  fn read(&self) -> MwcResult<ZoomParams> {
    Err(MwcError::not_supported(PLATFORM))
  }

  fn write(&self, _center: Point, _scale: f64, _smooth: bool) -> MwcResult<()> {
    Err(MwcError::not_supported(PLATFORM))
  }
}

impl Platform for Unsupported {
  type Element = NoElement;
  type Zoom = NoZoom;

  fn has_permissions(&self) -> bool {
    false
  }

  fn require_permissions(&self) -> MwcResult<()> {
    Err(MwcError::not_supported(PLATFORM))
  }

  fn running_apps(&self) -> Vec<AppRecord> {
    Vec::new()
  }

  fn app_element(&self, _pid: ProcessId) -> Self::Element {
    NoElement
  }

  fn activate_app(&self, _app: &AppRecord) -> MwcResult<()> {
    Err(MwcError::not_supported(PLATFORM))
  }

  fn displays(&self) -> MwcResult<Vec<Display>> {
    Err(MwcError::not_supported(PLATFORM))
  }

  fn mouse_position(&self) -> Option<Point> {
    None
  }

  fn zoom_backend(&self) -> MwcResult<Self::Zoom> {
    Err(MwcError::not_supported(PLATFORM))
  }
}
