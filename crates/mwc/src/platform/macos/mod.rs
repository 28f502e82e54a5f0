/*!
macOS platform: accessibility, AppKit and CoreGraphics.

All `unsafe` and every OS type stays below this module.
*/

#![allow(unsafe_code)]

mod apps;
mod display;
mod handles;
mod zoom;

use objc2_application_services::AXIsProcessTrusted;

use self::handles::ElementHandle;
use self::zoom::CgsZoom;
use super::{AppRecord, Platform};
use crate::types::{Display, MwcResult, Point, ProcessId};

/// The live desktop session.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct MacOS;

impl Platform for MacOS {
  type Element = ElementHandle;
  type Zoom = CgsZoom;

  fn has_permissions(&self) -> bool {
    unsafe { AXIsProcessTrusted() }
  }

  fn running_apps(&self) -> Vec<AppRecord> {
    apps::running_apps()
  }

  fn app_element(&self, pid: ProcessId) -> ElementHandle {
    ElementHandle::application(pid.0)
  }

  fn activate_app(&self, app: &AppRecord) -> MwcResult<()> {
    apps::activate(app)
  }

  fn displays(&self) -> MwcResult<Vec<Display>> {
    display::displays()
  }

  fn mouse_position(&self) -> Option<Point> {
    display::cursor()
  }

  fn zoom_backend(&self) -> MwcResult<CgsZoom> {
    CgsZoom::shared()
  }
}
