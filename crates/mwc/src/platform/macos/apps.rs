/*! Running applications via `NSWorkspace`. */

#![allow(unsafe_code)]

use objc2::rc::Retained;
use objc2::{msg_send, sel, MainThreadMarker};
use objc2_app_kit::{NSApplication, NSApplicationActivationOptions, NSRunningApplication, NSWorkspace};
use objc2_foundation::NSObjectProtocol;

use crate::platform::AppRecord;
use crate::types::{MwcError, MwcResult, ProcessId};

fn record(app: &NSRunningApplication) -> AppRecord {
  AppRecord {
    pid: ProcessId(app.processIdentifier()),
    name: app.localizedName().map(|s| s.to_string()),
    bundle_id: app.bundleIdentifier().map(|s| s.to_string()),
    bundle_url: app
      .bundleURL()
      .and_then(|u| u.absoluteString())
      .map(|s| s.to_string()),
    exec_url: app
      .executableURL()
      .and_then(|u| u.absoluteString())
      .map(|s| s.to_string()),
    launch_time: app.launchDate().map(|d| d.timeIntervalSince1970()),
    active: app.isActive(),
    hidden: app.isHidden(),
    finished_launching: app.isFinishedLaunching(),
  }
}

/// Running applications in workspace order.
pub(crate) fn running_apps() -> Vec<AppRecord> {
  // Wrap in autorelease pool: called from worker threads without one.
  objc2::rc::autoreleasepool(|_pool| {
    NSWorkspace::sharedWorkspace()
      .runningApplications()
      .iter()
      .map(|app| record(&app))
      .collect()
  })
}

fn running_app(pid: ProcessId) -> Option<Retained<NSRunningApplication>> {
  NSRunningApplication::runningApplicationWithProcessIdentifier(pid.0)
}

/// Unhide, take activation from this process where supported, activate.
pub(crate) fn activate(app: &AppRecord) -> MwcResult<()> {
  let Some(running) = running_app(app.pid) else {
    return Err(MwcError::not_found("App"));
  };
  if running.isHidden() && !running.unhide() {
    log::debug!("activate: {} refused to unhide", app.pid);
  }
  // Cooperative activation (macOS 14+) needs the calling app's consent.
  // Some apps ignore activate() without it.
  if let Some(mtm) = MainThreadMarker::new() {
    let ns_app = NSApplication::sharedApplication(mtm);
    if ns_app.respondsToSelector(sel!(yieldActivationToApplication:)) {
      let () = unsafe { msg_send![&*ns_app, yieldActivationToApplication: &*running] };
    }
  }
  if !running.activateWithOptions(NSApplicationActivationOptions::empty()) {
    log::debug!("activate: {} refused activation", app.pid);
  }
  Ok(())
}
