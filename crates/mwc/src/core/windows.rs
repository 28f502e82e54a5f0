/*! App/window discovery and window operations. */

use super::Engine;
use crate::a11y::attr::{element_rect, set_attr};
use crate::a11y::names::{action, attr};
use crate::describe;
use crate::platform::{AxElement, Platform};
use crate::resolve;
use crate::types::{
  AppInfo, AppQuery, AppWindowQuery, MwcError, MwcResult, SetWindowFrame, WindowApp, WindowFrame,
  WindowInfo, WindowInspection,
};

impl<P: Platform> Engine<P> {
  /// Validate, check permission, then resolve.
  fn resolve_window(&self, query: &AppWindowQuery) -> MwcResult<(crate::platform::AppRecord, P::Element)> {
    let (app, window) = query.validate()?;
    self.platform.require_permissions()?;
    resolve::find_app_window(&self.platform, &app, &window)
  }

  pub(crate) fn apps(&self) -> MwcResult<Vec<AppInfo>> {
    Ok(
      describe::listed_apps(&self.platform, &self.config)
        .iter()
        .map(describe::app_info)
        .collect(),
    )
  }

  pub(crate) fn windows(&self, query: &AppQuery) -> MwcResult<Vec<WindowInfo>> {
    let app = query.app.selector()?;
    self.platform.require_permissions()?;
    let record = resolve::find_app(&self.platform, &app)?;
    Ok(describe::describe_windows(&self.platform, &record, &self.config))
  }

  pub(crate) fn window_apps(&self) -> MwcResult<Vec<WindowApp>> {
    self.platform.require_permissions()?;
    Ok(describe::window_apps(&self.platform, &self.config))
  }

  pub(crate) fn window_frame(&self, query: &AppWindowQuery) -> MwcResult<WindowFrame> {
    let (_, window) = self.resolve_window(query)?;
    let rect = element_rect(&window).ok_or_else(|| MwcError::internal("Invalid window info"))?;
    Ok(WindowFrame {
      size: rect.size,
      position: rect.position,
    })
  }

  pub(crate) fn set_window_frame(&self, request: &SetWindowFrame) -> MwcResult<()> {
    let query = request.query();
    query.validate()?;
    if !request.size.is_valid() {
      return Err(MwcError::validation("size must be finite and non-negative"));
    }
    if request.position.is_some_and(|p| !p.is_finite()) {
      return Err(MwcError::validation("position must be finite"));
    }
    let (_, window) = self.resolve_window(&query)?;
    // Position must be written before size.
    if let Some(position) = request.position {
      set_attr(&window, attr::POSITION, &position.rounded().into())?;
    }
    set_attr(&window, attr::SIZE, &request.size.into())
  }

  pub(crate) fn activate_window(&self, query: &AppWindowQuery) -> MwcResult<()> {
    let (record, window) = self.resolve_window(query)?;
    self.platform.activate_app(&record)?;
    window
      .perform_action(action::RAISE)
      .map_err(|code| MwcError::accessibility("raise window", code))
  }

  pub(crate) fn inspect_window(&self, query: &AppWindowQuery) -> MwcResult<WindowInspection> {
    let (_, window) = self.resolve_window(query)?;
    Ok(describe::inspect_window(&window, &self.config))
  }
}
