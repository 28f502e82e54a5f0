/*!
The operations the bridge calls.

[`Mwc`] is the real implementation; anything else implementing
[`WindowControl`] can stand in for it behind a [`Bridge`](crate::Bridge).
*/

use mwc::{
  AppInfo, AppQuery, AppWindowQuery, Display, Mwc, MwcResult, SetWindowFrame, SetZoom, WindowApp,
  WindowFrame, WindowInfo, WindowInspection, ZoomQuery, ZoomState,
};

/// Window control operations exposed over the bridge.
pub trait WindowControl: Clone + Send + Sync + 'static {
  fn has_accessibility_permission(&self) -> bool;
  fn apps(&self) -> MwcResult<Vec<AppInfo>>;
  fn windows(&self, query: &AppQuery) -> MwcResult<Vec<WindowInfo>>;
  fn window_apps(&self) -> MwcResult<Vec<WindowApp>>;
  fn window_frame(&self, query: &AppWindowQuery) -> MwcResult<WindowFrame>;
  fn set_window_frame(&self, request: &SetWindowFrame) -> MwcResult<()>;
  fn activate_window(&self, query: &AppWindowQuery) -> MwcResult<()>;
  fn inspect_window(&self, query: &AppWindowQuery) -> MwcResult<WindowInspection>;
  fn displays(&self) -> MwcResult<Vec<Display>>;
  fn main_display(&self) -> MwcResult<Display>;
  fn active_display(&self) -> MwcResult<Display>;
  fn menu_bar_height(&self) -> MwcResult<f64>;
  fn zoom(&self, query: &ZoomQuery) -> MwcResult<ZoomState>;
  fn set_zoom(&self, request: &SetZoom) -> MwcResult<ZoomState>;
}

impl WindowControl for Mwc {
  fn has_accessibility_permission(&self) -> bool {
    Mwc::has_accessibility_permission(self)
  }

  fn apps(&self) -> MwcResult<Vec<AppInfo>> {
    Mwc::apps(self)
  }

  fn windows(&self, query: &AppQuery) -> MwcResult<Vec<WindowInfo>> {
    Mwc::windows(self, query)
  }

  fn window_apps(&self) -> MwcResult<Vec<WindowApp>> {
    Mwc::window_apps(self)
  }

  fn window_frame(&self, query: &AppWindowQuery) -> MwcResult<WindowFrame> {
    Mwc::window_frame(self, query)
  }

  fn set_window_frame(&self, request: &SetWindowFrame) -> MwcResult<()> {
    Mwc::set_window_frame(self, request)
  }

  fn activate_window(&self, query: &AppWindowQuery) -> MwcResult<()> {
    Mwc::activate_window(self, query)
  }

  fn inspect_window(&self, query: &AppWindowQuery) -> MwcResult<WindowInspection> {
    Mwc::inspect_window(self, query)
  }

  fn displays(&self) -> MwcResult<Vec<Display>> {
    Mwc::displays(self)
  }

  fn main_display(&self) -> MwcResult<Display> {
    Mwc::main_display(self)
  }

  fn active_display(&self) -> MwcResult<Display> {
    Mwc::active_display(self)
  }

  fn menu_bar_height(&self) -> MwcResult<f64> {
    Mwc::menu_bar_height(self)
  }

  fn zoom(&self, query: &ZoomQuery) -> MwcResult<ZoomState> {
    Mwc::zoom(self, query)
  }

  fn set_zoom(&self, request: &SetZoom) -> MwcResult<ZoomState> {
    Mwc::set_zoom(self, request)
  }
}
