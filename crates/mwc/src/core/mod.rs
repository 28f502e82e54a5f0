/*!
Core MWC instance.

# Module Structure

- `mod.rs` - `Mwc` facade, builder, the platform-generic `Engine`
- `windows.rs` - app/window discovery and window operations
- `screen.rs` - displays and zoom

Every operation that names an app validates its query before checking
accessibility permission, so malformed requests are reported as
`ValidationError` regardless of permission state.

# Example

```ignore
use mwc::{AppWindowQuery, Mwc, Size};

let mwc = Mwc::new();
let frame = mwc.window_frame(&AppWindowQuery::by_name("Terminal"))?;
mwc.set_window_frame(&SetWindowFrame::new(
  AppWindowQuery::by_name("Terminal"),
  Size::new(800.0, 600.0),
  None,
))?;
```
*/

mod screen;
mod windows;

use std::sync::Arc;

use crate::config::Config;
use crate::platform::{CurrentPlatform, Platform};
use crate::types::{
  AppInfo, AppQuery, AppWindowQuery, Display, MwcResult, SetWindowFrame, SetZoom, WindowApp,
  WindowFrame, WindowInfo, WindowInspection, ZoomQuery, ZoomState,
};

/// Platform-generic implementation behind [`Mwc`].
#[derive(Debug)]
pub(crate) struct Engine<P> {
  platform: P,
  config: Config,
}

impl<P: Platform> Engine<P> {
  pub(crate) const fn new(platform: P, config: Config) -> Self {
    Self { platform, config }
  }
}

/// Builder for configuring an [`Mwc`] instance.
///
/// # Example
///
/// ```ignore
/// let mwc = Mwc::builder()
///     .ignore_bundle_id("com.apple.dock")
///     .titlebar_max_height(80.0)
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct MwcBuilder {
  config: Config,
}

impl MwcBuilder {
  /// Skip apps with this bundle id when listing. Adds to the defaults.
  pub fn ignore_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
    self.config.ignored_bundle_ids.push(bundle_id.into());
    self
  }

  /// Titlebar estimates at or above this are discarded. Default: 60.
  pub const fn titlebar_max_height(mut self, height: f64) -> Self {
    self.config.titlebar_max_height = height;
    self
  }

  /// Node budget for accessibility tree searches. Default: 2000.
  pub const fn search_limit(mut self, limit: usize) -> Self {
    self.config.search_limit = limit;
    self
  }

  /// Replace the whole configuration.
  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  pub fn build(self) -> Mwc {
    Mwc {
      engine: Arc::new(Engine::new(CurrentPlatform::default(), self.config)),
    }
  }
}

/// Window control entry point.
///
/// Clone is cheap (Arc bump) - share freely across threads.
#[derive(Debug, Clone)]
pub struct Mwc {
  engine: Arc<Engine<CurrentPlatform>>,
}

impl Default for Mwc {
  fn default() -> Self {
    Self::new()
  }
}

impl Mwc {
  /// Create an instance with default options.
  pub fn new() -> Self {
    Self::builder().build()
  }

  pub fn builder() -> MwcBuilder {
    MwcBuilder::default()
  }

  pub fn config(&self) -> &Config {
    &self.engine.config
  }

  /// Whether this process is trusted for accessibility.
  pub fn has_accessibility_permission(&self) -> bool {
    self.engine.platform.has_permissions()
  }

  pub fn apps(&self) -> MwcResult<Vec<AppInfo>> {
    self.engine.apps()
  }

  pub fn windows(&self, query: &AppQuery) -> MwcResult<Vec<WindowInfo>> {
    self.engine.windows(query)
  }

  /// Every listed app that owns at least one window.
  pub fn window_apps(&self) -> MwcResult<Vec<WindowApp>> {
    self.engine.window_apps()
  }

  pub fn window_frame(&self, query: &AppWindowQuery) -> MwcResult<WindowFrame> {
    self.engine.window_frame(query)
  }

  /// Move (optional) then resize a window.
  pub fn set_window_frame(&self, request: &SetWindowFrame) -> MwcResult<()> {
    self.engine.set_window_frame(request)
  }

  /// Unhide and activate the owning app, then raise the window.
  pub fn activate_window(&self, query: &AppWindowQuery) -> MwcResult<()> {
    self.engine.activate_window(query)
  }

  pub fn inspect_window(&self, query: &AppWindowQuery) -> MwcResult<WindowInspection> {
    self.engine.inspect_window(query)
  }

  pub fn displays(&self) -> MwcResult<Vec<Display>> {
    self.engine.displays()
  }

  pub fn main_display(&self) -> MwcResult<Display> {
    self.engine.main_display()
  }

  /// Display under the mouse cursor, falling back to the main display.
  pub fn active_display(&self) -> MwcResult<Display> {
    self.engine.active_display()
  }

  pub fn menu_bar_height(&self) -> MwcResult<f64> {
    self.engine.menu_bar_height()
  }

  pub fn zoom(&self, query: &ZoomQuery) -> MwcResult<ZoomState> {
    self.engine.zoom(query)
  }

  pub fn set_zoom(&self, request: &SetZoom) -> MwcResult<ZoomState> {
    self.engine.set_zoom(request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_extends_defaults() {
    let mwc = Mwc::builder()
      .ignore_bundle_id("com.apple.dock")
      .titlebar_max_height(80.0)
      .search_limit(10)
      .build();
    let config = mwc.config();
    assert_eq!(config.ignored_bundle_ids.len(), 2);
    assert_eq!(config.titlebar_max_height, 80.0);
    assert_eq!(config.search_limit, 10);
  }

  #[test]
  fn instances_are_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Mwc>();
  }
}
