/*!
Method table and dispatch.

A call arrives as a method name plus JSON argument text. The text is
decoded (`DecodingError` if it is not JSON), shaped into the method's typed
arguments (`ValidationError` if it does not fit) and dispatched against a
[`WindowControl`]. The result is always an [`Envelope`].
*/

use std::fmt;
use std::str::FromStr;

use mwc::{
  AppInfo, AppQuery, AppWindowQuery, Display, Mwc, MwcError, MwcResult, SetWindowFrame, SetZoom,
  WindowApp, WindowFrame, WindowInfo, WindowInspection, ZoomQuery, ZoomState,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use ts_rs::TS;

use crate::control::WindowControl;
use crate::envelope::Envelope;
use crate::main_thread::MainThread;

/// Bridge methods, camelCase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Method {
  HasAccessibilityPermission,
  GetApps,
  GetWindows,
  GetWindowApps,
  GetWindowSize,
  SetWindowSize,
  ActivateWindow,
  InspectWindow,
  GetDisplays,
  GetMainDisplay,
  GetActiveDisplay,
  GetMenuBarHeight,
  GetZoom,
  SetZoom,
}

impl Method {
  pub const ALL: [Self; 14] = [
    Self::HasAccessibilityPermission,
    Self::GetApps,
    Self::GetWindows,
    Self::GetWindowApps,
    Self::GetWindowSize,
    Self::SetWindowSize,
    Self::ActivateWindow,
    Self::InspectWindow,
    Self::GetDisplays,
    Self::GetMainDisplay,
    Self::GetActiveDisplay,
    Self::GetMenuBarHeight,
    Self::GetZoom,
    Self::SetZoom,
  ];

  /// Methods that walk every running app; deferred calls run these off-thread.
  pub const fn is_slow(self) -> bool {
    matches!(self, Self::GetApps | Self::GetWindows | Self::GetWindowApps)
  }

  /// Methods that need AppKit's main thread for complete results.
  pub const fn needs_main_thread(self) -> bool {
    matches!(
      self,
      Self::ActivateWindow
        | Self::GetDisplays
        | Self::GetMainDisplay
        | Self::GetActiveDisplay
        | Self::GetMenuBarHeight
    )
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::HasAccessibilityPermission => "hasAccessibilityPermission",
      Self::GetApps => "getApps",
      Self::GetWindows => "getWindows",
      Self::GetWindowApps => "getWindowApps",
      Self::GetWindowSize => "getWindowSize",
      Self::SetWindowSize => "setWindowSize",
      Self::ActivateWindow => "activateWindow",
      Self::InspectWindow => "inspectWindow",
      Self::GetDisplays => "getDisplays",
      Self::GetMainDisplay => "getMainDisplay",
      Self::GetActiveDisplay => "getActiveDisplay",
      Self::GetMenuBarHeight => "getMenuBarHeight",
      Self::GetZoom => "getZoom",
      Self::SetZoom => "setZoom",
    }
  }
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Method {
  type Err = MwcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|m| m.name() == s)
      .ok_or_else(|| MwcError::validation(format!("Unknown method: {s}")))
  }
}

/// Successful call result.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RpcResponse {
  Bool(bool),
  Number(f64),
  Apps(Vec<AppInfo>),
  Windows(Vec<WindowInfo>),
  WindowApps(Vec<WindowApp>),
  Frame(WindowFrame),
  Inspection(Box<WindowInspection>),
  Displays(Vec<Display>),
  Display(Box<Display>),
  Zoom(ZoomState),
  /// No result; the envelope omits `value`.
  Null,
}

/// Bridge behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeConfig {
  /// Capture a stack for every error, not only when `RUST_BACKTRACE` is set.
  /// Applies to every error created in the process once a bridge enables it.
  pub always_capture_stack: bool,
}

/// Typed call surface over a [`WindowControl`], [`Mwc`] by default. Clone is cheap.
#[derive(Debug, Clone)]
pub struct Bridge<C = Mwc> {
  control: C,
  config: BridgeConfig,
  main: Option<MainThread>,
}

impl Default for Bridge {
  fn default() -> Self {
    Self::new(Mwc::new())
  }
}

fn args<T: DeserializeOwned>(method: Method, args: JsonValue) -> MwcResult<T> {
  serde_json::from_value(args).map_err(|e| MwcError::validation(format!("Invalid args for {method}: {e}")))
}

/// Absent args mean "use the defaults".
fn args_or_default<T: DeserializeOwned + Default>(method: Method, value: JsonValue) -> MwcResult<T> {
  if value.is_null() {
    Ok(T::default())
  } else {
    args(method, value)
  }
}

/// Decode argument text. Empty text is no arguments.
fn decode_args(text: &str) -> MwcResult<JsonValue> {
  if text.trim().is_empty() {
    return Ok(JsonValue::Null);
  }
  serde_json::from_str(text).map_err(|e| MwcError::decoding(e.to_string()))
}

impl<C: WindowControl> Bridge<C> {
  pub const fn new(control: C) -> Self {
    Self {
      control,
      config: BridgeConfig {
        always_capture_stack: false,
      },
      main: None,
    }
  }

  #[must_use]
  pub fn with_config(mut self, config: BridgeConfig) -> Self {
    if config.always_capture_stack {
      mwc::force_backtraces();
    }
    self.config = config;
    self
  }

  /// Run display and activation calls through `main` instead of the calling thread.
  #[must_use]
  pub fn on_main_thread(mut self, main: MainThread) -> Self {
    self.main = Some(main);
    self
  }

  pub const fn control(&self) -> &C {
    &self.control
  }

  pub const fn config(&self) -> BridgeConfig {
    self.config
  }

  /// Run one call with decoded arguments.
  pub fn dispatch(&self, method: Method, args_value: JsonValue) -> MwcResult<RpcResponse> {
    match &self.main {
      Some(main) if method.needs_main_thread() => {
        let bridge = self.clone();
        main
          .run(move || bridge.dispatch_here(method, args_value))
          .unwrap_or_else(|| Err(MwcError::unavailable("Main thread")))
      }
      _ => self.dispatch_here(method, args_value),
    }
  }

  fn dispatch_here(&self, method: Method, args_value: JsonValue) -> MwcResult<RpcResponse> {
    let control = &self.control;
    Ok(match method {
      Method::HasAccessibilityPermission => RpcResponse::Bool(control.has_accessibility_permission()),
      Method::GetApps => RpcResponse::Apps(control.apps()?),
      Method::GetWindows => {
        let query: AppQuery = args(method, args_value)?;
        RpcResponse::Windows(control.windows(&query)?)
      }
      Method::GetWindowApps => RpcResponse::WindowApps(control.window_apps()?),
      Method::GetWindowSize => {
        let query: AppWindowQuery = args(method, args_value)?;
        RpcResponse::Frame(control.window_frame(&query)?)
      }
      Method::SetWindowSize => {
        let request: SetWindowFrame = args(method, args_value)?;
        control.set_window_frame(&request)?;
        RpcResponse::Null
      }
      Method::ActivateWindow => {
        let query: AppWindowQuery = args(method, args_value)?;
        control.activate_window(&query)?;
        RpcResponse::Null
      }
      Method::InspectWindow => {
        let query: AppWindowQuery = args(method, args_value)?;
        RpcResponse::Inspection(Box::new(control.inspect_window(&query)?))
      }
      Method::GetDisplays => RpcResponse::Displays(control.displays()?),
      Method::GetMainDisplay => RpcResponse::Display(Box::new(control.main_display()?)),
      Method::GetActiveDisplay => RpcResponse::Display(Box::new(control.active_display()?)),
      Method::GetMenuBarHeight => RpcResponse::Number(control.menu_bar_height()?),
      Method::GetZoom => {
        let query: ZoomQuery = args_or_default(method, args_value)?;
        RpcResponse::Zoom(control.zoom(&query)?)
      }
      Method::SetZoom => {
        let request: SetZoom = args(method, args_value)?;
        RpcResponse::Zoom(control.set_zoom(&request)?)
      }
    })
  }

  fn wrap(method: &str, result: MwcResult<RpcResponse>) -> Envelope {
    match result {
      Ok(value) => Envelope::success(value),
      Err(e) => {
        log::warn!("[bridge] {method} failed: {e}");
        Envelope::failure(&e)
      }
    }
  }

  /// Call with already-parsed arguments.
  pub fn call_value(&self, method: &str, args_value: JsonValue) -> Envelope {
    let result = method
      .parse::<Method>()
      .and_then(|m| self.dispatch(m, args_value));
    Self::wrap(method, result)
  }

  /// Call with JSON argument text, answering with encoded envelope text.
  pub fn call(&self, method: &str, args_text: &str) -> String {
    let envelope = match decode_args(args_text) {
      Ok(value) => self.call_value(method, value),
      Err(e) => Self::wrap(method, Err(e)),
    };
    envelope.encode()
  }

  /// Like [`Bridge::call`], delivering the envelope to `callback`.
  ///
  /// Slow methods run on the rayon pool and the callback fires from a worker
  /// thread; everything else completes before this returns.
  pub fn call_deferred<F>(&self, method: &str, args_text: &str, callback: F)
  where
    F: FnOnce(String) + Send + 'static,
  {
    let slow = method.parse::<Method>().is_ok_and(Method::is_slow);
    if !slow {
      callback(self.call(method, args_text));
      return;
    }
    let bridge = self.clone();
    let method = method.to_owned();
    let args_text = args_text.to_owned();
    rayon::spawn(move || callback(bridge.call(&method, &args_text)));
  }
}
