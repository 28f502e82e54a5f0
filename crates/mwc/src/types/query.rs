/*!
App/window identifier queries.

The wire form is loose (every key optional) so hosts can send partial
objects; [`AppWindowQuery::validate`] turns it into the strict selector
enums or a `ValidationError`.
*/

use super::{MwcError, MwcResult, Point, ProcessId, Size};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Selects a running application. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct AppIdentifier {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub pid: Option<ProcessId>,
}

/// Selects one window of an application. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct WindowIdentifier {
  /// Must be omitted or `true`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub main: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub index: Option<usize>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub title: Option<String>,
}

/// Validated application selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSelector {
  Name(String),
  Pid(ProcessId),
}

/// Validated window selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WindowSelector {
  /// The app's main window, falling back to its first window.
  #[default]
  Main,
  Index(usize),
  Title(String),
}

impl AppIdentifier {
  pub fn selector(&self) -> MwcResult<AppSelector> {
    match (&self.name, self.pid) {
      (None, None) => Err(MwcError::validation("app.name or app.pid must be set")),
      (Some(_), Some(_)) => Err(MwcError::validation("app.name and app.pid are exclusive")),
      (Some(name), None) => Ok(AppSelector::Name(name.clone())),
      (None, Some(pid)) if pid.0 <= 0 => Err(MwcError::validation("app.pid must be positive")),
      (None, Some(pid)) => Ok(AppSelector::Pid(pid)),
    }
  }
}

impl WindowIdentifier {
  pub fn selector(&self) -> MwcResult<WindowSelector> {
    let keys_set = usize::from(self.main.is_some())
      + usize::from(self.index.is_some())
      + usize::from(self.title.is_some());
    if keys_set == 0 {
      return Err(MwcError::validation("window.(main, index or title) must be set"));
    }
    if keys_set > 1 {
      return Err(MwcError::validation("window properties are mutually exclusive"));
    }
    match (self.main, self.index, &self.title) {
      (Some(false), _, _) => Err(MwcError::validation("window.main must be omitted or true")),
      (_, Some(index), _) => Ok(WindowSelector::Index(index)),
      (_, _, Some(title)) => Ok(WindowSelector::Title(title.clone())),
      _ => Ok(WindowSelector::Main),
    }
  }
}

impl From<AppSelector> for AppIdentifier {
  fn from(selector: AppSelector) -> Self {
    match selector {
      AppSelector::Name(name) => Self {
        name: Some(name),
        pid: None,
      },
      AppSelector::Pid(pid) => Self {
        name: None,
        pid: Some(pid),
      },
    }
  }
}

impl From<WindowSelector> for WindowIdentifier {
  fn from(selector: WindowSelector) -> Self {
    match selector {
      WindowSelector::Main => Self {
        main: Some(true),
        ..Self::default()
      },
      WindowSelector::Index(index) => Self {
        index: Some(index),
        ..Self::default()
      },
      WindowSelector::Title(title) => Self {
        title: Some(title),
        ..Self::default()
      },
    }
  }
}

/// Query for an application only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct AppQuery {
  pub app: AppIdentifier,
}

impl AppQuery {
  pub fn new(app: AppSelector) -> Self {
    Self { app: app.into() }
  }
}

/// Query for one window of one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct AppWindowQuery {
  pub app: AppIdentifier,
  /// Defaults to the main window.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub window: Option<WindowIdentifier>,
}

impl AppWindowQuery {
  pub fn new(app: AppSelector) -> Self {
    Self {
      app: app.into(),
      window: None,
    }
  }

  /// Query an app's main window by localized name.
  pub fn by_name(name: impl Into<String>) -> Self {
    Self::new(AppSelector::Name(name.into()))
  }

  /// Query an app's main window by process id.
  pub fn by_pid(pid: i32) -> Self {
    Self::new(AppSelector::Pid(ProcessId(pid)))
  }

  #[must_use]
  pub fn window(mut self, window: WindowSelector) -> Self {
    self.window = Some(window.into());
    self
  }

  pub fn validate(&self) -> MwcResult<(AppSelector, WindowSelector)> {
    let app = self.app.selector()?;
    let window = match &self.window {
      Some(w) => w.selector()?,
      None => WindowSelector::Main,
    };
    Ok((app, window))
  }
}

/// Request to move and/or resize a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct SetWindowFrame {
  pub app: AppIdentifier,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub window: Option<WindowIdentifier>,
  pub size: Size,
  /// Applied (rounded) before the size.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[ts(optional)]
  pub position: Option<Point>,
}

impl SetWindowFrame {
  pub fn new(query: AppWindowQuery, size: Size, position: Option<Point>) -> Self {
    Self {
      app: query.app,
      window: query.window,
      size,
      position,
    }
  }

  pub fn query(&self) -> AppWindowQuery {
    AppWindowQuery {
      app: self.app.clone(),
      window: self.window.clone(),
    }
  }
}
