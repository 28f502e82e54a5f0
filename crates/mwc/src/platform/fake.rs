/*!
In-memory platform for tests.

Elements are shared nodes (clones alias the same node), so a test can keep
a handle to a window and inspect the writes the core made through it.
*/

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{AppRecord, AxCode, AxElement, Platform};
use crate::a11y::names::attr;
use crate::a11y::AttrValue;
use crate::types::{Display, MwcResult, Point, ProcessId, Rect};
use crate::zoom::recording::RecordingZoom;
use crate::zoom::ZoomParams;

type Value = AttrValue<FakeElement>;

struct Node {
  name: String,
  attrs: Mutex<BTreeMap<String, Value>>,
  fail_set: Mutex<Option<AxCode>>,
  fail_action: Mutex<Option<AxCode>>,
  writes: Mutex<Vec<(String, Value)>>,
  performed: Mutex<Vec<String>>,
}

#[derive(Clone)]
pub(crate) struct FakeElement(Arc<Node>);

impl fmt::Debug for FakeElement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FakeElement({})", self.0.name)
  }
}

impl PartialEq for FakeElement {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl FakeElement {
  pub(crate) fn new(name: &str) -> Self {
    Self(Arc::new(Node {
      name: name.to_owned(),
      attrs: Mutex::default(),
      fail_set: Mutex::default(),
      fail_action: Mutex::default(),
      writes: Mutex::default(),
      performed: Mutex::default(),
    }))
  }

  pub(crate) fn name(&self) -> &str {
    &self.0.name
  }

  #[must_use]
  pub(crate) fn with(self, name: &str, value: Value) -> Self {
    self.0.attrs.lock().insert(name.to_owned(), value);
    self
  }

  #[must_use]
  pub(crate) fn with_elements(self, name: &str, elements: Vec<Self>) -> Self {
    self.with(
      name,
      AttrValue::Array(elements.into_iter().map(AttrValue::Element).collect()),
    )
  }

  #[must_use]
  pub(crate) fn with_children(self, children: Vec<Self>) -> Self {
    self.with_elements(attr::CHILDREN, children)
  }

  #[must_use]
  pub(crate) fn with_rect(self, rect: Rect) -> Self {
    self
      .with(attr::POSITION, rect.position.into())
      .with(attr::SIZE, rect.size.into())
  }

  #[must_use]
  pub(crate) fn failing_set(self, code: AxCode) -> Self {
    *self.0.fail_set.lock() = Some(code);
    self
  }

  #[must_use]
  pub(crate) fn failing_action(self, code: AxCode) -> Self {
    *self.0.fail_action.lock() = Some(code);
    self
  }

  /// Attribute writes in the order they happened.
  pub(crate) fn writes(&self) -> Vec<(String, Value)> {
    self.0.writes.lock().clone()
  }

  pub(crate) fn performed(&self) -> Vec<String> {
    self.0.performed.lock().clone()
  }
}

impl AxElement for FakeElement {
  fn copy_attr(&self, attr: &str) -> Option<Value> {
    self.0.attrs.lock().get(attr).cloned()
  }

  fn attr_count(&self, attr: &str) -> Option<usize> {
    self.0.attrs.lock().get(attr).map(|v| match v {
      AttrValue::Array(items) => items.len(),
      _ => 1,
    })
  }

  fn attr_names(&self) -> Vec<String> {
    self.0.attrs.lock().keys().cloned().collect()
  }

  fn action_names(&self) -> Vec<String> {
    vec!["AXRaise".to_owned()]
  }

  fn param_attr_names(&self) -> Vec<String> {
    Vec::new()
  }

  fn set_attr(&self, attr: &str, value: &Value) -> Result<(), AxCode> {
    if let Some(code) = *self.0.fail_set.lock() {
      return Err(code);
    }
    self.0.writes.lock().push((attr.to_owned(), value.clone()));
    self.0.attrs.lock().insert(attr.to_owned(), value.clone());
    Ok(())
  }

  fn perform_action(&self, action: &str) -> Result<(), AxCode> {
    if let Some(code) = *self.0.fail_action.lock() {
      return Err(code);
    }
    self.0.performed.lock().push(action.to_owned());
    Ok(())
  }
}

/// A finished-launching app record.
pub(crate) fn app(pid: i32, name: &str) -> AppRecord {
  AppRecord {
    pid: ProcessId(pid),
    name: Some(name.to_owned()),
    bundle_id: Some(format!("com.example.{}", name.to_lowercase())),
    finished_launching: true,
    ..AppRecord::default()
  }
}

/// A window element with a title and frame.
pub(crate) fn window(title: &str, rect: Rect) -> FakeElement {
  FakeElement::new(title)
    .with(attr::TITLE, AttrValue::from(title))
    .with_rect(rect)
}

struct State {
  trusted: bool,
  apps: Vec<AppRecord>,
  elements: HashMap<ProcessId, FakeElement>,
  displays: Vec<Display>,
  mouse: Option<Point>,
  activated: Vec<ProcessId>,
  zoom: Option<RecordingZoom>,
}

#[derive(Clone)]
pub(crate) struct FakePlatform(Arc<Mutex<State>>);

impl fmt::Debug for FakePlatform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FakePlatform")
  }
}

impl Default for FakePlatform {
  fn default() -> Self {
    Self(Arc::new(Mutex::new(State {
      trusted: true,
      apps: Vec::new(),
      elements: HashMap::new(),
      displays: Vec::new(),
      mouse: None,
      activated: Vec::new(),
      zoom: Some(RecordingZoom::new(ZoomParams {
        scale: 1.0,
        center: Point::ZERO,
        smooth: false,
      })),
    })))
  }
}

impl FakePlatform {
  #[must_use]
  pub(crate) fn trusted(self, trusted: bool) -> Self {
    self.0.lock().trusted = trusted;
    self
  }

  /// Register a running app and its root element (holding `AXWindows` etc).
  #[must_use]
  pub(crate) fn with_app(self, record: AppRecord, element: FakeElement) -> Self {
    {
      let mut state = self.0.lock();
      state.elements.insert(record.pid, element);
      state.apps.push(record);
    }
    self
  }

  #[must_use]
  pub(crate) fn with_display(self, display: Display) -> Self {
    self.0.lock().displays.push(display);
    self
  }

  #[must_use]
  pub(crate) fn with_mouse(self, point: Point) -> Self {
    self.0.lock().mouse = Some(point);
    self
  }

  #[must_use]
  pub(crate) fn without_zoom(self) -> Self {
    self.0.lock().zoom = None;
    self
  }

  pub(crate) fn activated(&self) -> Vec<ProcessId> {
    self.0.lock().activated.clone()
  }

  pub(crate) fn zoom(&self) -> RecordingZoom {
    self.0.lock().zoom.clone().expect("zoom backend removed")
  }
}

impl Platform for FakePlatform {
  type Element = FakeElement;
  type Zoom = RecordingZoom;

  fn has_permissions(&self) -> bool {
    self.0.lock().trusted
  }

  fn running_apps(&self) -> Vec<AppRecord> {
    self.0.lock().apps.clone()
  }

  fn app_element(&self, pid: ProcessId) -> FakeElement {
    self
      .0
      .lock()
      .elements
      .get(&pid)
      .cloned()
      .unwrap_or_else(|| FakeElement::new("detached"))
  }

  fn activate_app(&self, app: &AppRecord) -> MwcResult<()> {
    self.0.lock().activated.push(app.pid);
    Ok(())
  }

  fn displays(&self) -> MwcResult<Vec<Display>> {
    Ok(self.0.lock().displays.clone())
  }

  fn mouse_position(&self) -> Option<Point> {
    self.0.lock().mouse
  }

  fn zoom_backend(&self) -> MwcResult<RecordingZoom> {
    self
      .0
      .lock()
      .zoom
      .clone()
      .ok_or_else(|| crate::types::MwcError::symbol_missing("CGSMainConnectionID"))
  }
}
