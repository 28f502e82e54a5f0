/*! Opaque element handle with safe accessor methods.

All accessibility FFI is encapsulated here. Values cross the boundary as
[`AttrValue`]s; the rest of the crate never sees a CF type.
*/

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use objc2_application_services::{AXError, AXUIElement, AXValue, AXValueType};
use objc2_core_foundation::{
  CFArray, CFBoolean, CFHash, CFIndex, CFNumber, CFRetained, CFString, CFType, CGPoint, CGSize,
};

use crate::a11y::AttrValue;
use crate::platform::{AxCode, AxElement};
use crate::types::{Point, Size};

// FFI binding for CFEqual (not exposed by objc2-core-foundation)
extern "C" {
  fn CFEqual(cf1: *const c_void, cf2: *const c_void) -> u8;
}

type Value = AttrValue<ElementHandle>;

/// Opaque handle to a UI element. Clone is cheap (reference counted).
#[derive(Clone)]
pub(crate) struct ElementHandle {
  inner: CFRetained<AXUIElement>,
  /// Cached `CFHash` so most inequality checks skip `CFEqual`.
  cached_hash: u64,
}

impl ElementHandle {
  pub(super) fn new(element: CFRetained<AXUIElement>) -> Self {
    let cached_hash = CFHash(Some(&*element)) as u64;
    Self {
      inner: element,
      cached_hash,
    }
  }

  /// Root element for an application process.
  pub(super) fn application(pid: i32) -> Self {
    Self::new(unsafe { AXUIElement::new_application(pid) })
  }

  fn cf_equal(&self, other: &Self) -> bool {
    // as_ptr() yields the CF pointer itself, not the wrapper.
    let self_ptr = CFRetained::as_ptr(&self.inner).as_ptr().cast::<c_void>();
    let other_ptr = CFRetained::as_ptr(&other.inner).as_ptr().cast::<c_void>();
    unsafe { CFEqual(self_ptr, other_ptr) != 0 }
  }

  fn copy_raw(&self, attr: &CFString) -> Option<CFRetained<CFType>> {
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self
        .inner
        .copy_attribute_value(attr, NonNull::new(&raw mut value)?);
      if result != AXError::Success || value.is_null() {
        return None;
      }
      Some(CFRetained::from_raw(NonNull::new_unchecked(value.cast_mut())))
    }
  }

  fn set_raw(&self, attr: &CFString, value: &CFType) -> Result<(), AxCode> {
    let result = unsafe { self.inner.set_attribute_value(attr, value) };
    if result == AXError::Success {
      Ok(())
    } else {
      Err(result.0)
    }
  }

  /// Read a CFArray of CFStrings through one of the `copy_*_names` calls.
  fn copy_names(&self, copy: impl FnOnce(NonNull<*const CFArray>) -> AXError) -> Vec<String> {
    let mut names_ref: *const CFArray<CFString> = std::ptr::null();
    let Some(out) = NonNull::new((&raw mut names_ref).cast::<*const CFArray>()) else {
      return Vec::new();
    };
    if copy(out) != AXError::Success || names_ref.is_null() {
      return Vec::new();
    }
    let names = unsafe {
      CFRetained::<CFArray<CFString>>::from_raw(NonNull::new_unchecked(names_ref.cast_mut()))
    };
    (0..names.len())
      .filter_map(|i| names.get(i))
      .map(|s| s.to_string())
      .collect()
  }
}

/// Convert a CF value into an [`AttrValue`], recursing into arrays.
fn to_attr_value(value: CFRetained<CFType>) -> Value {
  if let Some(s) = value.downcast_ref::<CFString>() {
    return AttrValue::String(s.to_string());
  }
  if let Some(b) = value.downcast_ref::<CFBoolean>() {
    return AttrValue::Boolean(b.as_bool());
  }
  if let Some(n) = value.downcast_ref::<CFNumber>() {
    if let Some(f) = n.as_f64() {
      return AttrValue::Number(f);
    }
  }
  if let Some(ax) = value.downcast_ref::<AXValue>() {
    return from_ax_value(ax);
  }
  let value = match value.downcast::<AXUIElement>() {
    Ok(element) => return AttrValue::Element(ElementHandle::new(element)),
    Err(value) => value,
  };
  match value.downcast::<CFArray>() {
    Ok(array) => {
      // SAFETY: every CFArray element is a CFType.
      let array: CFRetained<CFArray<CFType>> = unsafe { CFRetained::cast_unchecked(array) };
      AttrValue::Array((0..array.len()).filter_map(|i| array.get(i)).map(to_attr_value).collect())
    }
    Err(other) => AttrValue::Other(format!("{other:?}")),
  }
}

fn from_ax_value(ax: &AXValue) -> Value {
  unsafe {
    match ax.r#type() {
      AXValueType::CGPoint => {
        let mut point = CGPoint { x: 0.0, y: 0.0 };
        if let Some(ptr) = NonNull::new((&raw mut point).cast::<c_void>()) {
          if ax.value(AXValueType::CGPoint, ptr) {
            return AttrValue::Point(Point::new(point.x, point.y));
          }
        }
      }
      AXValueType::CGSize => {
        let mut size = CGSize {
          width: 0.0,
          height: 0.0,
        };
        if let Some(ptr) = NonNull::new((&raw mut size).cast::<c_void>()) {
          if ax.value(AXValueType::CGSize, ptr) {
            return AttrValue::Size(Size::new(size.width, size.height));
          }
        }
      }
      _ => {}
    }
  }
  AttrValue::Other(format!("{ax:?}"))
}

fn point_value(p: Point) -> Option<CFRetained<AXValue>> {
  let mut point = CGPoint { x: p.x(), y: p.y() };
  unsafe { AXValue::new(AXValueType::CGPoint, NonNull::new((&raw mut point).cast::<c_void>())?) }
}

fn size_value(s: Size) -> Option<CFRetained<AXValue>> {
  let mut size = CGSize {
    width: s.width(),
    height: s.height(),
  };
  unsafe { AXValue::new(AXValueType::CGSize, NonNull::new((&raw mut size).cast::<c_void>())?) }
}

impl AxElement for ElementHandle {
  fn copy_attr(&self, attr: &str) -> Option<Value> {
    self.copy_raw(&CFString::from_str(attr)).map(to_attr_value)
  }

  fn attr_count(&self, attr: &str) -> Option<usize> {
    let name = CFString::from_str(attr);
    let mut count: CFIndex = 0;
    let result = unsafe {
      self
        .inner
        .attribute_value_count(&name, NonNull::new(&raw mut count)?)
    };
    (result == AXError::Success).then_some(count.max(0) as usize)
  }

  fn attr_names(&self) -> Vec<String> {
    self.copy_names(|out| unsafe { self.inner.copy_attribute_names(out) })
  }

  fn action_names(&self) -> Vec<String> {
    self.copy_names(|out| unsafe { self.inner.copy_action_names(out) })
  }

  fn param_attr_names(&self) -> Vec<String> {
    self.copy_names(|out| unsafe { self.inner.copy_parameterized_attribute_names(out) })
  }

  fn set_attr(&self, attr: &str, value: &Value) -> Result<(), AxCode> {
    let name = CFString::from_str(attr);
    let illegal = AXError::IllegalArgument.0;
    match value {
      AttrValue::String(s) => self.set_raw(&name, &CFString::from_str(s)),
      AttrValue::Boolean(b) => self.set_raw(&name, CFBoolean::new(*b)),
      AttrValue::Number(n) => self.set_raw(&name, &CFNumber::new_f64(*n)),
      AttrValue::Point(p) => self.set_raw(&name, &point_value(*p).ok_or(illegal)?),
      AttrValue::Size(s) => self.set_raw(&name, &size_value(*s).ok_or(illegal)?),
      AttrValue::Element(e) => self.set_raw(&name, &e.inner),
      AttrValue::Array(_) | AttrValue::Other(_) => Err(illegal),
    }
  }

  fn perform_action(&self, action: &str) -> Result<(), AxCode> {
    let name = CFString::from_str(action);
    let result = unsafe { self.inner.perform_action(&name) };
    if result == AXError::Success {
      Ok(())
    } else {
      Err(result.0)
    }
  }
}

impl fmt::Debug for ElementHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ElementHandle({:#x})", self.cached_hash)
  }
}

impl PartialEq for ElementHandle {
  fn eq(&self, other: &Self) -> bool {
    self.cached_hash == other.cached_hash && self.cf_equal(other)
  }
}

impl Eq for ElementHandle {}

unsafe impl Send for ElementHandle {}
unsafe impl Sync for ElementHandle {}
