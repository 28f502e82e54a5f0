/*!
Attribute values.

The platform layer converts raw OS values into [`AttrValue`]; typed reads go
through [`FromAttr`] so a present-but-wrong-type value can be told apart
from a missing one.
*/

use crate::types::{Point, Size};
use derive_more::Display;

/// Coarse type of an attribute value, used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueKind {
  #[display("string")]
  String,
  #[display("boolean")]
  Boolean,
  #[display("number")]
  Number,
  #[display("point")]
  Point,
  #[display("size")]
  Size,
  #[display("element")]
  Element,
  #[display("array")]
  Array,
  #[display("element array")]
  ElementArray,
  #[display("unknown")]
  Other,
}

/// Raw attribute value as read from (or written to) an element.
///
/// Generic over the platform's element handle type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AttrValue<E> {
  String(String),
  Boolean(bool),
  Number(f64),
  Point(Point),
  Size(Size),
  Element(E),
  Array(Vec<AttrValue<E>>),
  /// A value the platform layer has no mapping for (description only).
  Other(String),
}

impl<E> AttrValue<E> {
  pub(crate) const fn kind(&self) -> ValueKind {
    match self {
      Self::String(_) => ValueKind::String,
      Self::Boolean(_) => ValueKind::Boolean,
      Self::Number(_) => ValueKind::Number,
      Self::Point(_) => ValueKind::Point,
      Self::Size(_) => ValueKind::Size,
      Self::Element(_) => ValueKind::Element,
      Self::Array(_) => ValueKind::Array,
      Self::Other(_) => ValueKind::Other,
    }
  }

  /// Unwrap an array made only of elements.
  pub(crate) fn into_elements(self) -> Result<Vec<E>, Self> {
    let Self::Array(items) = self else {
      return Err(self);
    };
    if !items.iter().all(|v| matches!(v, Self::Element(_))) {
      return Err(Self::Array(items));
    }
    Ok(
      items
        .into_iter()
        .filter_map(|v| match v {
          Self::Element(e) => Some(e),
          _ => None,
        })
        .collect(),
    )
  }
}

/// Scalar types that can be read out of an [`AttrValue`].
pub(crate) trait FromAttr: Sized {
  const KIND: ValueKind;

  /// Convert, handing the value back on mismatch.
  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>>;
}

impl FromAttr for String {
  const KIND: ValueKind = ValueKind::String;

  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>> {
    match value {
      AttrValue::String(s) => Ok(s),
      other => Err(other),
    }
  }
}

impl FromAttr for bool {
  const KIND: ValueKind = ValueKind::Boolean;

  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>> {
    match value {
      AttrValue::Boolean(b) => Ok(b),
      // Some apps report flags as CFNumber 0/1.
      AttrValue::Number(n) if n == 0.0 || n == 1.0 => Ok(n != 0.0),
      other => Err(other),
    }
  }
}

impl FromAttr for f64 {
  const KIND: ValueKind = ValueKind::Number;

  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>> {
    match value {
      AttrValue::Number(n) => Ok(n),
      other => Err(other),
    }
  }
}

impl FromAttr for Point {
  const KIND: ValueKind = ValueKind::Point;

  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>> {
    match value {
      AttrValue::Point(p) => Ok(p),
      other => Err(other),
    }
  }
}

impl FromAttr for Size {
  const KIND: ValueKind = ValueKind::Size;

  fn from_attr<E>(value: AttrValue<E>) -> Result<Self, AttrValue<E>> {
    match value {
      AttrValue::Size(s) => Ok(s),
      other => Err(other),
    }
  }
}

impl<E> From<&str> for AttrValue<E> {
  fn from(s: &str) -> Self {
    Self::String(s.to_owned())
  }
}

impl<E> From<bool> for AttrValue<E> {
  fn from(b: bool) -> Self {
    Self::Boolean(b)
  }
}

impl<E> From<Point> for AttrValue<E> {
  fn from(p: Point) -> Self {
    Self::Point(p)
  }
}

impl<E> From<Size> for AttrValue<E> {
  fn from(s: Size) -> Self {
    Self::Size(s)
  }
}
