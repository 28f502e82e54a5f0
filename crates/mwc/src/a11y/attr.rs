/*!
Safe get/set/list wrappers around the element attribute API.

Every read distinguishes three outcomes: no value (`Ok(None)`, which also
covers OS errors), a value of the expected type, and a value of the wrong
type (`Err(TypeMismatch)`). Callers that only care about the happy path
wrap reads in [`lossy`].
*/

use std::collections::VecDeque;

use super::names::attr;
use super::{AttrValue, FromAttr, ValueKind};
use crate::platform::AxElement;
use crate::types::{MwcError, MwcResult, Point, Rect, Size};

fn mismatch<E>(attr: &str, expected: ValueKind, got: &AttrValue<E>) -> MwcError {
  MwcError::type_mismatch(attr, expected, got.kind())
}

/// Read a typed scalar attribute.
pub(crate) fn get_attr<T: FromAttr, E: AxElement>(element: &E, name: &str) -> MwcResult<Option<T>> {
  let Some(value) = element.copy_attr(name) else {
    return Ok(None);
  };
  T::from_attr(value)
    .map(Some)
    .map_err(|got| mismatch(name, T::KIND, &got))
}

/// Read an attribute holding a single element.
pub(crate) fn get_element<E: AxElement>(element: &E, name: &str) -> MwcResult<Option<E>> {
  match element.copy_attr(name) {
    None => Ok(None),
    Some(AttrValue::Element(e)) => Ok(Some(e)),
    Some(other) => Err(mismatch(name, ValueKind::Element, &other)),
  }
}

/// Read an attribute holding an array of elements.
pub(crate) fn get_elements<E: AxElement>(element: &E, name: &str) -> MwcResult<Option<Vec<E>>> {
  let Some(value) = element.copy_attr(name) else {
    return Ok(None);
  };
  value
    .into_elements()
    .map(Some)
    .map_err(|got| mismatch(name, ValueKind::ElementArray, &got))
}

/// Collapse a type mismatch into "no value", logging it.
pub(crate) fn lossy<T>(result: MwcResult<Option<T>>) -> Option<T> {
  match result {
    Ok(value) => value,
    Err(e) => {
      log::warn!("Internal type error: {e}");
      None
    }
  }
}

/// True when the attribute exists and holds at least one value.
pub(crate) fn has_attr<E: AxElement>(element: &E, name: &str) -> bool {
  element.attr_count(name).is_some_and(|n| n > 0)
}

pub(crate) fn list_attrs<E: AxElement>(element: &E) -> Vec<String> {
  element.attr_names()
}

pub(crate) fn list_actions<E: AxElement>(element: &E) -> Vec<String> {
  element.action_names()
}

pub(crate) fn list_param_attrs<E: AxElement>(element: &E) -> Vec<String> {
  element.param_attr_names()
}

/// Write an attribute, turning an OS error code into [`ErrorKind::Accessibility`](crate::ErrorKind::Accessibility).
pub(crate) fn set_attr<E: AxElement>(element: &E, name: &str, value: &AttrValue<E>) -> MwcResult<()> {
  element
    .set_attr(name, value)
    .map_err(|code| MwcError::accessibility(format!("set attr [{name}]"), code))
}

/// Position and size of an element, if both are available.
pub(crate) fn element_rect<E: AxElement>(element: &E) -> Option<Rect> {
  let position: Point = lossy(get_attr(element, attr::POSITION))?;
  let size: Size = lossy(get_attr(element, attr::SIZE))?;
  Some(Rect::new(position, size))
}

/// Match criterion for [`find_by`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum FindCriteria<'a> {
  Role(&'a str),
  Subrole(&'a str),
}

impl FindCriteria<'_> {
  fn matches<E: AxElement>(&self, element: &E) -> bool {
    let (name, wanted) = match self {
      Self::Role(r) => (attr::ROLE, *r),
      Self::Subrole(s) => (attr::SUBROLE, *s),
    };
    lossy(get_attr::<String, _>(element, name)).as_deref() == Some(wanted)
  }
}

/// Breadth-first search for the first descendant matching `criteria`.
///
/// The parent itself is never tested. Each dequeued node's children are all
/// tested before any of them is expanded. At most `limit` nodes are expanded.
pub(crate) fn find_by<E: AxElement>(parent: &E, criteria: FindCriteria<'_>, limit: usize) -> Option<E> {
  let mut queue = VecDeque::from([parent.clone()]);
  let mut expanded = 0;
  while let Some(element) = queue.pop_front() {
    if expanded >= limit {
      log::debug!("find_by: gave up after expanding {expanded} nodes");
      return None;
    }
    expanded += 1;
    let Some(children) = lossy(get_elements(&element, attr::CHILDREN)) else {
      continue;
    };
    for child in children {
      if criteria.matches(&child) {
        return Some(child);
      }
      queue.push_back(child);
    }
  }
  None
}
