/*!
Display enumeration.

Bounds come from CoreGraphics (global, top-left origin). `NSScreen` adds
the visible frame, scale and name when we are on the main thread; its
frames are bottom-left relative to the primary screen and get flipped.
*/

#![allow(unsafe_code)]

use std::collections::HashMap;

use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;
use objc2_core_graphics::{
  CGDirectDisplayID, CGDisplayBounds, CGError, CGEvent, CGEventSource, CGEventSourceStateID,
  CGGetActiveDisplayList, CGMainDisplayID,
};
use objc2_foundation::{NSNumber, NSRect, NSString};

use crate::types::{Display, DisplayId, MwcError, MwcResult, Point, Size};

const MAX_DISPLAYS: u32 = 32;

/// What `NSScreen` knows about a display.
struct ScreenInfo {
  name: Option<String>,
  scale_factor: f64,
  /// Visible frame, already in top-left coordinates.
  visible_position: Point,
  visible_size: Size,
}

fn active_display_ids() -> MwcResult<Vec<CGDirectDisplayID>> {
  let mut ids = [0 as CGDirectDisplayID; MAX_DISPLAYS as usize];
  let mut count: u32 = 0;
  let err = unsafe { CGGetActiveDisplayList(MAX_DISPLAYS, ids.as_mut_ptr(), &raw mut count) };
  if err != CGError::Success {
    return Err(MwcError::internal(format!("CGGetActiveDisplayList failed: {}", err.0)));
  }
  Ok(ids.into_iter().take(count as usize).collect())
}

fn flip(frame: NSRect, primary_height: f64) -> (Point, Size) {
  let y = primary_height - (frame.origin.y + frame.size.height);
  (
    Point::new(frame.origin.x, y),
    Size::new(frame.size.width, frame.size.height),
  )
}

fn screen_infos(mtm: MainThreadMarker) -> HashMap<CGDirectDisplayID, ScreenInfo> {
  let screens = NSScreen::screens(mtm);
  let Some(primary) = screens.firstObject() else {
    return HashMap::new();
  };
  let primary_height = primary.frame().size.height;
  let number_key = NSString::from_str("NSScreenNumber");

  screens
    .iter()
    .filter_map(|screen| {
      let number = screen.deviceDescription().objectForKey(&number_key)?;
      let id = number.downcast_ref::<NSNumber>()?.unsignedIntValue();
      let (visible_position, visible_size) = flip(screen.visibleFrame(), primary_height);
      let info = ScreenInfo {
        name: Some(screen.localizedName().to_string()),
        scale_factor: screen.backingScaleFactor(),
        visible_position,
        visible_size,
      };
      Some((id, info))
    })
    .collect()
}

/// Every active display, main display flagged.
pub(crate) fn displays() -> MwcResult<Vec<Display>> {
  let ids = active_display_ids()?;
  if ids.is_empty() {
    return Err(MwcError::unavailable("Displays".into()));
  }
  let main_id = CGMainDisplayID();
  let mut screens = match MainThreadMarker::new() {
    Some(mtm) => screen_infos(mtm),
    None => {
      log::debug!("[display] off the main thread, screen details unavailable");
      HashMap::new()
    }
  };

  Ok(
    ids
      .into_iter()
      .map(|id| {
        let bounds = CGDisplayBounds(id);
        let position = Point::new(bounds.origin.x, bounds.origin.y);
        let size = Size::new(bounds.size.width, bounds.size.height);
        let screen = screens.remove(&id);
        Display {
          id: DisplayId(id),
          name: screen.as_ref().and_then(|s| s.name.clone()),
          main: id == main_id,
          scale_factor: screen.as_ref().map(|s| s.scale_factor),
          size,
          position,
          visible_size: screen.as_ref().map_or(size, |s| s.visible_size),
          visible_position: screen.as_ref().map_or(position, |s| s.visible_position),
        }
      })
      .collect(),
  )
}

/// Cursor location, same coordinate space as display bounds.
pub(crate) fn cursor() -> Option<Point> {
  let event = CGEvent::new(CGEventSource::new(CGEventSourceStateID::CombinedSessionState).as_deref())?;
  let at = CGEvent::location(Some(&event));
  Some(Point::new(at.x, at.y))
}
