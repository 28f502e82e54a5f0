/*!
Titlebar height estimate.

No public API reports the titlebar height. The close button is exposed by
every app tested so far, and sits vertically centred in the titlebar, so
the height is inferred from its offset.
*/

use crate::a11y::attr::{element_rect, find_by, FindCriteria};
use crate::a11y::names::subrole;
use crate::platform::AxElement;
use crate::types::Rect;

/// Height implied by a close button at `button` inside a window at `window`.
pub(crate) fn height_from_rects(window: Rect, button: Rect) -> f64 {
  (button.position.y() - window.position.y()) * 2.0 + button.size.height()
}

/// Estimated titlebar height in points, 0 when it can't be measured.
pub(crate) fn estimate<E: AxElement>(window: &E, max_height: f64, search_limit: usize) -> f64 {
  let Some(button) = find_by(window, FindCriteria::Subrole(subrole::CLOSE_BUTTON), search_limit) else {
    return 0.0;
  };
  let (Some(window_rect), Some(button_rect)) = (element_rect(window), element_rect(&button)) else {
    return 0.0;
  };
  let height = height_from_rects(window_rect, button_rect);
  if (0.0..max_height).contains(&height) {
    height
  } else {
    log::info!("Oddly sized close button: {button_rect:?} window: {window_rect:?} est-height: {height}");
    0.0
  }
}
