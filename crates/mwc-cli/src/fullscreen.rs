//! Fit a window under the menu bar, then zoom until its content fills the screen.

use mwc::{Point, Size};

/// Used when the titlebar probe finds nothing.
pub(crate) const FALLBACK_TITLEBAR: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Plan {
  pub window_size: Size,
  pub window_position: Point,
  pub zoom: f64,
  pub zoom_center: Point,
}

/// Layout for a `screen`-sized main display with a `menu`-high menu bar.
///
/// The window is scaled so that, once zoomed by `1 / scale` around the
/// bottom-left corner, its titlebar and the menu bar leave the screen.
pub(crate) fn plan(screen: Size, menu: f64, titlebar: f64) -> Plan {
  let titlebar = if titlebar > 0.0 { titlebar } else { FALLBACK_TITLEBAR };
  let height = screen.height();
  let scale = (height - menu - titlebar) / height;
  Plan {
    window_size: Size::new(screen.width() * scale, height - menu),
    window_position: Point::new(0.0, menu),
    zoom: 1.0 / scale,
    zoom_center: Point::new(0.0, height),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn laptop_display() {
    let p = plan(Size::new(1512.0, 982.0), 37.0, 28.0);
    let scale = (982.0 - 37.0 - 28.0) / 982.0;
    assert_eq!(p.window_position, Point::new(0.0, 37.0));
    assert_eq!(p.window_size, Size::new(1512.0 * scale, 945.0));
    assert!((p.zoom - 1.0 / scale).abs() < 1e-12);
    assert_eq!(p.zoom_center, Point::new(0.0, 982.0));
  }

  #[test]
  fn zero_titlebar_uses_fallback() {
    let screen = Size::new(1920.0, 1080.0);
    assert_eq!(plan(screen, 25.0, 0.0), plan(screen, 25.0, FALLBACK_TITLEBAR));
    assert_ne!(plan(screen, 25.0, 40.0), plan(screen, 25.0, FALLBACK_TITLEBAR));
  }

  #[test]
  fn zoom_always_magnifies() {
    for menu in [0.0, 24.0, 37.0] {
      assert!(plan(Size::new(1920.0, 1080.0), menu, 28.0).zoom > 1.0);
    }
  }
}
