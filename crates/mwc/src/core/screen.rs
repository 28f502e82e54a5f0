/*! Displays and zoom. */

use super::Engine;
use crate::describe;
use crate::platform::Platform;
use crate::types::{Display, DisplayId, MwcError, MwcResult, SetZoom, ZoomQuery, ZoomState};
use crate::zoom;

impl<P: Platform> Engine<P> {
  pub(crate) fn displays(&self) -> MwcResult<Vec<Display>> {
    self.platform.displays()
  }

  pub(crate) fn main_display(&self) -> MwcResult<Display> {
    describe::main_display(self.platform.displays()?)
  }

  pub(crate) fn active_display(&self) -> MwcResult<Display> {
    describe::display_at(self.platform.displays()?, self.platform.mouse_position())
  }

  /// Height of the menu bar strip on the main display.
  ///
  /// Fails when the visible frame could not be read, rather than reporting 0.
  pub(crate) fn menu_bar_height(&self) -> MwcResult<f64> {
    let main = self.main_display()?;
    if !main.has_screen_details() {
      return Err(MwcError::unavailable("Visible frame"));
    }
    Ok(main.top_inset())
  }

  fn zoom_display(&self, query: &ZoomQuery) -> MwcResult<Option<DisplayId>> {
    match (query.display_id, query.point) {
      (Some(_), Some(_)) => return Err(MwcError::validation("displayId and point are exclusive")),
      (None, None) => return Ok(None),
      _ => {}
    }
    self
      .platform
      .displays()?
      .iter()
      .find(|d| match query.display_id {
        Some(id) => d.id == id,
        None => query.point.is_some_and(|p| d.frame().contains_half_open(p)),
      })
      .map(|d| Some(d.id))
      .ok_or_else(|| MwcError::not_found("Display"))
  }

  /// Session zoom state, tagged with the display the query selects.
  pub(crate) fn zoom(&self, query: &ZoomQuery) -> MwcResult<ZoomState> {
    let display_id = self.zoom_display(query)?;
    let backend = self.platform.zoom_backend()?;
    let mut state = zoom::read_zoom(&backend)?;
    state.display_id = display_id;
    Ok(state)
  }

  pub(crate) fn set_zoom(&self, request: &SetZoom) -> MwcResult<ZoomState> {
    zoom::check_request(request)?;
    let backend = self.platform.zoom_backend()?;
    zoom::apply_zoom(&backend, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;
  use crate::platform::fake::FakePlatform;
  use crate::types::{Point, Size};

  fn display(id: u32, main: bool, x: f64, inset: f64) -> Display {
    Display {
      id: DisplayId(id),
      name: Some(format!("Display {id}")),
      main,
      scale_factor: Some(2.0),
      size: Size::new(1920.0, 1080.0),
      position: Point::new(x, 0.0),
      visible_size: Size::new(1920.0, 1080.0 - inset),
      visible_position: Point::new(x, inset),
    }
  }

  fn engine() -> (Engine<FakePlatform>, FakePlatform) {
    let platform = FakePlatform::default()
      .with_display(display(1, true, 0.0, 25.0))
      .with_display(display(2, false, 1920.0, 0.0))
      .with_mouse(Point::new(2000.0, 500.0));
    (Engine::new(platform.clone(), Config::default()), platform)
  }

  mod displays {
    use super::*;

    #[test]
    fn main_active_and_menu_bar() {
      let (engine, _) = engine();
      assert_eq!(engine.displays().unwrap().len(), 2);
      assert_eq!(engine.main_display().unwrap().id, DisplayId(1));
      assert_eq!(engine.active_display().unwrap().id, DisplayId(2));
      assert_eq!(engine.menu_bar_height().unwrap(), 25.0);
    }

    #[test]
    fn menu_bar_needs_screen_details() {
      let mut main = display(1, true, 0.0, 0.0);
      main.name = None;
      main.scale_factor = None;
      let engine = Engine::new(FakePlatform::default().with_display(main), Config::default());
      let err = engine.menu_bar_height().unwrap_err();
      assert_eq!(err.class(), "MWCError");
      assert_eq!(err.to_string(), "Visible frame unavailable");
    }

    #[test]
    fn shared_edge_belongs_to_the_right_display() {
      let (engine, _) = engine();
      let query = ZoomQuery {
        display_id: None,
        point: Some(Point::new(1920.0, 0.0)),
      };
      assert_eq!(engine.zoom(&query).unwrap().display_id, Some(DisplayId(2)));

      let platform = FakePlatform::default()
        .with_display(display(1, true, 0.0, 25.0))
        .with_display(display(2, false, 1920.0, 0.0))
        .with_mouse(Point::new(1920.0, 500.0));
      let engine = Engine::new(platform, Config::default());
      assert_eq!(engine.active_display().unwrap().id, DisplayId(2));
    }

    #[test]
    fn active_falls_back_to_main_without_mouse() {
      let platform = FakePlatform::default().with_display(display(5, true, 0.0, 25.0));
      let engine = Engine::new(platform, Config::default());
      assert_eq!(engine.active_display().unwrap().id, DisplayId(5));
    }
  }

  mod zoom_state {
    use super::*;

    #[test]
    fn query_selects_display() {
      let (engine, _) = engine();
      let by_id = engine
        .zoom(&ZoomQuery {
          display_id: Some(DisplayId(2)),
          point: None,
        })
        .unwrap();
      assert_eq!(by_id.display_id, Some(DisplayId(2)));
      let by_point = engine
        .zoom(&ZoomQuery {
          display_id: None,
          point: Some(Point::new(10.0, 10.0)),
        })
        .unwrap();
      assert_eq!(by_point.display_id, Some(DisplayId(1)));
      assert_eq!(engine.zoom(&ZoomQuery::default()).unwrap().display_id, None);
    }

    #[test]
    fn unknown_display_is_not_found() {
      let (engine, _) = engine();
      for query in [
        ZoomQuery {
          display_id: Some(DisplayId(99)),
          point: None,
        },
        ZoomQuery {
          display_id: None,
          point: Some(Point::new(-50_000.0, 0.0)),
        },
      ] {
        assert_eq!(engine.zoom(&query).unwrap_err().class(), "NotFoundError");
      }
    }

    #[test]
    fn selector_keys_are_exclusive() {
      let (engine, _) = engine();
      let query = ZoomQuery {
        display_id: Some(DisplayId(1)),
        point: Some(Point::ZERO),
      };
      assert_eq!(engine.zoom(&query).unwrap_err().class(), "ValidationError");
    }

    #[test]
    fn set_goes_through_backend() {
      let (engine, platform) = engine();
      let state = engine.set_zoom(&SetZoom::new(2.0).center(Point::new(100.0, 100.0))).unwrap();
      assert!(state.smooth);
      assert_eq!(platform.zoom().writes().len(), 2);
      assert_eq!(engine.zoom(&ZoomQuery::default()).unwrap().scale, 2.0);
    }

    #[test]
    fn bad_request_wins_over_missing_symbols() {
      let engine = Engine::new(FakePlatform::default().without_zoom(), Config::default());
      let err = engine.set_zoom(&SetZoom::new(-1.0)).unwrap_err();
      assert_eq!(err.class(), "ValidationError");
    }

    #[test]
    fn missing_symbols_surface_as_mwc_error() {
      let platform = FakePlatform::default().without_zoom();
      let engine = Engine::new(platform, Config::default());
      let err = engine.zoom(&ZoomQuery::default()).unwrap_err();
      assert_eq!(err.class(), "MWCError");
      assert_eq!(err.to_string(), "Failed to find CGSMainConnectionID function");
    }
  }
}
