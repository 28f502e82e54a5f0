/*!
Serializable snapshots of apps, windows and displays.
*/

use chrono::{DateTime, SecondsFormat, Utc};
use rayon::prelude::*;

use crate::a11y::attr::{
  element_rect, find_by, get_attr, get_element, get_elements, has_attr, list_actions, list_attrs,
  list_param_attrs, lossy, FindCriteria,
};
use crate::a11y::names::{attr, role};
use crate::config::Config;
use crate::platform::{AppRecord, AxElement, Platform};
use crate::titlebar;
use crate::types::{
  AppInfo, Display, MwcError, MwcResult, Point, Size, WindowApp, WindowFrame, WindowInfo,
  WindowInspection,
};

/// ISO-8601 (UTC, milliseconds) from seconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn format_launch_date(epoch_secs: f64) -> Option<String> {
  if !epoch_secs.is_finite() {
    return None;
  }
  let millis = (epoch_secs * 1000.0).round() as i64;
  DateTime::<Utc>::from_timestamp_millis(millis).map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub(crate) fn app_info(record: &AppRecord) -> AppInfo {
  AppInfo {
    name: record.name.clone().unwrap_or_default(),
    pid: record.pid,
    active: record.active,
    hidden: record.hidden,
    bundle_ident: record.bundle_id.clone(),
    bundle_url: record.bundle_url.clone(),
    exec_url: record.exec_url.clone(),
    launch_date: record.launch_time.and_then(format_launch_date),
  }
}

/// Apps eligible for listing: finished launching and not ignored.
pub(crate) fn listed_apps<P: Platform>(platform: &P, config: &Config) -> Vec<AppRecord> {
  platform
    .running_apps()
    .into_iter()
    .filter(|app| app.finished_launching && !config.is_ignored(app.bundle_id.as_deref()))
    .collect()
}

pub(crate) fn describe_window<E: AxElement>(window: &E, focused: Option<&E>, config: &Config) -> WindowInfo {
  WindowInfo {
    ident: lossy(get_attr(window, attr::IDENTIFIER)),
    title: lossy(get_attr(window, attr::TITLE)),
    titlebar_height_estimate: titlebar::estimate(window, config.titlebar_max_height, config.search_limit),
    focused: focused.is_some_and(|f| f == window),
    minimized: lossy(get_attr(window, attr::MINIMIZED)).unwrap_or(false),
    size: lossy(get_attr(window, attr::SIZE)).unwrap_or(Size::ZERO),
    position: lossy(get_attr(window, attr::POSITION)).unwrap_or(Point::ZERO),
  }
}

/// Describe every window of an app. The focused window is only looked up
/// for the active app.
pub(crate) fn describe_windows<P: Platform>(platform: &P, record: &AppRecord, config: &Config) -> Vec<WindowInfo> {
  let app = platform.app_element(record.pid);
  let windows = lossy(get_elements(&app, attr::WINDOWS)).unwrap_or_default();
  if windows.is_empty() {
    return Vec::new();
  }
  let focused = if record.active {
    lossy(get_element(&app, attr::FOCUSED_WINDOW))
  } else {
    None
  };
  windows
    .iter()
    .map(|w| describe_window(w, focused.as_ref(), config))
    .collect()
}

/// All listed apps that own at least one window, scanned in parallel.
pub(crate) fn window_apps<P: Platform>(platform: &P, config: &Config) -> Vec<WindowApp> {
  listed_apps(platform, config)
    .par_iter()
    .filter_map(|record| {
      let windows = describe_windows(platform, record, config);
      if windows.is_empty() {
        None
      } else {
        Some(WindowApp {
          app: app_info(record),
          windows,
        })
      }
    })
    .collect()
}

pub(crate) fn inspect_window<E: AxElement>(window: &E, config: &Config) -> WindowInspection {
  let toolbar = find_by(window, FindCriteria::Role(role::TOOLBAR), config.search_limit)
    .and_then(|t| element_rect(&t))
    .map(|r| WindowFrame {
      size: r.size,
      position: r.position,
    });
  WindowInspection {
    role: lossy(get_attr(window, attr::ROLE)),
    subrole: lossy(get_attr(window, attr::SUBROLE)),
    title: lossy(get_attr(window, attr::TITLE)),
    attributes: list_attrs(window),
    actions: list_actions(window),
    parameterized_attributes: list_param_attrs(window),
    has_children: has_attr(window, attr::CHILDREN),
    titlebar_height_estimate: titlebar::estimate(window, config.titlebar_max_height, config.search_limit),
    toolbar,
  }
}

pub(crate) fn main_display(displays: Vec<Display>) -> MwcResult<Display> {
  displays
    .into_iter()
    .find(|d| d.main)
    .ok_or_else(|| MwcError::unavailable("Main display"))
}

/// Display under `point`, falling back to the main display.
pub(crate) fn display_at(displays: Vec<Display>, point: Option<Point>) -> MwcResult<Display> {
  if let Some(point) = point {
    if let Some(d) = displays.iter().find(|d| d.frame().contains_half_open(point)) {
      return Ok(d.clone());
    }
  }
  main_display(displays)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::a11y::AttrValue;
  use crate::platform::fake::{self, FakeElement, FakePlatform};
  use crate::types::{DisplayId, ProcessId, Rect};

  fn display(id: u32, main: bool, x: f64) -> Display {
    Display {
      id: DisplayId(id),
      name: None,
      main,
      scale_factor: Some(2.0),
      size: Size::new(1000.0, 800.0),
      position: Point::new(x, 0.0),
      visible_size: Size::new(1000.0, 775.0),
      visible_position: Point::new(x, 25.0),
    }
  }

  mod apps {
    use super::*;

    #[test]
    fn launch_date_is_iso_millis() {
      assert_eq!(
        format_launch_date(1_700_000_000.1234).as_deref(),
        Some("2023-11-14T22:13:20.123Z")
      );
      assert_eq!(format_launch_date(f64::NAN), None);
    }

    #[test]
    fn nullable_fields_serialize_as_null() {
      let info = app_info(&AppRecord {
        pid: ProcessId(5),
        ..AppRecord::default()
      });
      let value = serde_json::to_value(info).unwrap();
      assert_eq!(value["name"], "");
      assert!(value["bundleURL"].is_null());
      assert!(value["execURL"].is_null());
      assert!(value["launchDate"].is_null());
    }

    #[test]
    fn listing_skips_ignored_and_launching() {
      let mut launching = fake::app(3, "Booting");
      launching.finished_launching = false;
      let mut webkit = fake::app(4, "WebContent");
      webkit.bundle_id = Some("com.apple.WebKit.WebContent".into());
      let platform = FakePlatform::default()
        .with_app(fake::app(1, "Mail"), FakeElement::new("Mail"))
        .with_app(launching, FakeElement::new("Booting"))
        .with_app(webkit, FakeElement::new("WebContent"));
      let names: Vec<_> = listed_apps(&platform, &Config::default())
        .into_iter()
        .filter_map(|a| a.name)
        .collect();
      assert_eq!(names, vec!["Mail".to_owned()]);
    }
  }

  mod windows {
    use super::*;

    fn mail(active: bool) -> FakePlatform {
      let inbox = fake::window("Inbox", Rect::from_xywh(10.0, 20.0, 300.0, 200.0))
        .with(attr::IDENTIFIER, AttrValue::from("main"))
        .with(attr::MINIMIZED, AttrValue::from(false));
      let compose = fake::window("Compose", Rect::from_xywh(50.0, 60.0, 100.0, 100.0));
      let app = FakeElement::new("Mail")
        .with_elements(attr::WINDOWS, vec![inbox, compose.clone()])
        .with(attr::FOCUSED_WINDOW, AttrValue::Element(compose));
      let mut record = fake::app(1, "Mail");
      record.active = active;
      FakePlatform::default().with_app(record, app)
    }

    #[test]
    fn focused_only_for_active_app() {
      let config = Config::default();
      for active in [true, false] {
        let platform = mail(active);
        let record = platform.running_apps().remove(0);
        let windows = describe_windows(&platform, &record, &config);
        assert_eq!(windows.len(), 2);
        assert!(!windows[0].focused);
        assert_eq!(windows[1].focused, active);
      }
    }

    #[test]
    fn snapshot_fields() {
      let platform = mail(true);
      let record = platform.running_apps().remove(0);
      let inbox = describe_windows(&platform, &record, &Config::default()).remove(0);
      assert_eq!(inbox.ident.as_deref(), Some("main"));
      assert_eq!(inbox.title.as_deref(), Some("Inbox"));
      assert_eq!(inbox.position, Point::new(10.0, 20.0));
      assert_eq!(inbox.size, Size::new(300.0, 200.0));
      assert!(!inbox.minimized);
      assert_eq!(inbox.titlebar_height_estimate, 0.0);
    }

    #[test]
    fn missing_geometry_defaults_to_zero() {
      let bare = FakeElement::new("bare");
      let info = describe_window(&bare, None, &Config::default());
      assert_eq!(info.size, Size::ZERO);
      assert_eq!(info.position, Point::ZERO);
      assert_eq!(info.title, None);
    }

    #[test]
    fn window_apps_keep_order_and_drop_windowless() {
      let mut platform = FakePlatform::default();
      for pid in 1..=8 {
        let name = format!("App{pid}");
        let app = if pid % 2 == 0 {
          FakeElement::new(&name).with_elements(
            attr::WINDOWS,
            vec![fake::window(&name, Rect::from_xywh(0.0, 0.0, 10.0, 10.0))],
          )
        } else {
          FakeElement::new(&name)
        };
        platform = platform.with_app(fake::app(pid, &name), app);
      }
      let pids: Vec<_> = window_apps(&platform, &Config::default())
        .into_iter()
        .map(|w| w.app.pid.0)
        .collect();
      assert_eq!(pids, vec![2, 4, 6, 8]);
    }

    #[test]
    fn inspection_finds_toolbar() {
      let toolbar = FakeElement::new("toolbar")
        .with(attr::ROLE, AttrValue::from(role::TOOLBAR))
        .with_rect(Rect::from_xywh(0.0, 28.0, 800.0, 40.0));
      let window = fake::window("w", Rect::from_xywh(0.0, 0.0, 800.0, 600.0))
        .with(attr::ROLE, AttrValue::from("AXWindow"))
        .with_children(vec![toolbar]);
      let info = inspect_window(&window, &Config::default());
      assert_eq!(info.role.as_deref(), Some("AXWindow"));
      assert!(info.has_children);
      assert_eq!(info.actions, vec!["AXRaise".to_owned()]);
      assert_eq!(
        info.toolbar,
        Some(WindowFrame {
          size: Size::new(800.0, 40.0),
          position: Point::new(0.0, 28.0),
        })
      );
    }
  }

  mod displays {
    use super::*;

    #[test]
    fn main_display_is_flagged_one() {
      let d = main_display(vec![display(2, false, 1000.0), display(1, true, 0.0)]).unwrap();
      assert_eq!(d.id, DisplayId(1));
    }

    #[test]
    fn no_main_display_is_unavailable() {
      let err = main_display(Vec::new()).unwrap_err();
      assert_eq!(err.to_string(), "Main display unavailable");
    }

    #[test]
    fn display_under_point_or_main() {
      let displays = vec![display(1, true, 0.0), display(2, false, 1000.0)];
      let at = |p| display_at(displays.clone(), p).unwrap().id;
      assert_eq!(at(Some(Point::new(1500.0, 10.0))), DisplayId(2));
      assert_eq!(at(Some(Point::new(5000.0, 10.0))), DisplayId(1));
      assert_eq!(at(None), DisplayId(1));
    }

    #[test]
    fn cursor_on_shared_edge_picks_right_display() {
      let displays = vec![display(1, true, 0.0), display(2, false, 1000.0)];
      let at = |p| display_at(displays.clone(), p).unwrap().id;
      assert_eq!(at(Some(Point::new(1000.0, 400.0))), DisplayId(2));
      assert_eq!(at(Some(Point::new(999.5, 400.0))), DisplayId(1));
    }
  }
}
