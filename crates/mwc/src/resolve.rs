/*!
Resolve validated app/window selectors against the running system.
*/

use crate::a11y::attr::{get_attr, get_element, get_elements, lossy};
use crate::a11y::names::attr;
use crate::platform::{AppRecord, AxElement, Platform};
use crate::types::{AppSelector, MwcError, MwcResult, WindowSelector};

/// First running app matching the selector.
pub(crate) fn find_app<P: Platform>(platform: &P, selector: &AppSelector) -> MwcResult<AppRecord> {
  platform
    .running_apps()
    .into_iter()
    .find(|app| match selector {
      AppSelector::Name(name) => app.name.as_deref() == Some(name.as_str()),
      AppSelector::Pid(pid) => app.pid == *pid,
    })
    .ok_or_else(|| MwcError::not_found("App"))
}

fn windows_of<E: AxElement>(app: &E) -> Vec<E> {
  lossy(get_elements(app, attr::WINDOWS)).unwrap_or_default()
}

/// Window of `app` matching the selector.
pub(crate) fn find_window<E: AxElement>(app: &E, selector: &WindowSelector) -> MwcResult<E> {
  let window = match selector {
    WindowSelector::Main => match get_element(app, attr::MAIN_WINDOW)? {
      Some(main) => Some(main),
      // Some apps have windows but none flagged main.
      None => windows_of(app).into_iter().next(),
    },
    WindowSelector::Index(index) => windows_of(app).into_iter().nth(*index),
    WindowSelector::Title(title) => windows_of(app).into_iter().find(|w| {
      lossy(get_attr::<String, _>(w, attr::TITLE)).as_deref() == Some(title.as_str())
    }),
  };
  window.ok_or_else(|| MwcError::not_found("Window"))
}

/// Resolve both halves of a query.
pub(crate) fn find_app_window<P: Platform>(
  platform: &P,
  app: &AppSelector,
  window: &WindowSelector,
) -> MwcResult<(AppRecord, P::Element)> {
  let record = find_app(platform, app)?;
  let app_element = platform.app_element(record.pid);
  let window = find_window(&app_element, window)?;
  Ok((record, window))
}
