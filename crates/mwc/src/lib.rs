/*!
MWC - macOS window control

Displays, running apps and their windows, window move/resize/activate, and
screen zoom, behind one cheaply cloneable handle.

```ignore
use mwc::{AppWindowQuery, Mwc, SetZoom, WindowSelector, ZoomQuery};

let mwc = Mwc::new();

// Windows are addressed by app (name or pid) plus main/index/title
let query = AppWindowQuery::by_name("Terminal").window(WindowSelector::Index(0));
let frame = mwc.window_frame(&query)?;
mwc.activate_window(&query)?;

// Everything with a window, described in parallel
for app in mwc.window_apps()? {
    println!("{} ({} windows)", app.app.name, app.windows.len());
}

// Zoom is session-wide
let state = mwc.zoom(&ZoomQuery::default())?;
mwc.set_zoom(&SetZoom::new(2.0))?;
```

On other targets the crate builds, but every operation fails with
`ErrorKind::NotSupported`.
*/

mod a11y;
mod config;
mod core;
mod describe;
mod platform;
mod resolve;
mod titlebar;
mod zoom;

mod types;
pub use types::*;

pub use crate::a11y::ValueKind;
pub use crate::config::Config;
pub use crate::core::{Mwc, MwcBuilder};
