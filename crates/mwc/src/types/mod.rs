/*! Core types for MWC.

Regenerate TypeScript types: `cargo test -p mwc export_bindings`
*/

#![allow(missing_docs)]

mod app;
mod display;
mod error;
mod geometry;
mod ids;
mod query;
mod window;
mod zoom;

pub use app::{AppInfo, WindowApp};
pub use display::Display;
pub use error::{force_backtraces, ErrorKind, MwcError, MwcResult};
pub use geometry::{Point, Rect, Size};
pub use ids::{DisplayId, ProcessId};
pub use query::{
  AppIdentifier, AppQuery, AppSelector, AppWindowQuery, SetWindowFrame, WindowIdentifier,
  WindowSelector,
};
pub use window::{WindowFrame, WindowInfo, WindowInspection};
pub use zoom::{SetZoom, ZoomQuery, ZoomState};
