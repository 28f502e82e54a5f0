/*!
Platform abstraction layer.

`CurrentPlatform` is the implementation for the build target. Core code is
generic over [`Platform`] so tests can drive it with the in-memory fake.
*/

mod traits;

pub(crate) use traits::{AppRecord, AxCode, AxElement, Platform};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub(crate) use macos::MacOS as CurrentPlatform;

#[cfg(not(target_os = "macos"))]
mod unsupported;
#[cfg(not(target_os = "macos"))]
pub(crate) use unsupported::Unsupported as CurrentPlatform;

#[cfg(test)]
pub(crate) mod fake;
