/*!
Private window-server zoom calls, resolved at runtime.

None of these are in a public header, so they are looked up with `dlsym`
once per process. A missing symbol fails only the operations that need it.
*/

#![allow(unsafe_code)]

use std::ffi::{c_void, CStr};
use std::sync::OnceLock;

use objc2_core_foundation::CGPoint;

use crate::types::{MwcError, MwcResult, Point};
use crate::zoom::{ZoomBackend, ZoomParams};

type ConnectionId = i32;
type MainConnectionFn = unsafe extern "C" fn() -> ConnectionId;
type SetZoomFn = unsafe extern "C" fn(ConnectionId, *const CGPoint, f64, bool);
type GetZoomFn = unsafe extern "C" fn(ConnectionId, *mut CGPoint, *mut f64, *mut bool);

const MAIN_CONNECTION: &str = "CGSMainConnectionID";
const SET_ZOOM: &str = "CGSSetZoomParameters";
const GET_ZOOM: &str = "CGSGetZoomParameters";

/// Handle over the resolved zoom functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CgsZoom {
  connection: ConnectionId,
  set: Option<SetZoomFn>,
  get: Option<GetZoomFn>,
}

fn lookup(symbol: &CStr) -> Option<*mut c_void> {
  let sym = unsafe {
    let handle = libc::dlopen(std::ptr::null(), libc::RTLD_LAZY);
    if handle.is_null() {
      return None;
    }
    libc::dlsym(handle, symbol.as_ptr())
  };
  (!sym.is_null()).then_some(sym)
}

fn resolve() -> Result<CgsZoom, &'static str> {
  let main = lookup(c"CGSMainConnectionID").ok_or(MAIN_CONNECTION)?;
  let main: MainConnectionFn = unsafe { std::mem::transmute(main) };
  let set = lookup(c"CGSSetZoomParameters")
    .map(|sym| unsafe { std::mem::transmute::<*mut c_void, SetZoomFn>(sym) });
  let get = lookup(c"CGSGetZoomParameters")
    .map(|sym| unsafe { std::mem::transmute::<*mut c_void, GetZoomFn>(sym) });
  let connection = unsafe { main() };
  log::debug!("window server connection {connection}");
  Ok(CgsZoom {
    connection,
    set,
    get,
  })
}

impl CgsZoom {
  pub(super) fn shared() -> MwcResult<Self> {
    static RESOLVED: OnceLock<Result<CgsZoom, &'static str>> = OnceLock::new();
    (*RESOLVED.get_or_init(resolve)).map_err(MwcError::symbol_missing)
  }
}

impl ZoomBackend for CgsZoom {
  fn read(&self) -> MwcResult<ZoomParams> {
    let get = self.get.ok_or_else(|| MwcError::symbol_missing(GET_ZOOM))?;
    let mut center = CGPoint { x: 0.0, y: 0.0 };
    let mut scale = 0.0_f64;
    let mut smooth = false;
    unsafe { get(self.connection, &raw mut center, &raw mut scale, &raw mut smooth) };
    Ok(ZoomParams {
      scale,
      center: Point::new(center.x, center.y),
      smooth,
    })
  }

  fn write(&self, center: Point, scale: f64, smooth: bool) -> MwcResult<()> {
    let set = self.set.ok_or_else(|| MwcError::symbol_missing(SET_ZOOM))?;
    let center = CGPoint {
      x: center.x(),
      y: center.y(),
    };
    unsafe { set(self.connection, &raw const center, scale, smooth) };
    Ok(())
  }
}
