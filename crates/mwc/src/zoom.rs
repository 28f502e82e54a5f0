/*!
Screen magnification controller.

The OS exposes zoom only through a pair of private window-server calls.
[`ZoomBackend`] is the seam over them; the controller functions here own
validation, rounding and the resend sequence.
*/

use crate::types::{MwcError, MwcResult, Point, SetZoom, ZoomState};

/// Raw zoom parameters as the window server reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ZoomParams {
  pub scale: f64,
  pub center: Point,
  pub smooth: bool,
}

/// Read/write access to the session zoom parameters.
pub(crate) trait ZoomBackend: Send + Sync {
  fn read(&self) -> MwcResult<ZoomParams>;

  fn write(&self, center: Point, scale: f64, smooth: bool) -> MwcResult<()>;
}

pub(crate) fn read_zoom<Z: ZoomBackend>(backend: &Z) -> MwcResult<ZoomState> {
  let params = backend.read()?;
  Ok(ZoomState {
    scale: params.scale,
    center: params.center,
    smooth: params.smooth,
    display_id: None,
  })
}

/// Reject requests the window server would misbehave on.
pub(crate) fn check_request(request: &SetZoom) -> MwcResult<()> {
  if !request.scale.is_finite() || request.scale <= 0.0 {
    return Err(MwcError::validation("scale must be a positive number"));
  }
  if request.center.is_some_and(|c| !c.is_finite()) {
    return Err(MwcError::validation("center must be finite"));
  }
  Ok(())
}

/// Apply a zoom request, returning the state that was written.
pub(crate) fn apply_zoom<Z: ZoomBackend>(backend: &Z, request: &SetZoom) -> MwcResult<ZoomState> {
  check_request(request)?;
  let scale = request.scale;
  let center = match request.center {
    // The window server floors coordinates.
    Some(c) => c.rounded(),
    None => backend.read()?.center,
  };
  let smooth = request.smooth.unwrap_or(scale > 1.0);

  // Writing the same parameters the built-in zoom last set is ignored, so
  // dirty the state with the inverted smooth flag first.
  backend.write(center, scale, !smooth)?;
  backend.write(center, scale, smooth)?;
  log::debug!("zoom set: scale={scale} center={center:?} smooth={smooth}");

  Ok(ZoomState {
    scale,
    center,
    smooth,
    display_id: None,
  })
}
