//! Keeps the observer and the controller's view transform consistent.
//!
//! Static mode: the view is authoritative and the observer is placed on a
//! sphere of the configured distance, looking at the body.
//! Orbiting mode: the integrator owns position and velocity; only the
//! orientation is rebuilt, by expressing the user's look direction in the
//! orbital frame.

use glam::DVec3;

use crate::controls::ViewTransform;
use crate::error::ParameterError;
use crate::observer::Observer;
use crate::params::ObserverMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    Updated,
    /// A basis could not be built this tick; the orientation was left alone.
    Skipped(ParameterError),
}

pub fn reconcile(observer: &mut Observer, view: &ViewTransform, mode: &ObserverMode) -> Reconciled {
    let result = match *mode {
        ObserverMode::Static { distance } => place_from_view(observer, view, distance),
        ObserverMode::Orbiting { .. } => follow_orbit(observer, view),
    };
    match result {
        Ok(()) => Reconciled::Updated,
        Err(err) => {
            log::debug!("skipping camera reconciliation: {err}");
            Reconciled::Skipped(err)
        }
    }
}

fn place_from_view(
    observer: &mut Observer,
    view: &ViewTransform,
    distance: f64,
) -> Result<(), ParameterError> {
    let look = view.look_basis()?;
    observer.orientation = look;
    observer.position = -look.y_axis * distance;
    observer.velocity = DVec3::ZERO;
    Ok(())
}

fn follow_orbit(observer: &mut Observer, view: &ViewTransform) -> Result<(), ParameterError> {
    let look = view.look_basis()?;
    let frame = observer.orbital_frame()?;
    observer.orientation = frame * look;
    Ok(())
}
