//! Schwarzschild geometry in natural units (G = c = 1, rs = 1).
//!
//! ds² = -(1 - rs/r)dt² + (1 - rs/r)⁻¹dr² + r²(dθ² + sin²θ dφ²)

use std::f64::consts::TAU;

/// Event horizon radius, r = rs.
pub const HORIZON_RADIUS: f64 = 1.0;

/// Photon sphere radius: r = 3/2 * rs.
///
/// Circular orbits at or inside it would need v >= c.
pub const PHOTON_SPHERE_RADIUS: f64 = 1.5;

/// Coordinate speed of a circular orbit of radius `r`: v = 1/√(2(r - 1)).
pub fn circular_orbit_speed(r: f64) -> f64 {
    1.0 / (2.0 * (r - HORIZON_RADIUS)).sqrt()
}

/// Angular velocity of a circular orbit of radius `r`.
pub fn circular_orbit_angular_velocity(r: f64) -> f64 {
    circular_orbit_speed(r) / r
}

/// Proper time needed to go once around a circular orbit of radius `r`.
pub fn circular_orbit_period(r: f64) -> f64 {
    TAU * r / circular_orbit_speed(r)
}

/// Proper time elapsed over the coordinate interval `dt` for an observer at
/// radius `r` moving with speed `v` (special + gravitational dilation):
///
/// dτ = √(dt² (1 - v²) / (1 - rs/r))
pub fn dilated_interval(dt: f64, v: f64, r: f64) -> f64 {
    (dt * dt * (1.0 - v * v) / (1.0 - HORIZON_RADIUS / r)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_speed_matches_known_radius() {
        // r = 11 -> v = 1/sqrt(20)
        assert!((circular_orbit_speed(11.0) - 1.0 / 20.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn photon_sphere_orbit_reaches_light_speed() {
        assert!((circular_orbit_speed(PHOTON_SPHERE_RADIUS) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn period_is_circumference_over_speed() {
        let r = 7.0;
        let expected = TAU * r * (2.0 * (r - 1.0)).sqrt();
        assert!((circular_orbit_period(r) - expected).abs() < 1e-9);
    }

    #[test]
    fn static_observer_far_away_barely_dilates() {
        let dtau = dilated_interval(1.0, 0.0, 1.0e6);
        assert!((dtau - 1.0).abs() < 1e-5);
    }

    #[test]
    fn static_observer_near_horizon_is_stretched() {
        // With v = 0 the factor is 1/sqrt(1 - 1/r) > 1.
        let dtau = dilated_interval(1.0, 0.0, 2.0);
        assert!((dtau - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_interval_stays_zero() {
        assert_eq!(dilated_interval(0.0, 0.3, 11.0), 0.0);
    }
}
