//! Orbital Mechanics Library
//!
//! Two-body relations used by the synthetic catalog generator: altitude to
//! mean motion, orbital period and perigee altitude over a spherical Earth.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitalError {
    #[error("Invalid altitude: {0} km")]
    InvalidAltitude(f64),
    #[error("Invalid eccentricity: {0}")]
    InvalidEccentricity(f64),
}

pub type Result<T> = std::result::Result<T, OrbitalError>;

pub mod constants {
    /// μ_Earth in km³/s²
    pub const MU_EARTH: f64 = 398_600.4418;

    /// Mean (spherical) Earth radius in km
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Geostationary altitude above the mean radius
    pub const GEO_ALTITUDE_KM: f64 = 35_786.0;
}

/// Orbit shape derived from a sampled altitude and eccentricity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrbitShape {
    pub mean_motion_rev_day: f64,
    pub perigee_altitude_km: f64,
}

impl OrbitShape {
    pub fn from_altitude(altitude_km: f64, eccentricity: f64) -> Result<Self> {
        Ok(Self {
            mean_motion_rev_day: kepler::mean_motion_from_altitude(altitude_km)?,
            perigee_altitude_km: kepler::perigee_altitude(altitude_km, eccentricity)?,
        })
    }

    /// Perigee below the surface of the reference sphere
    pub fn is_subsurface(&self) -> bool {
        self.perigee_altitude_km < 0.0
    }
}

pub mod kepler {
    use super::constants::{EARTH_RADIUS_KM, MU_EARTH, SECONDS_PER_DAY};
    use super::*;
    use std::f64::consts::PI;

    /// Semi-major axis treating altitude as height above the mean radius
    pub fn semi_major_axis(altitude_km: f64) -> Result<f64> {
        let r = EARTH_RADIUS_KM + altitude_km;
        if !altitude_km.is_finite() || r <= 0.0 {
            return Err(OrbitalError::InvalidAltitude(altitude_km));
        }
        Ok(r)
    }

    /// n = sqrt(μ/r³) in rad/s, converted to rev/day
    pub fn mean_motion_from_altitude(altitude_km: f64) -> Result<f64> {
        let r = semi_major_axis(altitude_km)?;
        let n_rad_s = (MU_EARTH / r.powi(3)).sqrt();
        Ok(n_rad_s * SECONDS_PER_DAY / (2.0 * PI))
    }

    /// T = 2π * sqrt(r³/μ)
    pub fn period_from_altitude(altitude_km: f64) -> Result<f64> {
        let r = semi_major_axis(altitude_km)?;
        Ok(2.0 * PI * (r.powi(3) / MU_EARTH).sqrt())
    }

    /// Perigee height for an orbit whose semi-major axis comes from `altitude_km`.
    /// Negative values are returned as-is.
    pub fn perigee_altitude(altitude_km: f64, eccentricity: f64) -> Result<f64> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitalError::InvalidEccentricity(eccentricity));
        }
        let r = semi_major_axis(altitude_km)?;
        Ok(r * (1.0 - eccentricity) - EARTH_RADIUS_KM)
    }
}

#[cfg(test)]
mod tests {
    use super::constants::*;
    use super::kepler::*;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_geostationary_mean_motion() {
        let mm = mean_motion_from_altitude(GEO_ALTITUDE_KM).unwrap();
        assert!((mm - 1.0027).abs() < 1e-3, "GEO mean motion {} not ~1.0027", mm);
    }

    #[test]
    fn test_leo_mean_motion() {
        // ISS-like altitude: ~15.5 rev/day
        let mm = mean_motion_from_altitude(420.0).unwrap();
        assert!(mm > 15.3 && mm < 15.7, "LEO mean motion {} out of range", mm);
    }

    #[test]
    fn test_period_matches_mean_motion() {
        let alt = 10_500.0;
        let period = period_from_altitude(alt).unwrap();
        let mm = mean_motion_from_altitude(alt).unwrap();
        assert!((period * mm - SECONDS_PER_DAY).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_altitude() {
        assert_eq!(
            semi_major_axis(-7000.0),
            Err(OrbitalError::InvalidAltitude(-7000.0))
        );
        assert!(mean_motion_from_altitude(f64::NAN).is_err());
    }

    #[test]
    fn test_subsurface_perigee_is_reported_not_clamped() {
        // GTO-style draw: low altitude with high eccentricity
        let shape = OrbitShape::from_altitude(200.0, 0.73).unwrap();
        assert!(shape.is_subsurface());
        assert!(shape.perigee_altitude_km < -4000.0);
    }

    #[test]
    fn test_perigee_rejects_open_orbits() {
        assert!(perigee_altitude(500.0, 1.0).is_err());
        assert!(perigee_altitude(500.0, -0.1).is_err());
    }

    proptest! {
        #[test]
        fn mean_motion_is_deterministic(alt in 100.0f64..60_000.0) {
            let a = mean_motion_from_altitude(alt).unwrap();
            let b = mean_motion_from_altitude(alt).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn mean_motion_decreases_with_altitude(alt in 100.0f64..60_000.0, step in 1.0f64..1_000.0) {
            let low = mean_motion_from_altitude(alt).unwrap();
            let high = mean_motion_from_altitude(alt + step).unwrap();
            prop_assert!(high < low);
        }

        #[test]
        fn circular_perigee_equals_altitude(alt in 100.0f64..60_000.0) {
            let perigee = perigee_altitude(alt, 0.0).unwrap();
            prop_assert!((perigee - alt).abs() < 1e-9);
        }
    }
}
