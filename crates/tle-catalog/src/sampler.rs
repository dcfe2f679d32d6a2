//! Uniform element sampling inside a category's windows

use crate::categories::{Category, ElementRange, ANGLE_RANGE_DEG};
use crate::Result;
use orbital_mechanics::OrbitShape;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One object's drawn elements plus the derived mean motion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampledElements {
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub altitude_km: f64,
    pub eccentricity: f64,
    pub arg_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    /// Revolutions per day, from `altitude_km`
    pub mean_motion: f64,
    /// May be negative: eccentricity and altitude are independent draws
    pub perigee_altitude_km: f64,
}

impl SampledElements {
    pub fn is_subsurface(&self) -> bool {
        self.perigee_altitude_km < 0.0
    }

    /// Every drawn value inside the category windows (angles within [0, 360])
    pub fn within(&self, category: &Category) -> bool {
        category.inclination_deg.contains(self.inclination_deg)
            && category.altitude_km.contains(self.altitude_km)
            && category.eccentricity.contains(self.eccentricity)
            && ANGLE_RANGE_DEG.contains(self.raan_deg)
            && ANGLE_RANGE_DEG.contains(self.arg_perigee_deg)
            && ANGLE_RANGE_DEG.contains(self.mean_anomaly_deg)
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: ElementRange) -> f64 {
    if range.is_fixed() {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// Draw one object's elements.
///
/// Draw order is inclination, RAAN, altitude, eccentricity, argument of
/// perigee, mean anomaly; a seeded generator reproduces the same sequence.
pub fn sample_elements<R: Rng + ?Sized>(rng: &mut R, category: &Category) -> Result<SampledElements> {
    let inclination_deg = draw(rng, category.inclination_deg);
    let raan_deg = draw(rng, ANGLE_RANGE_DEG);
    let altitude_km = draw(rng, category.altitude_km);
    let eccentricity = draw(rng, category.eccentricity);
    let arg_perigee_deg = draw(rng, ANGLE_RANGE_DEG);
    let mean_anomaly_deg = draw(rng, ANGLE_RANGE_DEG);

    let shape = OrbitShape::from_altitude(altitude_km, eccentricity)?;

    Ok(SampledElements {
        inclination_deg,
        raan_deg,
        altitude_km,
        eccentricity,
        arg_perigee_deg,
        mean_anomaly_deg,
        mean_motion: shape.mean_motion_rev_day,
        perigee_altitude_km: shape.perigee_altitude_km,
    })
}
