//! Orbital regime tables for satellites and debris
//!
//! Each category fixes the inclination, altitude and eccentricity windows a
//! group of objects is drawn from. Counts are part of the table, not derived
//! from the requested total.

use serde::{Deserialize, Serialize};

/// Inclusive [min, max] window for one orbital element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRange {
    pub min: f64,
    pub max: f64,
}

impl ElementRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Degenerate window (e.g. GEO altitude); sampling returns `min`
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Full circle for RAAN, argument of perigee and mean anomaly
pub const ANGLE_RANGE_DEG: ElementRange = ElementRange::new(0.0, 360.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name_prefix: &'static str,
    pub count: usize,
    pub inclination_deg: ElementRange,
    pub altitude_km: ElementRange,
    pub eccentricity: ElementRange,
}

impl Category {
    const fn new(
        name_prefix: &'static str,
        count: usize,
        inclination_deg: (f64, f64),
        altitude_km: (f64, f64),
        eccentricity: (f64, f64),
    ) -> Self {
        Self {
            name_prefix,
            count,
            inclination_deg: ElementRange::new(inclination_deg.0, inclination_deg.1),
            altitude_km: ElementRange::new(altitude_km.0, altitude_km.1),
            eccentricity: ElementRange::new(eccentricity.0, eccentricity.1),
        }
    }
}

// ============================================================================
// Satellite regimes
// ============================================================================

pub const SATELLITE_CATEGORIES: [Category; 10] = [
    // ISS-like
    Category::new("LEO-VLOW", 100, (0.0, 28.5), (400.0, 450.0), (0.0001, 0.0050)),
    // Starlink-like shells
    Category::new("LEO-LOW", 150, (28.5, 57.0), (500.0, 700.0), (0.0001, 0.0100)),
    Category::new("LEO-MED", 150, (57.0, 85.5), (700.0, 1000.0), (0.0050, 0.0200)),
    // Polar / sun-synchronous
    Category::new("LEO-HIGH", 100, (85.5, 114.0), (800.0, 1200.0), (0.0100, 0.0300)),
    Category::new("LEO-RETRO", 100, (114.0, 142.5), (600.0, 900.0), (0.0050, 0.0250)),
    // GNSS
    Category::new("MEO-NAV", 100, (50.0, 65.0), (19000.0, 24000.0), (0.0001, 0.0100)),
    Category::new("MEO-COMM", 80, (0.0, 30.0), (8000.0, 15000.0), (0.0100, 0.0500)),
    // Molniya-like
    Category::new("HEO-MOL", 60, (60.0, 70.0), (500.0, 40000.0), (0.6000, 0.7500)),
    Category::new("GTO", 80, (0.0, 28.5), (200.0, 35786.0), (0.7000, 0.7300)),
    Category::new("GEO", 70, (0.0, 5.0), (35786.0, 35786.0), (0.0001, 0.0050)),
];

// ============================================================================
// Debris regimes
// ============================================================================

pub const DEBRIS_CATEGORIES: [Category; 8] = [
    // Drag-dominated shell
    Category::new("VLEO DEB", 100, (0.0, 180.0), (150.0, 400.0), (0.0001, 0.0500)),
    Category::new("LEO-EQ DEB", 150, (0.0, 30.0), (400.0, 1200.0), (0.0001, 0.1500)),
    Category::new("LEO-MID DEB", 150, (30.0, 60.0), (500.0, 1500.0), (0.0050, 0.2000)),
    Category::new("LEO-POL DEB", 100, (60.0, 120.0), (600.0, 1800.0), (0.0100, 0.3000)),
    Category::new("LEO-RET DEB", 50, (120.0, 180.0), (400.0, 1000.0), (0.0050, 0.2500)),
    Category::new("MEO DEB", 30, (0.0, 90.0), (2000.0, 20000.0), (0.0100, 0.4000)),
    Category::new("HEO DEB", 15, (45.0, 75.0), (500.0, 50000.0), (0.5000, 0.8000)),
    Category::new("GTO DEB", 5, (0.0, 45.0), (200.0, 35786.0), (0.6500, 0.7500)),
];

/// Sum of per-category counts
pub fn table_total(categories: &[Category]) -> usize {
    categories.iter().map(|c| c.count).sum()
}

/// Kind of tracked object; decides table, numbering and naming
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObjectClass {
    Satellite,
    Debris,
}

impl ObjectClass {
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Satellite => &SATELLITE_CATEGORIES,
            Self::Debris => &DEBRIS_CATEGORIES,
        }
    }

    pub fn first_catalog_number(&self) -> u32 {
        match self {
            Self::Satellite => 50_001,
            Self::Debris => 60_001,
        }
    }

    pub fn default_requested(&self) -> usize {
        match self {
            Self::Satellite => 1000,
            Self::Debris => 3000,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Satellite => "satellites_1000.tle",
            Self::Debris => "debris_3000.tle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Satellite => "satellites",
            Self::Debris => "debris objects",
        }
    }

    pub fn table_total(&self) -> usize {
        table_total(self.categories())
    }

    /// Satellites get a 1-based serial per category; debris share the bare prefix
    pub fn object_name(&self, category: &Category, index: usize) -> String {
        match self {
            Self::Satellite => format!("{}-{:04}", category.name_prefix, index + 1),
            Self::Debris => category.name_prefix.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satellite_table_falls_short_of_requested() {
        // Table holds 990 objects while callers ask for 1000
        assert_eq!(SATELLITE_CATEGORIES.len(), 10);
        assert_eq!(ObjectClass::Satellite.table_total(), 990);
        assert_ne!(
            ObjectClass::Satellite.table_total(),
            ObjectClass::Satellite.default_requested()
        );
    }

    #[test]
    fn test_debris_table_falls_short_of_requested() {
        assert_eq!(DEBRIS_CATEGORIES.len(), 8);
        assert_eq!(ObjectClass::Debris.table_total(), 600);
        assert_ne!(
            ObjectClass::Debris.table_total(),
            ObjectClass::Debris.default_requested()
        );
    }

    #[test]
    fn test_ranges_are_ordered_and_physical() {
        for cat in SATELLITE_CATEGORIES.iter().chain(DEBRIS_CATEGORIES.iter()) {
            for range in [cat.inclination_deg, cat.altitude_km, cat.eccentricity] {
                assert!(range.min <= range.max, "{}: {:?}", cat.name_prefix, range);
            }
            assert!(cat.inclination_deg.min >= 0.0 && cat.inclination_deg.max <= 180.0);
            assert!(cat.altitude_km.min > 0.0);
            assert!(cat.eccentricity.min >= 0.0 && cat.eccentricity.max < 1.0);
        }
    }

    #[test]
    fn test_geo_altitude_is_fixed() {
        let geo = SATELLITE_CATEGORIES
            .iter()
            .find(|c| c.name_prefix == "GEO")
            .unwrap();
        assert!(geo.altitude_km.is_fixed());
        assert!(!geo.inclination_deg.is_fixed());
    }

    #[test]
    fn test_object_names() {
        let sat = &SATELLITE_CATEGORIES[0];
        assert_eq!(ObjectClass::Satellite.object_name(sat, 0), "LEO-VLOW-0001");
        assert_eq!(ObjectClass::Satellite.object_name(sat, 99), "LEO-VLOW-0100");

        let deb = &DEBRIS_CATEGORIES[2];
        assert_eq!(ObjectClass::Debris.object_name(deb, 41), "LEO-MID DEB");
    }

    #[test]
    fn test_names_fit_name_column() {
        for class in [ObjectClass::Satellite, ObjectClass::Debris] {
            for cat in class.categories() {
                let last = class.object_name(cat, cat.count - 1);
                assert!(last.chars().count() <= 24, "{} too wide", last);
            }
        }
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let r = ElementRange::new(28.5, 57.0);
        assert!(r.contains(28.5));
        assert!(r.contains(57.0));
        assert!(!r.contains(57.000001));
    }
}
