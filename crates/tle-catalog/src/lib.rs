//! Synthetic TLE Catalog Generator
//!
//! Produces satellite and debris catalogs in the two-line element text layout
//! as demo input for conjunction screening. Orbital parameters are drawn
//! uniformly inside per-regime ranges; nothing here propagates orbits or
//! computes real checksums.
//!
//! # Pipeline
//!
//! ```text
//! categories ──► sampler ──► orbital-mechanics ──► format ──► writer
//!  (tables)      (rng)        (mean motion)        (TLE)      (.tle)
//! ```
//!
//! | Class      | First NORAD | Requested | Table total |
//! |------------|-------------|-----------|-------------|
//! | Satellite  | 50001       | 1000      | 990         |
//! | Debris     | 60001       | 3000      | 600         |
//!
//! The requested count is carried through and compared against the category
//! tables; the tables always decide how many objects are emitted.

use std::path::PathBuf;
use thiserror::Error;

pub mod categories;
pub mod config;
pub mod format;
pub mod generator;
pub mod manifest;
pub mod sampler;
pub mod writer;

pub use categories::{Category, ElementRange, ObjectClass};
pub use config::GeneratorConfig;
pub use format::{TleEpoch, TleRecord};
pub use generator::{generate_catalog, generate_debris, generate_satellites, Catalog};
pub use manifest::CatalogManifest;
pub use sampler::{sample_elements, SampledElements};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Orbital conversion failed: {0}")]
    Orbital(#[from] orbital_mechanics::OrbitalError),
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Generate both catalogs, write them, and summarize the run.
///
/// Both classes are generated before either file is written. A failed write
/// aborts the run and may leave the first file in place.
pub fn run(config: &GeneratorConfig) -> Result<CatalogManifest> {
    let seed = config.resolve_seed();
    let mut rng = GeneratorConfig::rng_from_seed(seed);

    let satellites = generate_satellites(
        &mut rng,
        config.requested(ObjectClass::Satellite),
        config.epoch,
    )?;
    let debris = generate_debris(&mut rng, config.requested(ObjectClass::Debris), config.epoch)?;

    let satellites_path = config.output_path(ObjectClass::Satellite);
    let debris_path = config.output_path(ObjectClass::Debris);

    writer::write_catalog(&satellites, &satellites_path)?;
    writer::write_catalog(&debris, &debris_path)?;

    Ok(CatalogManifest::new(
        seed,
        config.epoch,
        &[(&satellites, satellites_path), (&debris, debris_path)],
    ))
}
