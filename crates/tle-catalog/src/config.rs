//! Run configuration
//!
//! Defaults reproduce the fixed behaviour of the generator: 1000 satellites
//! and 3000 debris requested, epoch 24/146.0, files under `data/`.

use crate::categories::ObjectClass;
use crate::format::TleEpoch;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the two `.tle` files land in; must exist
    pub output_dir: PathBuf,
    /// Requested satellite count
    pub satellites: usize,
    /// Requested debris count
    pub debris: usize,
    /// Random seed (None = fresh seed from OS entropy)
    pub seed: Option<u64>,
    pub epoch: TleEpoch,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            satellites: ObjectClass::Satellite.default_requested(),
            debris: ObjectClass::Debris.default_requested(),
            seed: None,
            epoch: TleEpoch::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn satellites(mut self, n: usize) -> Self {
        self.satellites = n;
        self
    }

    pub fn debris(mut self, n: usize) -> Self {
        self.debris = n;
        self
    }

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }

    pub fn epoch(mut self, epoch: TleEpoch) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn requested(&self, class: ObjectClass) -> usize {
        match class {
            ObjectClass::Satellite => self.satellites,
            ObjectClass::Debris => self.debris,
        }
    }

    pub fn output_path(&self, class: ObjectClass) -> PathBuf {
        self.output_dir.join(class.file_name())
    }

    /// Configured seed, or a freshly drawn one so the run can be replayed
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }
}
