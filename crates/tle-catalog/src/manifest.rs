//! Optional JSON summary of a generation run

use crate::categories::ObjectClass;
use crate::format::TleEpoch;
use crate::generator::Catalog;
use crate::{CatalogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces this run
    pub seed: u64,
    pub epoch: TleEpoch,
    pub classes: Vec<ClassSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class: ObjectClass,
    pub requested: usize,
    pub generated: usize,
    pub first_catalog_number: Option<u32>,
    pub last_catalog_number: Option<u32>,
    pub subsurface_perigees: usize,
    pub output: PathBuf,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name_prefix: String,
    pub count: usize,
}

impl ClassSummary {
    pub fn from_catalog(catalog: &Catalog, output: PathBuf) -> Self {
        Self {
            class: catalog.class,
            requested: catalog.requested,
            generated: catalog.len(),
            first_catalog_number: catalog.records.first().map(|r| r.catalog_number),
            last_catalog_number: catalog.records.last().map(|r| r.catalog_number),
            subsurface_perigees: catalog.subsurface_perigees(),
            output,
            categories: catalog
                .class
                .categories()
                .iter()
                .map(|c| CategorySummary {
                    name_prefix: c.name_prefix.to_string(),
                    count: c.count,
                })
                .collect(),
        }
    }
}

impl CatalogManifest {
    pub fn new(seed: u64, epoch: TleEpoch, catalogs: &[(&Catalog, PathBuf)]) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            epoch,
            classes: catalogs
                .iter()
                .map(|(catalog, output)| ClassSummary::from_catalog(catalog, output.clone()))
                .collect(),
        }
    }

    pub fn class(&self, class: ObjectClass) -> Option<&ClassSummary> {
        self.classes.iter().find(|c| c.class == class)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing manifest to {:?}", path);

        let file = File::create(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
