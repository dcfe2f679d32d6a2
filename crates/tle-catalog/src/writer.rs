//! Flat-file output for generated catalogs

use crate::generator::Catalog;
use crate::{CatalogError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// All blocks joined with single newlines; no header, no trailing newline
pub fn render(catalog: &Catalog) -> String {
    catalog
        .records
        .iter()
        .map(|r| r.to_block())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered catalog to `path`.
///
/// The parent directory must already exist. Not atomic: a failure mid-write
/// can leave a truncated file behind.
pub fn write_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {} {} to {:?}", catalog.len(), catalog.class.label(), path);

    let io_err = |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render(catalog).as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(())
}
