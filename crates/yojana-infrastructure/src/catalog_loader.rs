//! Catalog loading.
//!
//! The reference dataset ships embedded in the binary; deployments can also
//! point at an external TOML file with the same shape.

use serde::Deserialize;
use std::path::Path;
use yojana_core::catalog::{SchemeCatalog, SchemeRecord};
use yojana_core::error::Result;

/// Embedded reference dataset (see `data/schemes.toml`).
const BUILTIN_SCHEMES: &str = include_str!("../data/schemes.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schemes: Vec<SchemeRecord>,
}

/// Loads the embedded scheme dataset.
pub fn load_builtin_catalog() -> Result<SchemeCatalog> {
    parse(BUILTIN_SCHEMES)
}

/// Loads a scheme dataset from an external TOML file.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, a serialization error if
/// it is not valid TOML, or a config error if scheme names are not unique.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<SchemeCatalog> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let catalog = parse(&text)?;
    tracing::info!(
        path = %path.as_ref().display(),
        schemes = catalog.len(),
        "loaded external scheme catalog"
    );
    Ok(catalog)
}

fn parse(text: &str) -> Result<SchemeCatalog> {
    let file: CatalogFile = toml::from_str(text)?;
    SchemeCatalog::new(file.schemes)
}
