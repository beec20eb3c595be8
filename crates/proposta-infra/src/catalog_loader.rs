//! Pricing catalog loader from TOML
//!
//! Two catalogs ship embedded in the binary; any other catalog can be read
//! from a file with the same layout.

use proposta_domain::PricingCatalog;
use proposta_types::{ConfigError, Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("staffing", include_str!("../catalogs/staffing.toml")),
    ("follow-up-care", include_str!("../catalogs/follow-up-care.toml")),
];

/// Names of the embedded catalogs
pub fn builtin_catalog_names() -> Vec<&'static str> {
    BUILTIN_CATALOGS.iter().map(|(name, _)| *name).collect()
}

/// Load an embedded catalog by name
pub fn builtin_catalog(name: &str) -> Result<PricingCatalog> {
    let (_, content) = BUILTIN_CATALOGS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .ok_or_else(|| ConfigError::UnknownCatalog(name.to_string()))?;

    load_catalog_from_str(content)
}

/// Load a catalog from a TOML file
pub fn load_catalog_from_file(path: &Path) -> Result<PricingCatalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read catalog file: {}",
            e
        )))
    })?;

    debug!(path = %path.display(), "loading pricing catalog");
    load_catalog_from_str(&content)
}

/// Parse and validate a catalog from a TOML string
pub fn load_catalog_from_str(toml_content: &str) -> Result<PricingCatalog> {
    let catalog: PricingCatalog = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse catalog TOML: {}",
            e
        )))
    })?;

    catalog.validate()?;
    debug!(
        catalog = %catalog.name,
        services = catalog.services.len(),
        "pricing catalog loaded"
    );

    Ok(catalog)
}
