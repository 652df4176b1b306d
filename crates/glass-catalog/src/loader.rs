//! Export-map loading.
//!
//! The registry generator emits `components.json`, an ordered manifest of
//! every exported component. This module reads that file into the in-memory
//! catalog the resolver works against. File order is preserved; it is the
//! tie-break order for equal-scoring matches downstream.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use glass_model::ComponentEntry;

use crate::error::{CatalogError, Result};

const REGISTRY_ENV_VAR: &str = "GLASS_UI_REGISTRY_DIR";
const EXPORT_MAP_FILE: &str = "components.json";

/// Top-level shape of the generated export map.
#[derive(Debug, Deserialize)]
struct ExportMap {
    components: Vec<ComponentEntry>,
}

/// Directory holding the generated registry files.
///
/// `GLASS_UI_REGISTRY_DIR` overrides the default `registry/` directory at
/// the workspace root.
pub fn default_registry_root() -> PathBuf {
    if let Ok(root) = std::env::var(REGISTRY_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../registry")
}

/// Load the default export map from [`default_registry_root`].
pub fn load_default_catalog() -> Result<Vec<ComponentEntry>> {
    load_catalog(&default_registry_root().join(EXPORT_MAP_FILE))
}

/// Load and validate an export map file.
///
/// Validation enforces the catalog invariants the resolver relies on:
/// non-empty canonical names, unique (case-insensitive) across the file.
pub fn load_catalog(path: &Path) -> Result<Vec<ComponentEntry>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let export_map: ExportMap =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    validate(&export_map.components)?;
    debug!(
        path = %path.display(),
        component_count = export_map.components.len(),
        "loaded component export map"
    );
    Ok(export_map.components)
}

fn validate(entries: &[ComponentEntry]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if !seen.insert(entry.name.to_ascii_uppercase()) {
            return Err(CatalogError::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<ComponentEntry> {
        names
            .iter()
            .map(|name| ComponentEntry::new(*name, "test"))
            .collect()
    }

    #[test]
    fn unique_names_validate() {
        assert!(validate(&entries(&["ButtonGlass", "CardGlass"])).is_ok());
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let result = validate(&entries(&["ButtonGlass", "BUTTONGLASS"]));
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "BUTTONGLASS"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let result = validate(&entries(&["ButtonGlass", "  "]));
        assert!(matches!(result, Err(CatalogError::EmptyName { index: 1 })));
    }
}
