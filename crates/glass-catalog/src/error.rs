use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read export map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse export map {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate component name in export map: {0}")]
    DuplicateName(String),
    #[error("export map entry {index} has an empty component name")]
    EmptyName { index: usize },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
