//! Component registry loading for Glass UI.
//!
//! Reads the generated export map into an ordered, validated catalog. The
//! resolver and CLI consume the catalog as a read-only slice; nothing here
//! is cached or mutated after load.

pub mod error;
pub mod loader;

pub use error::CatalogError;
pub use loader::{default_registry_root, load_catalog, load_default_catalog};
