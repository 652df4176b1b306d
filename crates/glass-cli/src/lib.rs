//! CLI library components for the Glass UI component explorer.

pub mod logging;
pub mod query;
