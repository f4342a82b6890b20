//! Data-driven character content and loaders.
//!
//! This crate houses the default rules catalog and provides loaders for
//! RON/TOML data files:
//! - Skill definitions (RON)
//! - Hindrance definitions (RON)
//! - Edge definitions with prerequisites (RON)
//! - Progression rules (TOML)
//!
//! Content feeds character creation and never appears in character state
//! beyond the definitions a character actually takes.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{Catalog, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
