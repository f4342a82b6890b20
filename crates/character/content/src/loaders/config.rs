//! Progression configuration loader.

use std::path::Path;

use character_core::ProgressionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for progression rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ProgressionConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ProgressionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ProgressionConfig> {
        let config: ProgressionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse progression TOML: {}", e))?;

        tracing::info!(
            hindrance_cap = config.hindrance_cap,
            edge_cost = config.edge_cost,
            refund_policy = ?config.skill_refund_policy,
            "loaded progression config"
        );
        Ok(config)
    }
}
