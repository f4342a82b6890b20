//! Content factory for loading all character data from a data directory.

use std::path::{Path, PathBuf};

use character_core::{Character, ProgressionConfig};

use crate::loaders::{Catalog, CatalogLoader, ConfigLoader, LoadResult};

const CONFIG_FILE: &str = "progression.toml";

/// Entry point for loading a complete rules set from a directory.
///
/// Expected layout:
///
/// ```text
/// data/
/// ├── progression.toml
/// ├── skills.ron
/// ├── hindrances.ron
/// └── edges.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory pointed at the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn load_config(&self) -> LoadResult<ProgressionConfig> {
        ConfigLoader::load(&self.data_dir.join(CONFIG_FILE))
    }

    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load_dir(&self.data_dir)
    }

    /// Fresh character using the configured starting pools.
    pub fn new_character(&self, name: &str) -> LoadResult<Character> {
        Ok(Character::new(name, &self.load_config()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let config = ContentFactory::bundled().load_config().unwrap();
        assert_eq!(config, ProgressionConfig::default());
    }

    #[test]
    fn bundled_character_starts_with_configured_pools() {
        let hero = ContentFactory::bundled().new_character("Red").unwrap();
        assert_eq!(hero.points.attribute_points, 5);
        assert_eq!(hero.points.skill_points, 12);
        assert!(hero.skills.is_empty());
    }
}
