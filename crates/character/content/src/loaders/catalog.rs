//! Skill, hindrance and edge catalog loader.

use std::collections::HashSet;
use std::path::Path;

use character_core::{Edge, Hindrance, HindranceCategory, SkillDefinition};
use serde::de::DeserializeOwned;

use crate::loaders::{LoadResult, read_file};

const SKILLS_FILE: &str = "skills.ron";
const HINDRANCES_FILE: &str = "hindrances.ron";
const EDGES_FILE: &str = "edges.ron";

/// Every definition a character can pick from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub skills: Vec<SkillDefinition>,
    pub hindrances: Vec<Hindrance>,
    pub edges: Vec<Edge>,
}

impl Catalog {
    /// Catalog bundled with the crate.
    pub fn embedded() -> LoadResult<Self> {
        let catalog = Self {
            skills: parse_list(include_str!("../../data/skills.ron"), SKILLS_FILE)?,
            hindrances: parse_list(include_str!("../../data/hindrances.ron"), HINDRANCES_FILE)?,
            edges: parse_list(include_str!("../../data/edges.ron"), EDGES_FILE)?,
        };
        catalog.check()?;
        Ok(catalog)
    }

    pub fn skill(&self, name: &str) -> Option<&SkillDefinition> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.name == name)
    }

    pub fn hindrance(&self, name: &str, category: HindranceCategory) -> Option<&Hindrance> {
        self.hindrances
            .iter()
            .find(|hindrance| hindrance.name == name && hindrance.category == category)
    }

    /// Rejects duplicate keys and warns about edges whose skill prerequisites
    /// name skills missing from the catalog.
    pub fn check(&self) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.name.as_str()) {
                anyhow::bail!("Duplicate skill definition: {}", skill.name);
            }
        }

        let mut seen = HashSet::new();
        for hindrance in &self.hindrances {
            if !seen.insert((hindrance.name.as_str(), hindrance.category)) {
                anyhow::bail!(
                    "Duplicate hindrance definition: {} ({})",
                    hindrance.name,
                    hindrance.category
                );
            }
        }

        let mut seen = HashSet::new();
        for edge in &self.edges {
            if !seen.insert(edge.name.as_str()) {
                anyhow::bail!("Duplicate edge definition: {}", edge.name);
            }
            for requirement in &edge.prerequisites.skills {
                if self.skill(&requirement.name).is_none() {
                    tracing::warn!(
                        edge = %edge.name,
                        skill = %requirement.name,
                        "edge requires a skill missing from the catalog"
                    );
                }
            }
        }
        Ok(())
    }
}

/// Loader for catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load `skills.ron`, `hindrances.ron` and `edges.ron` from `dir`.
    pub fn load_dir(dir: &Path) -> LoadResult<Catalog> {
        let catalog = Catalog {
            skills: Self::load_skills(&dir.join(SKILLS_FILE))?,
            hindrances: Self::load_hindrances(&dir.join(HINDRANCES_FILE))?,
            edges: Self::load_edges(&dir.join(EDGES_FILE))?,
        };
        catalog.check()?;

        tracing::info!(
            skills = catalog.skills.len(),
            hindrances = catalog.hindrances.len(),
            edges = catalog.edges.len(),
            dir = %dir.display(),
            "loaded character catalog"
        );
        Ok(catalog)
    }

    pub fn load_skills(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        load_list(path)
    }

    pub fn load_hindrances(path: &Path) -> LoadResult<Vec<Hindrance>> {
        load_list(path)
    }

    pub fn load_edges(path: &Path) -> LoadResult<Vec<Edge>> {
        load_list(path)
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let content = read_file(path)?;
    parse_list(&content, &path.display().to_string())
}

fn parse_list<T: DeserializeOwned>(content: &str, source: &str) -> LoadResult<Vec<T>> {
    ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", source, e))
}

#[cfg(test)]
mod tests {
    use character_core::{Attribute, AttributeRequirement, Die, EdgeCategory};

    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("Failed to load embedded catalog");

        let research = catalog.skill("Research").expect("Research is bundled");
        assert_eq!(research.linked_attribute, Attribute::Smarts);

        let brawler = catalog.edge("Brawler").expect("Brawler is bundled");
        assert_eq!(brawler.category, EdgeCategory::Combat);
        assert_eq!(
            brawler.prerequisites.attributes,
            vec![AttributeRequirement::new(Attribute::Strength, Die::D8)]
        );
        assert_eq!(brawler.prerequisites.skills[0].name, "Fighting");

        assert!(catalog.hindrance("Vow", HindranceCategory::Minor).is_some());
        assert!(catalog.hindrance("Vow", HindranceCategory::Major).is_some());
    }

    #[test]
    fn duplicate_skills_are_rejected() {
        let catalog = Catalog {
            skills: vec![
                SkillDefinition::new("Notice", Attribute::Smarts),
                SkillDefinition::new("Notice", Attribute::Spirit),
            ],
            ..Catalog::default()
        };
        assert!(catalog.check().is_err());
    }

    #[test]
    fn same_hindrance_name_in_both_categories_is_allowed() {
        let catalog = Catalog {
            hindrances: vec![Hindrance::minor("Wanted"), Hindrance::major("Wanted")],
            ..Catalog::default()
        };
        assert!(catalog.check().is_ok());
    }

    #[test]
    fn loads_catalog_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SKILLS_FILE),
            r#"[(name: "Fighting", linked_attribute: Agility)]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(HINDRANCES_FILE),
            r#"[(name: "Loyal", category: Minor)]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(EDGES_FILE),
            r#"[(name: "Brawler", category: Combat, prerequisites: (skills: [(name: "Fighting", die: d6)]))]"#,
        )
        .unwrap();

        let catalog = CatalogLoader::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.skills.len(), 1);
        assert_eq!(catalog.hindrances[0].description, "");
        assert_eq!(catalog.edges[0].prerequisites.skills[0].die, Die::D6);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = parse_list::<Edge>("[(name: 3)]", EDGES_FILE).unwrap_err();
        assert!(err.to_string().contains(EDGES_FILE));
    }
}
