//! The character aggregate.

use crate::config::ProgressionConfig;
use crate::state::{Attributes, Edge, Hindrance, PointPools, Skill};

/// A character: the single unit every ledger operation reads and produces.
///
/// Ledger operations borrow a character immutably and hand back a new value,
/// so a caller's copy is never changed behind its back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hindrances: Vec<Hindrance>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub edges: Vec<Edge>,
    pub points: PointPools,
}

impl Character {
    /// Fresh character: every attribute at `d4`, no facets, starting pools
    /// from `config`.
    pub fn new(name: impl Into<String>, config: &ProgressionConfig) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::default(),
            skills: Vec::new(),
            hindrances: Vec::new(),
            edges: Vec::new(),
            points: config.starting_points,
        }
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skill(name).is_some()
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.name == name)
    }

    pub fn has_edge(&self, name: &str) -> bool {
        self.edge(name).is_some()
    }

    /// Index of the first held hindrance matching both name and category.
    pub fn hindrance_index(&self, hindrance: &Hindrance) -> Option<usize> {
        self.hindrances
            .iter()
            .position(|held| held.same_entry(hindrance))
    }
}
