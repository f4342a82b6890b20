//! Edges: advantages gated by hindrance-point spend and prerequisites.

use crate::die::Die;
use crate::state::Attribute;

/// Story function of an edge.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EdgeCategory {
    Background,
    Combat,
    Social,
    Leadership,
    Power,
    Professional,
    Weird,
    Legendary,
}

/// Minimum die required in an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeRequirement {
    pub attribute: Attribute,
    pub die: Die,
}

impl AttributeRequirement {
    pub const fn new(attribute: Attribute, die: Die) -> Self {
        Self { attribute, die }
    }
}

/// Minimum die required in a named skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRequirement {
    pub name: String,
    pub die: Die,
}

impl SkillRequirement {
    pub fn new(name: impl Into<String>, die: Die) -> Self {
        Self {
            name: name.into(),
            die,
        }
    }
}

/// Requirements a character must meet before taking an edge.
///
/// Requirements are checked and reported in the order they are listed.
/// `other` holds free-text requirements (rank, hindrances, ...). They are
/// reported back to callers but never checked mechanically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgePrerequisites {
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<AttributeRequirement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillRequirement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub other: Vec<String>,
}

/// An edge definition. Characters hold these directly, unique by name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub category: EdgeCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prerequisites: EdgePrerequisites,
}

impl Edge {
    pub fn new(name: impl Into<String>, category: EdgeCategory) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            prerequisites: EdgePrerequisites::default(),
        }
    }

    #[must_use]
    pub fn requires_attribute(mut self, attribute: Attribute, die: Die) -> Self {
        self.prerequisites
            .attributes
            .push(AttributeRequirement::new(attribute, die));
        self
    }

    #[must_use]
    pub fn requires_skill(mut self, name: impl Into<String>, die: Die) -> Self {
        self.prerequisites
            .skills
            .push(SkillRequirement::new(name, die));
        self
    }

    #[must_use]
    pub fn requires_other(mut self, requirement: impl Into<String>) -> Self {
        self.prerequisites.other.push(requirement.into());
        self
    }
}
