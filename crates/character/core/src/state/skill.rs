//! Skill definitions and held skills.

use crate::die::Die;
use crate::state::Attribute;

/// Catalog entry describing a skill a character may acquire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub linked_attribute: Attribute,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Suggested starting die shown by catalogs. Acquisition always starts at
    /// [`Die::MIN`] regardless of this value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub suggested_die: Option<Die>,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, linked_attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            linked_attribute,
            description: String::new(),
            tags: Vec::new(),
            suggested_die: None,
        }
    }
}

/// A skill held by a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub linked_attribute: Attribute,
    pub die: Die,
    /// Skill points paid when the skill was acquired.
    pub acquisition_cost: i32,
}

impl Skill {
    /// Fresh skill at the lowest die, recording what was paid for it.
    pub fn acquired(definition: &SkillDefinition, acquisition_cost: i32) -> Self {
        Self {
            name: definition.name.clone(),
            linked_attribute: definition.linked_attribute,
            die: Die::MIN,
            acquisition_cost,
        }
    }
}
