//! Ledger operations.
//!
//! Each operation is a small struct implementing [`LedgerTransition`]. The
//! [`LedgerAction`] enum is the canonical, serializable form handed to the
//! engine.

mod attribute;
mod edge;
mod hindrance;
mod skill;
mod transition;

pub use attribute::{AttributeError, SetAttribute, attribute_cost};
pub use edge::{
    AddEdge, EdgeError, EdgeValidation, PrerequisiteFailure, RemoveEdge, validate_edge,
};
pub use hindrance::{
    AddHindrance, HindranceError, RemoveHindrance, hindrance_points, hindrance_points_awarded,
    is_valid_hindrance,
};
pub use skill::{AddSkill, RemoveSkill, SkillError, skill_cost, skill_refund};
pub use transition::LedgerTransition;

/// A single point-buy change to a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerAction {
    SetAttribute(SetAttribute),
    AddSkill(AddSkill),
    RemoveSkill(RemoveSkill),
    AddHindrance(AddHindrance),
    RemoveHindrance(RemoveHindrance),
    AddEdge(AddEdge),
    RemoveEdge(RemoveEdge),
}

impl LedgerAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAttribute(op) => op.name(),
            Self::AddSkill(op) => op.name(),
            Self::RemoveSkill(op) => op.name(),
            Self::AddHindrance(op) => op.name(),
            Self::RemoveHindrance(op) => op.name(),
            Self::AddEdge(op) => op.name(),
            Self::RemoveEdge(op) => op.name(),
        }
    }
}
