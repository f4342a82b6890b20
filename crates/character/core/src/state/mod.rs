//! Plain character records consumed and produced by the ledgers.

mod attributes;
mod character;
mod edge;
mod hindrance;
mod pools;
mod skill;

pub use attributes::{Attribute, Attributes};
pub use character::Character;
pub use edge::{AttributeRequirement, Edge, EdgeCategory, EdgePrerequisites, SkillRequirement};
pub use hindrance::{Hindrance, HindranceCategory};
pub use pools::{PointPools, PoolKind};
pub use skill::{Skill, SkillDefinition};
