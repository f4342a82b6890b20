//! Deterministic point-buy progression rules for tabletop characters.
//!
//! `character-core` tracks a character's attributes, skills, hindrances and
//! edges, and the three point pools that pay for them. All changes flow
//! through [`engine::ProgressionEngine`], which borrows a [`Character`] and
//! returns either an updated copy or an [`ExecuteError`] explaining the
//! rejection. The crate performs no I/O.
pub mod config;
pub mod die;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod state;

pub use config::{ProgressionConfig, SkillRefundPolicy};
pub use die::Die;
pub use engine::{ExecuteError, ProgressionEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, RuleError};
pub use ledger::{
    AddEdge, AddHindrance, AddSkill, AttributeError, EdgeError, EdgeValidation, HindranceError,
    LedgerAction, LedgerTransition, PrerequisiteFailure, RemoveEdge, RemoveHindrance,
    RemoveSkill, SetAttribute, SkillError, attribute_cost, hindrance_points,
    hindrance_points_awarded, is_valid_hindrance, skill_cost, skill_refund, validate_edge,
};
pub use state::{
    Attribute, AttributeRequirement, Attributes, Character, Edge, EdgeCategory,
    EdgePrerequisites, Hindrance, HindranceCategory, PointPools, PoolKind, Skill,
    SkillDefinition, SkillRequirement,
};
