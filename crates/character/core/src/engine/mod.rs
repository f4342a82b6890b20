//! Ledger execution pipeline.
//!
//! The [`ProgressionEngine`] is the only way the ledgers change a character.
//! It borrows the caller's character, runs the operation against a private
//! copy and returns that copy on success. On rejection the caller keeps its
//! original value and receives an [`ExecuteError`] naming the reason.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::config::ProgressionConfig;
use crate::die::Die;
use crate::error::RuleError;
use crate::ledger::{
    self, AddEdge, AddHindrance, AddSkill, EdgeValidation, LedgerAction, RemoveEdge,
    RemoveHindrance, RemoveSkill, SetAttribute,
};
use crate::state::{Attribute, Character, Edge, Hindrance, SkillDefinition};

/// Applies ledger operations under one set of progression rules.
#[derive(Clone, Copy, Debug)]
pub struct ProgressionEngine<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> ProgressionEngine<'a> {
    pub fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Executes a ledger action and returns the updated character.
    pub fn execute(
        &self,
        character: &Character,
        action: &LedgerAction,
    ) -> Result<Character, ExecuteError> {
        let mut next = character.clone();

        match transition::execute_transition(action, &mut next, self.config) {
            Ok(()) => {
                tracing::debug!(
                    operation = action.name(),
                    character = %next.name,
                    attribute_points = next.points.attribute_points,
                    skill_points = next.points.skill_points,
                    hindrance_points = next.points.hindrance_points,
                    "ledger operation applied"
                );
                Ok(next)
            }
            Err(error) => {
                tracing::debug!(
                    operation = action.name(),
                    character = %character.name,
                    code = error.error_code(),
                    phase = error.phase().as_str(),
                    "ledger operation rejected: {}",
                    error
                );
                Err(error)
            }
        }
    }

    pub fn set_attribute(
        &self,
        character: &Character,
        attribute: Attribute,
        die: Die,
    ) -> Result<Character, ExecuteError> {
        self.execute(
            character,
            &LedgerAction::SetAttribute(SetAttribute::new(attribute, die)),
        )
    }

    /// Moves an attribute one die up.
    pub fn raise_attribute(
        &self,
        character: &Character,
        attribute: Attribute,
    ) -> Result<Character, ExecuteError> {
        let step = SetAttribute::raise(character, attribute).map_err(|error| {
            ExecuteError::SetAttribute(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                error,
            ))
        })?;
        self.execute(character, &LedgerAction::SetAttribute(step))
    }

    /// Moves an attribute one die down, refunding the difference.
    pub fn lower_attribute(
        &self,
        character: &Character,
        attribute: Attribute,
    ) -> Result<Character, ExecuteError> {
        let step = SetAttribute::lower(character, attribute).map_err(|error| {
            ExecuteError::SetAttribute(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                error,
            ))
        })?;
        self.execute(character, &LedgerAction::SetAttribute(step))
    }

    pub fn add_skill(
        &self,
        character: &Character,
        definition: &SkillDefinition,
    ) -> Result<Character, ExecuteError> {
        self.execute(
            character,
            &LedgerAction::AddSkill(AddSkill::new(definition.clone())),
        )
    }

    pub fn remove_skill(
        &self,
        character: &Character,
        definition: &SkillDefinition,
    ) -> Result<Character, ExecuteError> {
        self.execute(
            character,
            &LedgerAction::RemoveSkill(RemoveSkill::from(definition)),
        )
    }

    pub fn add_hindrance(
        &self,
        character: &Character,
        hindrance: &Hindrance,
    ) -> Result<Character, ExecuteError> {
        self.execute(
            character,
            &LedgerAction::AddHindrance(AddHindrance::new(hindrance.clone())),
        )
    }

    pub fn remove_hindrance(
        &self,
        character: &Character,
        hindrance: &Hindrance,
    ) -> Result<Character, ExecuteError> {
        self.execute(
            character,
            &LedgerAction::RemoveHindrance(RemoveHindrance::new(hindrance.clone())),
        )
    }

    pub fn add_edge(&self, character: &Character, edge: &Edge) -> Result<Character, ExecuteError> {
        self.execute(character, &LedgerAction::AddEdge(AddEdge::new(edge.clone())))
    }

    pub fn remove_edge(
        &self,
        character: &Character,
        edge: &Edge,
    ) -> Result<Character, ExecuteError> {
        self.execute(character, &LedgerAction::RemoveEdge(RemoveEdge::from(edge)))
    }

    pub fn validate_edge(&self, character: &Character, edge: &Edge) -> EdgeValidation {
        ledger::validate_edge(character, edge, self.config)
    }

    pub fn is_valid_hindrance(&self, character: &Character, candidate: &Hindrance) -> bool {
        ledger::is_valid_hindrance(character, candidate, self.config)
    }

    pub fn hindrance_points_awarded(&self, character: &Character) -> i32 {
        ledger::hindrance_points_awarded(character, self.config)
    }
}
