//! Runs one [`LedgerAction`] against a working copy of a character.

use crate::config::ProgressionConfig;
use crate::ledger::{LedgerAction, LedgerTransition};
use crate::state::Character;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Checks the character, applies the change, then rechecks the point pools.
///
/// Stops at the first step that refuses. The character may be partly changed
/// after an `apply` or `post_validate` failure, so callers pass a copy.
fn drive_transition<T>(
    transition: &T,
    character: &mut Character,
    config: &ProgressionConfig,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: LedgerTransition,
{
    transition
        .pre_validate(character, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(character, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(character, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Tags the ledger error with the operation that produced it.
pub(super) fn execute_transition(
    action: &LedgerAction,
    character: &mut Character,
    config: &ProgressionConfig,
) -> Result<(), ExecuteError> {
    match action {
        LedgerAction::SetAttribute(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::SetAttribute)
        }
        LedgerAction::AddSkill(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::AddSkill)
        }
        LedgerAction::RemoveSkill(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::RemoveSkill)
        }
        LedgerAction::AddHindrance(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::AddHindrance)
        }
        LedgerAction::RemoveHindrance(transition) => drive_transition(transition, character, config)
            .map_err(ExecuteError::RemoveHindrance),
        LedgerAction::AddEdge(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::AddEdge)
        }
        LedgerAction::RemoveEdge(transition) => {
            drive_transition(transition, character, config).map_err(ExecuteError::RemoveEdge)
        }
    }
}
