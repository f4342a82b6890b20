//! Rejections reported by [`ProgressionEngine`](super::ProgressionEngine).
//!
//! Each ledger keeps its own error enum. The engine tags it with the step
//! that refused the operation and with the operation itself.

use crate::error::{ErrorSeverity, RuleError};
use crate::ledger::{AttributeError, EdgeError, HindranceError, SkillError};

/// Step of a ledger operation: check the character, change it, recheck the pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    /// Name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// A ledger error plus the step that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Why the engine rejected a ledger operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("set attribute rejected: {0}")]
    SetAttribute(TransitionPhaseError<AttributeError>),

    #[error("add skill rejected: {0}")]
    AddSkill(TransitionPhaseError<SkillError>),

    #[error("remove skill rejected: {0}")]
    RemoveSkill(TransitionPhaseError<SkillError>),

    #[error("add hindrance rejected: {0}")]
    AddHindrance(TransitionPhaseError<HindranceError>),

    #[error("remove hindrance rejected: {0}")]
    RemoveHindrance(TransitionPhaseError<HindranceError>),

    #[error("add edge rejected: {0}")]
    AddEdge(TransitionPhaseError<EdgeError>),

    #[error("remove edge rejected: {0}")]
    RemoveEdge(TransitionPhaseError<EdgeError>),
}

impl ExecuteError {
    /// Step that refused the operation.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::SetAttribute(e) => e.phase,
            Self::AddSkill(e) | Self::RemoveSkill(e) => e.phase,
            Self::AddHindrance(e) | Self::RemoveHindrance(e) => e.phase,
            Self::AddEdge(e) | Self::RemoveEdge(e) => e.phase,
        }
    }

    /// The ledger error, regardless of which operation raised it.
    fn inner(&self) -> &dyn RuleError {
        match self {
            Self::SetAttribute(e) => &e.error,
            Self::AddSkill(e) | Self::RemoveSkill(e) => &e.error,
            Self::AddHindrance(e) | Self::RemoveHindrance(e) => &e.error,
            Self::AddEdge(e) | Self::RemoveEdge(e) => &e.error,
        }
    }
}

impl RuleError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.inner().severity()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
