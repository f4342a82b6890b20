//! Edge validator and ledger.
//!
//! Taking an edge spends hindrance points and requires every attribute and
//! skill prerequisite to be met. Validation accumulates all failures instead of
//! stopping at the first, so callers can show the complete list.

use core::fmt;

use crate::config::ProgressionConfig;
use crate::die::Die;
use crate::error::{ErrorSeverity, RuleError};
use crate::ledger::LedgerTransition;
use crate::ledger::transition::ensure_pool;
use crate::state::{Attribute, Character, Edge, PoolKind};

/// One unmet edge requirement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrerequisiteFailure {
    HindrancePoints {
        required: i32,
        available: i32,
    },
    Attribute {
        attribute: Attribute,
        required: Die,
        actual: Die,
    },
    Skill {
        name: String,
        required: Die,
        /// `None` when the skill is not held at all.
        actual: Option<Die>,
    },
}

impl fmt::Display for PrerequisiteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HindrancePoints {
                required,
                available,
            } => write!(
                f,
                "Requires {required} hindrance points to spend, but has {available}."
            ),
            Self::Attribute {
                attribute,
                required,
                actual,
            } => write!(
                f,
                "Requires {attribute} to be at least {required}, but is {actual}."
            ),
            Self::Skill {
                name,
                required,
                actual: Some(actual),
            } => write!(f, "Requires {name} to be at least {required}, but is {actual}."),
            Self::Skill {
                name,
                required,
                actual: None,
            } => write!(
                f,
                "Requires {name} to be at least {required}, but is not present."
            ),
        }
    }
}

/// Outcome of checking an edge against a character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeValidation {
    /// Unmet requirements in check order: hindrance points, attributes, skills.
    pub failures: Vec<PrerequisiteFailure>,
    /// Free-text requirements that were surfaced but not checked.
    pub unchecked: Vec<String>,
}

impl EdgeValidation {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable failure descriptions.
    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for EdgeValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reasons().join(" "))
    }
}

/// Checks every prerequisite of `edge` without short-circuiting.
pub fn validate_edge(character: &Character, edge: &Edge, config: &ProgressionConfig) -> EdgeValidation {
    let mut failures = Vec::new();

    if !character.points.can_afford(PoolKind::Hindrance, config.edge_cost) {
        failures.push(PrerequisiteFailure::HindrancePoints {
            required: config.edge_cost,
            available: character.points.hindrance_points,
        });
    }

    for requirement in &edge.prerequisites.attributes {
        let actual = character.attributes.get(requirement.attribute);
        if actual.rank() < requirement.die.rank() {
            failures.push(PrerequisiteFailure::Attribute {
                attribute: requirement.attribute,
                required: requirement.die,
                actual,
            });
        }
    }

    for requirement in &edge.prerequisites.skills {
        let actual = character.skill(&requirement.name).map(|skill| skill.die);
        if Die::rank_of(actual) < requirement.die.rank() {
            failures.push(PrerequisiteFailure::Skill {
                name: requirement.name.clone(),
                required: requirement.die,
                actual,
            });
        }
    }

    EdgeValidation {
        failures,
        unchecked: edge.prerequisites.other.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeError {
    #[error("edge {0} is already held")]
    AlreadyHeld(String),

    #[error("edge {0} is not held")]
    NotHeld(String),

    #[error("edge {edge} prerequisites not met: {report}")]
    PrerequisitesNotMet { edge: String, report: EdgeValidation },

    #[error("hindrance pool overdrawn to {0}")]
    PoolOverdrawn(i32),
}

impl RuleError for EdgeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyHeld(_) | Self::NotHeld(_) => ErrorSeverity::Validation,
            Self::PrerequisitesNotMet { .. } => ErrorSeverity::Validation,
            Self::PoolOverdrawn(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyHeld(_) => "EDGE_ALREADY_HELD",
            Self::NotHeld(_) => "EDGE_NOT_HELD",
            Self::PrerequisitesNotMet { .. } => "EDGE_PREREQUISITES_NOT_MET",
            Self::PoolOverdrawn(_) => "EDGE_POOL_OVERDRAWN",
        }
    }
}

/// Takes an edge after validating it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddEdge {
    pub edge: Edge,
}

impl AddEdge {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }
}

impl LedgerTransition for AddEdge {
    type Error = EdgeError;

    fn name(&self) -> &'static str {
        "add_edge"
    }

    fn pre_validate(
        &self,
        character: &Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if character.has_edge(&self.edge.name) {
            return Err(EdgeError::AlreadyHeld(self.edge.name.clone()));
        }

        let report = validate_edge(character, &self.edge, config);
        if !report.is_valid() {
            return Err(EdgeError::PrerequisitesNotMet {
                edge: self.edge.name.clone(),
                report,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        character.points.spend(PoolKind::Hindrance, config.edge_cost);
        character.edges.push(self.edge.clone());
        Ok(())
    }

    fn post_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        ensure_pool(character, PoolKind::Hindrance, EdgeError::PoolOverdrawn)
    }
}

/// Gives up a held edge by name and refunds its hindrance points.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveEdge {
    pub name: String,
}

impl RemoveEdge {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&Edge> for RemoveEdge {
    fn from(edge: &Edge) -> Self {
        Self::new(edge.name.clone())
    }
}

impl LedgerTransition for RemoveEdge {
    type Error = EdgeError;

    fn name(&self) -> &'static str {
        "remove_edge"
    }

    fn pre_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if character.has_edge(&self.name) {
            Ok(())
        } else {
            Err(EdgeError::NotHeld(self.name.clone()))
        }
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        character.points.refund(PoolKind::Hindrance, config.edge_cost);
        character.edges.retain(|edge| edge.name != self.name);
        Ok(())
    }
}
