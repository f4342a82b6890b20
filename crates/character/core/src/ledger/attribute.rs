//! Attribute ledger: die changes paid from the attribute pool.

use crate::config::ProgressionConfig;
use crate::die::Die;
use crate::error::{ErrorSeverity, RuleError};
use crate::ledger::LedgerTransition;
use crate::ledger::transition::ensure_pool;
use crate::state::{Attribute, Character, PoolKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    #[error("raising {attribute} to {target} costs {cost} attribute points, but only {available} remain")]
    InsufficientPoints {
        attribute: Attribute,
        target: Die,
        cost: i32,
        available: i32,
    },

    #[error("{0} is already at the highest die")]
    AtMaximum(Attribute),

    #[error("{0} is already at the lowest die")]
    AtMinimum(Attribute),

    #[error("attribute pool overdrawn to {0}")]
    PoolOverdrawn(i32),
}

impl RuleError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientPoints { .. } => ErrorSeverity::Recoverable,
            Self::AtMaximum(_) | Self::AtMinimum(_) => ErrorSeverity::Validation,
            Self::PoolOverdrawn(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => "ATTRIBUTE_INSUFFICIENT_POINTS",
            Self::AtMaximum(_) => "ATTRIBUTE_AT_MAXIMUM",
            Self::AtMinimum(_) => "ATTRIBUTE_AT_MINIMUM",
            Self::PoolOverdrawn(_) => "ATTRIBUTE_POOL_OVERDRAWN",
        }
    }
}

/// Attribute points needed to move `attribute` to `target`.
/// Lowering an attribute yields a negative cost, i.e. a refund.
pub fn attribute_cost(character: &Character, attribute: Attribute, target: Die) -> i32 {
    target.rank() - character.attributes.get(attribute).rank()
}

/// Sets one attribute to a new die.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetAttribute {
    pub attribute: Attribute,
    pub die: Die,
}

impl SetAttribute {
    pub fn new(attribute: Attribute, die: Die) -> Self {
        Self { attribute, die }
    }

    /// Targets the die one step above the current one.
    pub fn raise(character: &Character, attribute: Attribute) -> Result<Self, AttributeError> {
        character
            .attributes
            .get(attribute)
            .next()
            .map(|die| Self::new(attribute, die))
            .ok_or(AttributeError::AtMaximum(attribute))
    }

    /// Targets the die one step below the current one.
    pub fn lower(character: &Character, attribute: Attribute) -> Result<Self, AttributeError> {
        character
            .attributes
            .get(attribute)
            .previous()
            .map(|die| Self::new(attribute, die))
            .ok_or(AttributeError::AtMinimum(attribute))
    }
}

impl LedgerTransition for SetAttribute {
    type Error = AttributeError;

    fn name(&self) -> &'static str {
        "set_attribute"
    }

    fn pre_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let cost = attribute_cost(character, self.attribute, self.die);
        if !character.points.can_afford(PoolKind::Attribute, cost) {
            return Err(AttributeError::InsufficientPoints {
                attribute: self.attribute,
                target: self.die,
                cost,
                available: character.points.attribute_points,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        character: &mut Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let cost = attribute_cost(character, self.attribute, self.die);
        character.points.spend(PoolKind::Attribute, cost);
        character.attributes.set(self.attribute, self.die);
        Ok(())
    }

    fn post_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        ensure_pool(character, PoolKind::Attribute, AttributeError::PoolOverdrawn)
    }
}
