//! Hindrance ledger: taking a hindrance awards hindrance points.
//!
//! Two totals are tracked separately:
//! - the spendable balance in [`PointPools::hindrance_points`](crate::state::PointPools)
//! - the points awarded, always recomputed from the held hindrances and
//!   capped at [`ProgressionConfig::hindrance_cap`]

use crate::config::ProgressionConfig;
use crate::error::{ErrorSeverity, RuleError};
use crate::ledger::LedgerTransition;
use crate::ledger::transition::ensure_pool;
use crate::state::{Character, Hindrance, HindranceCategory, PoolKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HindranceError {
    #[error("taking {name} would award {total} hindrance points, above the cap of {cap}")]
    CapExceeded { name: String, total: i32, cap: i32 },

    #[error("{category} hindrance {name} is not held")]
    NotHeld {
        name: String,
        category: HindranceCategory,
    },

    #[error("removing {name} takes back {cost} hindrance points, but only {available} are unspent")]
    PointsCommitted {
        name: String,
        cost: i32,
        available: i32,
    },

    #[error("hindrance pool overdrawn to {0}")]
    PoolOverdrawn(i32),
}

impl RuleError for HindranceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapExceeded { .. } | Self::NotHeld { .. } => ErrorSeverity::Validation,
            Self::PointsCommitted { .. } => ErrorSeverity::Recoverable,
            Self::PoolOverdrawn(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapExceeded { .. } => "HINDRANCE_CAP_EXCEEDED",
            Self::NotHeld { .. } => "HINDRANCE_NOT_HELD",
            Self::PointsCommitted { .. } => "HINDRANCE_POINTS_COMMITTED",
            Self::PoolOverdrawn(_) => "HINDRANCE_POOL_OVERDRAWN",
        }
    }
}

/// Total points awarded by every hindrance the character holds.
pub fn hindrance_points_awarded(character: &Character, config: &ProgressionConfig) -> i32 {
    character
        .hindrances
        .iter()
        .map(|hindrance| config.hindrance_points(hindrance.category))
        .sum()
}

/// Spendable hindrance balance.
pub fn hindrance_points(character: &Character) -> i32 {
    character.points.hindrance_points
}

/// Whether taking `candidate` keeps the awarded total within the cap.
pub fn is_valid_hindrance(
    character: &Character,
    candidate: &Hindrance,
    config: &ProgressionConfig,
) -> bool {
    awarded_with(character, candidate, config) <= config.hindrance_cap
}

fn awarded_with(character: &Character, candidate: &Hindrance, config: &ProgressionConfig) -> i32 {
    hindrance_points_awarded(character, config) + config.hindrance_points(candidate.category)
}

/// Takes a hindrance. Entries with the same `(name, category)` may repeat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddHindrance {
    pub hindrance: Hindrance,
}

impl AddHindrance {
    pub fn new(hindrance: Hindrance) -> Self {
        Self { hindrance }
    }
}

impl LedgerTransition for AddHindrance {
    type Error = HindranceError;

    fn name(&self) -> &'static str {
        "add_hindrance"
    }

    fn pre_validate(
        &self,
        character: &Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if is_valid_hindrance(character, &self.hindrance, config) {
            Ok(())
        } else {
            Err(HindranceError::CapExceeded {
                name: self.hindrance.name.clone(),
                total: awarded_with(character, &self.hindrance, config),
                cap: config.hindrance_cap,
            })
        }
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let award = config.hindrance_points(self.hindrance.category);
        character.points.refund(PoolKind::Hindrance, award);
        character.hindrances.push(self.hindrance.clone());
        Ok(())
    }
}

/// Gives up the first held hindrance matching both name and category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveHindrance {
    pub hindrance: Hindrance,
}

impl RemoveHindrance {
    pub fn new(hindrance: Hindrance) -> Self {
        Self { hindrance }
    }
}

impl LedgerTransition for RemoveHindrance {
    type Error = HindranceError;

    fn name(&self) -> &'static str {
        "remove_hindrance"
    }

    fn pre_validate(
        &self,
        character: &Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if character.hindrance_index(&self.hindrance).is_none() {
            return Err(HindranceError::NotHeld {
                name: self.hindrance.name.clone(),
                category: self.hindrance.category,
            });
        }

        let cost = config.hindrance_points(self.hindrance.category);
        if !character.points.can_afford(PoolKind::Hindrance, cost) {
            return Err(HindranceError::PointsCommitted {
                name: self.hindrance.name.clone(),
                cost,
                available: character.points.hindrance_points,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let index =
            character
                .hindrance_index(&self.hindrance)
                .ok_or_else(|| HindranceError::NotHeld {
                    name: self.hindrance.name.clone(),
                    category: self.hindrance.category,
                })?;

        character.hindrances.remove(index);
        character.points.spend(
            PoolKind::Hindrance,
            config.hindrance_points(self.hindrance.category),
        );
        Ok(())
    }

    fn post_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        ensure_pool(character, PoolKind::Hindrance, HindranceError::PoolOverdrawn)
    }
}
