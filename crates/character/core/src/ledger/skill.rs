//! Skill ledger: acquisition and removal paid from the skill pool.
//!
//! A skill is cheaper while its die is below the linked attribute. New skills
//! always start at [`Die::MIN`], so acquisition costs the cheaper rate only
//! when the linked attribute has been raised above `d4`.

use crate::config::{ProgressionConfig, SkillRefundPolicy};
use crate::die::Die;
use crate::error::{ErrorSeverity, RuleError};
use crate::ledger::LedgerTransition;
use crate::ledger::transition::ensure_pool;
use crate::state::{Attribute, Character, PoolKind, Skill, SkillDefinition};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    #[error("skill {0} is already held")]
    AlreadyHeld(String),

    #[error("skill {0} is not held")]
    NotHeld(String),

    #[error("skill {skill} costs {cost} skill points, but only {available} remain")]
    InsufficientPoints {
        skill: String,
        cost: i32,
        available: i32,
    },

    #[error("skill pool overdrawn to {0}")]
    PoolOverdrawn(i32),
}

impl RuleError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyHeld(_) | Self::NotHeld(_) => ErrorSeverity::Validation,
            Self::InsufficientPoints { .. } => ErrorSeverity::Recoverable,
            Self::PoolOverdrawn(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyHeld(_) => "SKILL_ALREADY_HELD",
            Self::NotHeld(_) => "SKILL_NOT_HELD",
            Self::InsufficientPoints { .. } => "SKILL_INSUFFICIENT_POINTS",
            Self::PoolOverdrawn(_) => "SKILL_POOL_OVERDRAWN",
        }
    }
}

/// Skill points for a skill at `die` linked to `attribute`, given the
/// character's current attributes.
pub fn skill_cost(
    character: &Character,
    attribute: Attribute,
    die: Die,
    config: &ProgressionConfig,
) -> i32 {
    if character.attributes.get(attribute).rank() > die.rank() {
        config.skill_cost_within_attribute
    } else {
        config.skill_cost_beyond_attribute
    }
}

/// Skill points refunded when `skill` is removed under the configured policy.
pub fn skill_refund(character: &Character, skill: &Skill, config: &ProgressionConfig) -> i32 {
    match config.skill_refund_policy {
        SkillRefundPolicy::AcquisitionCost => skill.acquisition_cost,
        SkillRefundPolicy::CurrentCost => {
            skill_cost(character, skill.linked_attribute, Die::MIN, config)
        }
    }
}

/// Acquires a skill at the lowest die.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddSkill {
    pub definition: SkillDefinition,
}

impl AddSkill {
    pub fn new(definition: SkillDefinition) -> Self {
        Self { definition }
    }

    fn cost(&self, character: &Character, config: &ProgressionConfig) -> i32 {
        skill_cost(character, self.definition.linked_attribute, Die::MIN, config)
    }
}

impl LedgerTransition for AddSkill {
    type Error = SkillError;

    fn name(&self) -> &'static str {
        "add_skill"
    }

    fn pre_validate(
        &self,
        character: &Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if character.has_skill(&self.definition.name) {
            return Err(SkillError::AlreadyHeld(self.definition.name.clone()));
        }

        let cost = self.cost(character, config);
        if !character.points.can_afford(PoolKind::Skill, cost) {
            return Err(SkillError::InsufficientPoints {
                skill: self.definition.name.clone(),
                cost,
                available: character.points.skill_points,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let cost = self.cost(character, config);
        character.points.spend(PoolKind::Skill, cost);
        character
            .skills
            .push(Skill::acquired(&self.definition, cost));
        Ok(())
    }

    fn post_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        ensure_pool(character, PoolKind::Skill, SkillError::PoolOverdrawn)
    }
}

/// Removes a held skill by name and refunds it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveSkill {
    pub name: String,
}

impl RemoveSkill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&SkillDefinition> for RemoveSkill {
    fn from(definition: &SkillDefinition) -> Self {
        Self::new(definition.name.clone())
    }
}

impl LedgerTransition for RemoveSkill {
    type Error = SkillError;

    fn name(&self) -> &'static str {
        "remove_skill"
    }

    fn pre_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        if character.has_skill(&self.name) {
            Ok(())
        } else {
            Err(SkillError::NotHeld(self.name.clone()))
        }
    }

    fn apply(
        &self,
        character: &mut Character,
        config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        let refund = character
            .skill(&self.name)
            .map(|skill| skill_refund(character, skill, config))
            .ok_or_else(|| SkillError::NotHeld(self.name.clone()))?;

        character.points.refund(PoolKind::Skill, refund);
        character.skills.retain(|skill| skill.name != self.name);
        Ok(())
    }

    fn post_validate(
        &self,
        character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        ensure_pool(character, PoolKind::Skill, SkillError::PoolOverdrawn)
    }
}
