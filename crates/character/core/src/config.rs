use crate::state::{HindranceCategory, PointPools};

/// How skill removal computes the refund.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillRefundPolicy {
    /// Refund exactly what was paid when the skill was acquired.
    #[default]
    AcquisitionCost,
    /// Recompute the cost from the current linked attribute. Lowering the
    /// attribute after acquisition can then refund more than was paid.
    CurrentCost,
}

/// Progression rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// Pools a new character starts with.
    pub starting_points: PointPools,
    /// Maximum points all held hindrances may award together.
    pub hindrance_cap: i32,
    /// Hindrance points spent to take an edge and refunded on removal.
    pub edge_cost: i32,
    pub minor_hindrance_points: i32,
    pub major_hindrance_points: i32,
    /// Skill cost when the linked attribute is above the skill's die.
    pub skill_cost_within_attribute: i32,
    /// Skill cost otherwise.
    pub skill_cost_beyond_attribute: i32,
    pub skill_refund_policy: SkillRefundPolicy,
}

impl ProgressionConfig {
    pub const DEFAULT_ATTRIBUTE_POINTS: i32 = 5;
    pub const DEFAULT_SKILL_POINTS: i32 = 12;
    pub const DEFAULT_HINDRANCE_CAP: i32 = 4;
    pub const DEFAULT_EDGE_COST: i32 = 2;

    pub fn new() -> Self {
        Self {
            starting_points: PointPools::new(
                Self::DEFAULT_ATTRIBUTE_POINTS,
                Self::DEFAULT_SKILL_POINTS,
                0,
            ),
            hindrance_cap: Self::DEFAULT_HINDRANCE_CAP,
            edge_cost: Self::DEFAULT_EDGE_COST,
            minor_hindrance_points: 1,
            major_hindrance_points: 2,
            skill_cost_within_attribute: 1,
            skill_cost_beyond_attribute: 2,
            skill_refund_policy: SkillRefundPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_refund_policy(mut self, policy: SkillRefundPolicy) -> Self {
        self.skill_refund_policy = policy;
        self
    }

    /// Points awarded by a hindrance of the given category.
    pub const fn hindrance_points(&self, category: HindranceCategory) -> i32 {
        match category {
            HindranceCategory::Minor => self.minor_hindrance_points,
            HindranceCategory::Major => self.major_hindrance_points,
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new()
    }
}
