//! Point pools spent and refunded by the ledgers.

/// Identifies one of the three pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PoolKind {
    Attribute,
    Skill,
    Hindrance,
}

/// Spendable balances.
///
/// No ledger operation leaves any pool negative; operations that would are
/// rejected before the character is touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointPools {
    pub attribute_points: i32,
    pub skill_points: i32,
    pub hindrance_points: i32,
}

impl PointPools {
    pub const fn new(attribute_points: i32, skill_points: i32, hindrance_points: i32) -> Self {
        Self {
            attribute_points,
            skill_points,
            hindrance_points,
        }
    }

    pub const fn get(&self, kind: PoolKind) -> i32 {
        match kind {
            PoolKind::Attribute => self.attribute_points,
            PoolKind::Skill => self.skill_points,
            PoolKind::Hindrance => self.hindrance_points,
        }
    }

    fn slot_mut(&mut self, kind: PoolKind) -> &mut i32 {
        match kind {
            PoolKind::Attribute => &mut self.attribute_points,
            PoolKind::Skill => &mut self.skill_points,
            PoolKind::Hindrance => &mut self.hindrance_points,
        }
    }

    /// True when spending `cost` keeps the pool at or above zero.
    /// A negative cost is a refund. Any result outside `i32` is unaffordable.
    pub const fn can_afford(&self, kind: PoolKind, cost: i32) -> bool {
        match self.get(kind).checked_sub(cost) {
            Some(left) => left >= 0,
            None => false,
        }
    }

    pub fn spend(&mut self, kind: PoolKind, cost: i32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(cost);
    }

    pub fn refund(&mut self, kind: PoolKind, amount: i32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }
}
