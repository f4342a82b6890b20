//! The five core attributes.

use strum::IntoEnumIterator;

use crate::die::Die;

/// Attribute names. Skills link to exactly one of these.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    Agility,
    Smarts,
    Spirit,
    Strength,
    Vigor,
}

/// Die ranks for all five attributes. There is no unset state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub agility: Die,
    pub smarts: Die,
    pub spirit: Die,
    pub strength: Die,
    pub vigor: Die,
}

impl Attributes {
    pub const fn get(&self, attribute: Attribute) -> Die {
        match attribute {
            Attribute::Agility => self.agility,
            Attribute::Smarts => self.smarts,
            Attribute::Spirit => self.spirit,
            Attribute::Strength => self.strength,
            Attribute::Vigor => self.vigor,
        }
    }

    pub fn set(&mut self, attribute: Attribute, die: Die) {
        let slot = match attribute {
            Attribute::Agility => &mut self.agility,
            Attribute::Smarts => &mut self.smarts,
            Attribute::Spirit => &mut self.spirit,
            Attribute::Strength => &mut self.strength,
            Attribute::Vigor => &mut self.vigor,
        };
        *slot = die;
    }

    /// Builder-style variant of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, attribute: Attribute, die: Die) -> Self {
        self.set(attribute, die);
        self
    }

    /// Iterates `(attribute, die)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Die)> + '_ {
        Attribute::iter().map(|attribute| (attribute, self.get(attribute)))
    }
}
