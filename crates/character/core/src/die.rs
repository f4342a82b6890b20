//! Die-rank table.
//!
//! Attributes and skills are rated by a die type. The five die types form a
//! closed, totally ordered set; all comparisons and cost arithmetic go through
//! [`Die::rank`], never through string comparison.

use strum::IntoEnumIterator;

/// A proficiency level, lowest (`d4`) to highest (`d12`).
///
/// Declaration order is the rank order, so the derived `Ord` agrees with
/// [`Die::rank`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "lowercase")]
pub enum Die {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "d4"))]
    D4,
    #[cfg_attr(feature = "serde", serde(rename = "d6"))]
    D6,
    #[cfg_attr(feature = "serde", serde(rename = "d8"))]
    D8,
    #[cfg_attr(feature = "serde", serde(rename = "d10"))]
    D10,
    #[cfg_attr(feature = "serde", serde(rename = "d12"))]
    D12,
}

impl Die {
    /// Lowest die; every new skill starts here.
    pub const MIN: Die = Die::D4;
    /// Highest die.
    pub const MAX: Die = Die::D12;

    /// Numeric rank used for comparisons and costs (`d4` = 1 … `d12` = 5).
    pub const fn rank(self) -> i32 {
        match self {
            Die::D4 => 1,
            Die::D6 => 2,
            Die::D8 => 3,
            Die::D10 => 4,
            Die::D12 => 5,
        }
    }

    /// Rank of an optional die. Absent values rank 0, below every real die.
    pub fn rank_of(die: Option<Die>) -> i32 {
        die.map_or(0, Die::rank)
    }

    /// Rank of a textual token such as `"d8"`. Unknown tokens rank 0.
    pub fn rank_of_token(token: &str) -> i32 {
        Die::rank_of(token.parse().ok())
    }

    /// The next die up, or `None` at `d12`.
    pub fn next(self) -> Option<Die> {
        Die::iter().find(|die| die.rank() == self.rank() + 1)
    }

    /// The next die down, or `None` at `d4`.
    pub fn previous(self) -> Option<Die> {
        Die::iter().find(|die| die.rank() == self.rank() - 1)
    }
}
