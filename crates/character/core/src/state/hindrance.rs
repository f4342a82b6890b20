//! Hindrances: flaws that award hindrance points when taken.

/// Severity of a hindrance.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum HindranceCategory {
    Minor,
    Major,
}

/// A hindrance definition. Characters hold these directly, keyed by
/// `(name, category)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hindrance {
    pub name: String,
    pub category: HindranceCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Free-form grouping such as `Physical` or `Social`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl Hindrance {
    pub fn new(name: impl Into<String>, category: HindranceCategory) -> Self {
        Self {
            name: name.into(),
            category,
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn minor(name: impl Into<String>) -> Self {
        Self::new(name, HindranceCategory::Minor)
    }

    pub fn major(name: impl Into<String>) -> Self {
        Self::new(name, HindranceCategory::Major)
    }

    /// Whether `other` names the same `(name, category)` entry.
    pub fn same_entry(&self, other: &Hindrance) -> bool {
        self.name == other.name && self.category == other.category
    }
}
