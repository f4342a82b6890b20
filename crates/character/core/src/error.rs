//! Common error infrastructure for character-core.
//!
//! Each ledger defines its own error enum next to the operations it validates.
//! This module provides the classification shared by all of them.
//!
//! None of these errors are fatal: a rejected operation leaves the caller's
//! character untouched and reports why.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The character cannot afford the change right now. Freeing points
    /// elsewhere may make the same operation succeed.
    ///
    /// Examples: not enough skill points, hindrance points committed to edges
    Recoverable,

    /// The request itself is invalid for this character.
    ///
    /// Examples: skill already held, edge prerequisites unmet, hindrance cap
    Validation,

    /// A pool invariant broke after a mutation. Indicates a rules bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all character-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not impact
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this variant, suitable for metrics and tests.
    fn error_code(&self) -> &'static str;
}
