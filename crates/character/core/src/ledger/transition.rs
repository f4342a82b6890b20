use crate::config::ProgressionConfig;
use crate::state::{Character, PoolKind};

/// Defines how a ledger operation changes a character.
///
/// The engine runs the hooks in order against a private copy of the caller's
/// character: `pre_validate` on the untouched copy, `apply` to mutate it, and
/// `post_validate` on the result. The copy is handed back only if every hook
/// succeeds, so a rejection never leaks a partial update.
pub trait LedgerTransition {
    type Error;

    /// Short operation name used in logs.
    fn name(&self) -> &'static str;

    /// Validates pre-conditions using the character **before** mutation.
    fn pre_validate(
        &self,
        _character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the operation. Implementations may assume `pre_validate` passed.
    fn apply(&self, character: &mut Character, config: &ProgressionConfig)
    -> Result<(), Self::Error>;

    /// Validates post-conditions using the character **after** mutation.
    fn post_validate(
        &self,
        _character: &Character,
        _config: &ProgressionConfig,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Post-condition shared by every ledger: the touched pool is not negative.
pub(crate) fn ensure_pool<E>(
    character: &Character,
    kind: PoolKind,
    overdrawn: impl FnOnce(i32) -> E,
) -> Result<(), E> {
    let balance = character.points.get(kind);
    if balance < 0 {
        Err(overdrawn(balance))
    } else {
        Ok(())
    }
}
