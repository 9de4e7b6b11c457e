//! Membership change observer trait.
//!
//! Downstream modules subscribe to confirmed membership changes through
//! this trait instead of a string-keyed event emitter, so the contract
//! is type-checked. Notifications fire synchronously inside the dispatch
//! turn that produced them; implementations must not block.

/// Trait for observing confirmed membership changes.
///
/// Methods are called by the reconciler after the store has been
/// updated. A notification does not imply the state changed: a repeated
/// confirmation or a part for an untracked channel still notifies
/// (best-effort parity with what the server reported).
pub trait MembershipObserver: Send + Sync {
    /// Called when the server confirmed a channel join.
    fn channel_joined(&self, channel: &str);

    /// Called when the local identity was kicked from or parted a channel.
    fn channel_parted(&self, channel: &str);
}
