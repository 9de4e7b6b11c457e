//! Membership state.
//!
//! Two structurally distinct sets:
//!
//! - [`MembershipStore`] is the confirmed truth: channels the client is
//!   known to occupy, mutated only by the reconciler in response to
//!   server events.
//! - [`PendingJoins`] tracks join requests that were sent but not yet
//!   confirmed. It exists purely for duplicate-request suppression and
//!   is never consulted to answer "am I in this channel".
//!
//! Both are shared by `Arc` handle. Dispatch is serial, so the interior
//! lock is uncontended; it only makes the handles `Send + Sync`.

use parking_lot::RwLock;
use std::collections::HashSet;

/// The set of channels the client is confirmed to be in.
///
/// Callers validate channel names before inserting; the store itself
/// does no validation. All operations are idempotent.
#[derive(Debug, Default)]
pub struct MembershipStore {
    channels: RwLock<HashSet<String>>,
}

impl MembershipStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a channel. Returns `true` if it was not already present.
    pub fn add(&self, channel: &str) -> bool {
        self.channels.write().insert(channel.to_string())
    }

    /// Remove a channel. Returns `true` if it was present.
    pub fn remove(&self, channel: &str) -> bool {
        self.channels.write().remove(channel)
    }

    /// Check whether a channel is present.
    pub fn contains(&self, channel: &str) -> bool {
        self.channels.read().contains(channel)
    }

    /// Take a detached snapshot of the current membership.
    ///
    /// The snapshot does not track later mutations. No ordering is
    /// guaranteed.
    pub fn snapshot(&self) -> Vec<String> {
        self.channels.read().iter().cloned().collect()
    }

    /// Number of channels currently tracked.
    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    /// Whether no channels are tracked.
    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }
}

/// Join requests that are in flight: sent, not yet confirmed.
///
/// A channel leaves this set when its `TopicReply` confirmation arrives.
/// A request the server never answers stays here for the connection
/// lifetime; there is no expiry at this layer.
#[derive(Debug, Default)]
pub struct PendingJoins {
    channels: RwLock<HashSet<String>>,
}

impl PendingJoins {
    /// Create an empty pending set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an in-flight join. Returns `true` if it was not already pending.
    pub fn insert(&self, channel: &str) -> bool {
        self.channels.write().insert(channel.to_string())
    }

    /// Clear a pending join (confirmation arrived, or it was abandoned).
    pub fn clear(&self, channel: &str) -> bool {
        self.channels.write().remove(channel)
    }

    /// Check whether a join is in flight for this channel.
    pub fn contains(&self, channel: &str) -> bool {
        self.channels.read().contains(channel)
    }
}
