//! The `join` command.

use super::{CommandContext, CommandHandler};
use crate::chan::is_channel_name;
use crate::error::{HandlerError, HandlerResult};
use crate::executor::JoinPartExecutor;
use crate::store::{MembershipStore, PendingJoins};
use std::sync::Arc;
use tracing::{debug, info};

/// `join <channel> [<channel> ...]`
///
/// Requests to join each listed channel. Channels the client already
/// occupies are skipped; the rest are recorded as in-flight and sent in
/// one batch. The command never marks a channel as joined itself —
/// membership only changes when the server confirms.
pub struct JoinCommand {
    store: Arc<MembershipStore>,
    pending: Arc<PendingJoins>,
    executor: JoinPartExecutor,
}

impl JoinCommand {
    /// Create the handler.
    pub fn new(
        store: Arc<MembershipStore>,
        pending: Arc<PendingJoins>,
        executor: JoinPartExecutor,
    ) -> Self {
        Self { store, pending, executor }
    }
}

impl CommandHandler for JoinCommand {
    fn name(&self) -> &'static str {
        "join"
    }

    fn usage(&self) -> &'static str {
        "[#channel] [#channel] [...]"
    }

    fn handle(&self, _ctx: &CommandContext, params: &str) -> HandlerResult {
        if params.trim().is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let mut batch = Vec::new();
        for channel in params.split_whitespace() {
            if self.store.contains(channel) {
                info!(channel = %channel, "not joining channel, already a member");
                continue;
            }
            if self.pending.contains(channel) {
                debug!(channel = %channel, "join already in flight, not re-requesting");
                continue;
            }

            // Malformed tokens still go into the batch so the executor's
            // drop policy applies in one place; only plausible names are
            // tracked as in flight.
            if is_channel_name(channel) {
                self.pending.insert(channel);
            }
            batch.push(channel);
        }

        if !batch.is_empty() {
            self.executor.request_join(batch);
        }

        Ok(())
    }
}
