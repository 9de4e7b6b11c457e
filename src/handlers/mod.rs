//! Operator command handlers.
//!
//! The hosting bot framework owns command registration, parameter
//! splitting from the raw line, and the authorization gate; handlers
//! here receive the already-extracted parameter string plus a
//! [`CommandContext`] describing where the command came from.

mod join;
mod part;

pub use join::JoinCommand;
pub use part::PartCommand;

use crate::error::HandlerResult;
use tokio::sync::mpsc;
use tracing::debug;

/// The context an operator command was issued from.
pub struct CommandContext {
    /// Channel (or query target) the command arrived in.
    pub origin: String,
    reply_tx: mpsc::UnboundedSender<String>,
}

impl CommandContext {
    /// Create a context replying to the given queue.
    pub fn new(origin: impl Into<String>, reply_tx: mpsc::UnboundedSender<String>) -> Self {
        Self { origin: origin.into(), reply_tx }
    }

    /// Send a plain-text reply back to the requesting context.
    ///
    /// Fire-and-forget; a closed reply queue is absorbed.
    pub fn notify(&self, text: &str) {
        let _ = self.reply_tx.send(text.to_string());
    }
}

/// An operator-facing command.
pub trait CommandHandler {
    /// Command name as registered with the hosting framework.
    fn name(&self) -> &'static str;

    /// Usage string shown on a parameter error.
    fn usage(&self) -> &'static str;

    /// Whether the hosting framework must authorize the caller first.
    fn requires_auth(&self) -> bool {
        true
    }

    /// Handle the command with its parameter string.
    fn handle(&self, ctx: &CommandContext, params: &str) -> HandlerResult;

    /// Handle the command, mapping errors to user-facing replies.
    ///
    /// Usage errors are reported to the requesting context and logged at
    /// debug; nothing at this layer is fatal.
    fn dispatch(&self, ctx: &CommandContext, params: &str) {
        if let Err(e) = self.handle(ctx, params) {
            debug!(command = self.name(), code = e.error_code(), "command rejected");
            if let Some(reply) = e.to_user_reply(self.name(), self.usage()) {
                ctx.notify(&reply);
            }
        }
    }
}
