//! The `part` command.

use super::{CommandContext, CommandHandler};
use crate::error::HandlerResult;
use crate::executor::JoinPartExecutor;

/// `part [<channel> ...]`
///
/// Requests to leave the listed channels, or the channel the command
/// was issued in when no parameters are given. Targets are passed to
/// the transport verbatim; the membership store is not consulted, and
/// it only changes once the server echoes the part back.
pub struct PartCommand {
    executor: JoinPartExecutor,
}

impl PartCommand {
    /// Create the handler.
    pub fn new(executor: JoinPartExecutor) -> Self {
        Self { executor }
    }
}

impl CommandHandler for PartCommand {
    fn name(&self) -> &'static str {
        "part"
    }

    fn usage(&self) -> &'static str {
        "[#channel] [#channel] [...]"
    }

    fn handle(&self, ctx: &CommandContext, params: &str) -> HandlerResult {
        let targets: Vec<String> = if params.trim().is_empty() {
            vec![ctx.origin.clone()]
        } else {
            params.split_whitespace().map(str::to_string).collect()
        };

        self.executor.request_part(targets);
        Ok(())
    }
}
