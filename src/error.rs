//! Error types for command handling.
//!
//! There are no fatal conditions in this crate: every failure is either
//! absorbed locally (invalid channel tokens, redundant operations) or
//! reported back to the requesting context as a human-readable reply.

use thiserror::Error;

/// Errors that can occur while handling an operator command.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
        }
    }

    /// Convert to a reply for the requesting context.
    ///
    /// Returns `None` for errors that don't warrant a user-visible
    /// reply.
    pub fn to_user_reply(&self, command: &str, usage: &str) -> Option<String> {
        match self {
            Self::NeedMoreParams => Some(format!(
                "Not enough parameters. Usage: {command} {usage}"
            )),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
