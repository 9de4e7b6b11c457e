//! CTCP ACTION rendering for channel log lines.
//!
//! CTCP messages are embedded in PRIVMSG bodies between `\x01`
//! delimiters. The only kind this crate cares about is ACTION (the
//! `/me` command), which is rewritten for display so a log reads
//! `*waves*` instead of raw control characters.

use std::borrow::Cow;

/// The CTCP delimiter character.
const CTCP_DELIM: char = '\x01';

/// The ACTION marker, delimiter included.
const ACTION_PREFIX: &str = "\x01ACTION";

/// Rewrite a message body for display.
///
/// A CTCP ACTION body becomes `*content*` with the framing stripped;
/// anything else is returned unchanged.
///
/// # Example
///
/// ```
/// use slirc_membership::ctcp::display_text;
///
/// assert_eq!(display_text("\x01ACTION waves\x01"), "*waves*");
/// assert_eq!(display_text("hello"), "hello");
/// ```
pub fn display_text(text: &str) -> Cow<'_, str> {
    let Some(rest) = text.strip_prefix(ACTION_PREFIX) else {
        return Cow::Borrowed(text);
    };

    let rest = rest.strip_suffix(CTCP_DELIM).unwrap_or(rest);
    Cow::Owned(format!("*{}*", rest.trim()))
}
