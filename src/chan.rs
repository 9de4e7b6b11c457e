//! Channel name validation.
//!
//! Implements the channel-naming grammar from RFC 2812 §1.3. Every
//! channel identifier that crosses a trust boundary (operator input,
//! event payload) goes through [`is_channel_name`] before it can reach
//! the membership store.

/// Characters a channel name may start with.
pub const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

/// Maximum channel name length, prefix included.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Check whether a string is a syntactically valid IRC channel name.
///
/// Valid channel names:
/// - Start with `#`, `&`, `+`, or `!`
/// - Are at most 50 characters long
/// - Contain no space, comma, BEL, NUL, or other control characters
pub fn is_channel_name(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };
    if !CHANNEL_PREFIXES.contains(&first) {
        return false;
    }

    if name.chars().count() > MAX_CHANNEL_LEN {
        return false;
    }

    chars.all(|c| c != ' ' && c != ',' && !c.is_control())
}
