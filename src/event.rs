//! Event and request types exchanged with the protocol collaborators.
//!
//! Inbound events arrive already parsed and normalized: the wire parser
//! resolves the `channel`-vs-`channels` payload ambiguity of KICK/PART
//! and applies case folding before anything reaches this crate, so the
//! reconciler never branches on payload shape.

/// A message delivered to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    /// Channel the message was delivered to.
    pub channel: String,
    /// Nick of the sender.
    pub nick: String,
    /// Message body, CTCP framing intact.
    pub text: String,
}

/// A protocol event relevant to membership tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// RPL_TOPIC reply, sent by the server on successful join. This is
    /// the only event that confirms membership.
    TopicReply {
        /// Channel the topic belongs to.
        channel: String,
    },

    /// A KICK observed in a channel.
    Kick {
        /// Channel the kick happened in.
        channel: String,
        /// The kicked nick, when the parser extracted one.
        user: Option<String>,
        /// Reporting nick (the kicker, or the kicked user on some servers).
        nick: String,
    },

    /// A PART observed in a channel.
    Part {
        /// Channel that was left.
        channel: String,
        /// Explicit target nick, when the parser extracted one.
        user: Option<String>,
        /// Reporting nick (normally the parting user).
        nick: String,
    },

    /// A PRIVMSG targeted at a channel.
    ChannelMessage(ChannelMessage),

    /// End-of-MOTD: the connection is registered and ready. Triggers the
    /// configured autojoin list.
    Ready,

    /// Any event kind this subsystem does not react to.
    Other,
}

/// A request handed to the outbound write queue.
///
/// The protocol generator owns serialization; `Join` channel lists are
/// comma-joined on the wire, `Part` lists are emitted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundRequest {
    /// JOIN the listed channels. Every entry has passed validation.
    Join(Vec<String>),
    /// PART the listed channels, verbatim as supplied.
    Part(Vec<String>),
}
