//! The membership reconciliation state machine.
//!
//! Consumes normalized inbound protocol events and keeps the
//! [`MembershipStore`] synchronized with server reality. Membership is
//! event-confirmed: a join request is optimistic and changes nothing
//! here; only the server's RPL_TOPIC confirmation marks a channel
//! present, and only a kick/part naming the local identity marks it
//! absent. Per channel the machine is a two-state automaton,
//! `absent ⇄ present`.
//!
//! The reconciler is the sole mutator of the store. Everything else
//! holds a read-only handle.

use crate::chan::is_channel_name;
use crate::config::Config;
use crate::ctcp::display_text;
use crate::event::InboundEvent;
use crate::executor::JoinPartExecutor;
use crate::observer::MembershipObserver;
use crate::router::MessageRouter;
use crate::store::{MembershipStore, PendingJoins};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Applies inbound protocol events to the membership store and
/// publishes derived notifications.
pub struct EventReconciler {
    nick: String,
    autojoin: Vec<String>,
    store: Arc<MembershipStore>,
    pending: Arc<PendingJoins>,
    executor: JoinPartExecutor,
    router: MessageRouter,
    observer: Option<Arc<dyn MembershipObserver>>,
}

impl EventReconciler {
    /// Create a reconciler for the configured identity.
    pub fn new(
        config: &Config,
        store: Arc<MembershipStore>,
        pending: Arc<PendingJoins>,
        executor: JoinPartExecutor,
    ) -> Self {
        Self {
            nick: config.nick.clone(),
            autojoin: config.channels.clone(),
            store,
            pending,
            executor,
            router: MessageRouter::new(),
            observer: None,
        }
    }

    /// Set the membership change observer.
    pub fn set_observer(&mut self, observer: Arc<dyn MembershipObserver>) {
        self.observer = Some(observer);
    }

    /// Access the message router to register subscribers.
    pub fn router_mut(&mut self) -> &mut MessageRouter {
        &mut self.router
    }

    /// Apply one inbound event.
    ///
    /// Events are delivered serially by the hosting event loop; derived
    /// notifications fire synchronously before this returns.
    pub fn handle_event(&self, event: &InboundEvent) {
        match event {
            InboundEvent::TopicReply { channel } => self.confirm_join(channel),
            InboundEvent::Kick { channel, user, nick }
            | InboundEvent::Part { channel, user, nick } => {
                self.confirm_departure(channel, user.as_deref(), nick);
            }
            InboundEvent::ChannelMessage(msg) => {
                info!("({}) <{}> {}", msg.channel, msg.nick, display_text(&msg.text));
                self.router.route(msg);
            }
            InboundEvent::Ready => {
                info!(channels = self.autojoin.len(), "connection ready, joining configured channels");
                self.executor.request_join(&self.autojoin);
            }
            InboundEvent::Other => {}
        }
    }

    /// The sole confirmation path for joins: a topic reply proves the
    /// server accepted us into the channel.
    fn confirm_join(&self, channel: &str) {
        if !is_channel_name(channel) {
            // Store invariant: never track an invalid identifier.
            debug!(channel = %channel, "ignoring topic reply for invalid channel name");
            return;
        }

        self.pending.clear(channel);

        if self.store.add(channel) {
            info!(channel = %channel, "joined channel");
        } else {
            info!(channel = %channel, "join confirmed for already-tracked channel");
        }

        if let Some(observer) = &self.observer {
            observer.channel_joined(channel);
        }
    }

    /// Handle a kick or part. Only events naming the local identity
    /// mutate membership; other occupants leaving is not our business.
    fn confirm_departure(&self, channel: &str, user: Option<&str>, nick: &str) {
        let acted_upon = user.unwrap_or(nick);
        if acted_upon != self.nick {
            trace!(channel = %channel, nick = %acted_upon, "departure of another occupant, ignoring");
            return;
        }

        if !self.store.remove(channel) {
            debug!(channel = %channel, "departure from untracked channel");
        }
        info!(channel = %channel, "left channel");

        // Notify even when the channel was never tracked: the server said
        // we left, downstream gets told.
        if let Some(observer) = &self.observer {
            observer.channel_parted(channel);
        }
    }
}
