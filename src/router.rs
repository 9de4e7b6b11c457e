//! Channel message fan-out.

use crate::event::ChannelMessage;
use std::collections::HashMap;

type Callback = Box<dyn Fn(&ChannelMessage) + Send + Sync>;

/// Fans a channel message out to subscribers.
///
/// Two registries: all-channel subscribers receive every message,
/// per-channel subscribers only receive messages for the channel they
/// registered. Delivery is synchronous, in registration order, within
/// the dispatch turn that routed the message. The router holds no other
/// state.
#[derive(Default)]
pub struct MessageRouter {
    all: Vec<Callback>,
    scoped: HashMap<String, Vec<Callback>>,
}

impl MessageRouter {
    /// Create a router with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to messages for every channel.
    pub fn subscribe_all<F>(&mut self, callback: F)
    where
        F: Fn(&ChannelMessage) + Send + Sync + 'static,
    {
        self.all.push(Box::new(callback));
    }

    /// Subscribe to messages for one channel.
    pub fn subscribe<F>(&mut self, channel: &str, callback: F)
    where
        F: Fn(&ChannelMessage) + Send + Sync + 'static,
    {
        self.scoped
            .entry(channel.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Deliver a message to all matching subscribers.
    pub fn route(&self, message: &ChannelMessage) {
        for callback in &self.all {
            callback(message);
        }
        if let Some(callbacks) = self.scoped.get(&message.channel) {
            for callback in callbacks {
                callback(message);
            }
        }
    }
}
