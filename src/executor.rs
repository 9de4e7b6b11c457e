//! Outbound JOIN/PART request construction.

use crate::chan::is_channel_name;
use crate::event::OutboundRequest;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Builds JOIN/PART requests and hands them to the transport's write
/// queue.
///
/// Sends are fire-and-forget; the executor never mutates membership.
/// Confirmed membership changes arrive later as server events.
#[derive(Clone)]
pub struct JoinPartExecutor {
    out_tx: mpsc::UnboundedSender<OutboundRequest>,
}

impl JoinPartExecutor {
    /// Create an executor writing to the given queue.
    pub fn new(out_tx: mpsc::UnboundedSender<OutboundRequest>) -> Self {
        Self { out_tx }
    }

    /// Request to join the given channels.
    ///
    /// Empty and malformed entries are dropped from the batch without
    /// surfacing an error. If nothing survives filtering, no request is
    /// emitted at all.
    pub fn request_join<I, S>(&self, channels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut valid = Vec::new();
        for channel in channels {
            let channel = channel.as_ref();
            if channel.is_empty() || !is_channel_name(channel) {
                debug!(channel = %channel, "dropping invalid channel from join request");
                continue;
            }
            valid.push(channel.to_string());
        }

        if valid.is_empty() {
            return;
        }

        self.send(OutboundRequest::Join(valid));
    }

    /// Request to part the given channels, exactly as supplied.
    ///
    /// PART does not filter: the server answers with its own error for a
    /// channel we never occupied.
    pub fn request_part<I, S>(&self, channels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let channels: Vec<String> = channels
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();

        self.send(OutboundRequest::Part(channels));
    }

    fn send(&self, request: OutboundRequest) {
        if self.out_tx.send(request).is_err() {
            warn!("transport write queue closed, dropping outbound request");
        }
    }
}
