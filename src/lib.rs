//! slirc-membership - channel membership tracking for IRC clients.
//!
//! Keeps a single source of truth for which channels the client is
//! currently in, reconciled against the server's event stream. A join
//! request is optimistic: a channel only becomes "joined" when the
//! server's topic reply confirms it, and only a kick or part naming the
//! local identity removes it. Operator `join`/`part` commands, outbound
//! request construction, and channel-message fan-out sit around that
//! core.
//!
//! Wire parsing, the transport, and the hosting framework's command
//! registration and authorization are external collaborators: events
//! come in as normalized [`InboundEvent`] values, requests go out as
//! [`OutboundRequest`] values on an `mpsc` write queue.
//!
//! # Wiring
//!
//! ```
//! use slirc_membership::{
//!     Config, EventReconciler, InboundEvent, JoinPartExecutor, MembershipStore, PendingJoins,
//! };
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//!
//! let config = Config { nick: "wildbot".into(), channels: vec!["#lobby".into()] };
//! let store = Arc::new(MembershipStore::new());
//! let pending = Arc::new(PendingJoins::new());
//! let (out_tx, _out_rx) = mpsc::unbounded_channel();
//! let executor = JoinPartExecutor::new(out_tx);
//!
//! let reconciler =
//!     EventReconciler::new(&config, Arc::clone(&store), pending, executor);
//!
//! reconciler.handle_event(&InboundEvent::TopicReply { channel: "#lobby".into() });
//! assert!(store.contains("#lobby"));
//! ```

pub mod chan;
pub mod config;
pub mod ctcp;
pub mod error;
pub mod event;
pub mod executor;
pub mod handlers;
pub mod observer;
pub mod reconciler;
pub mod router;
pub mod store;

pub use config::{Config, ConfigError};
pub use error::{HandlerError, HandlerResult};
pub use event::{ChannelMessage, InboundEvent, OutboundRequest};
pub use executor::JoinPartExecutor;
pub use handlers::{CommandContext, CommandHandler, JoinCommand, PartCommand};
pub use observer::MembershipObserver;
pub use reconciler::EventReconciler;
pub use router::MessageRouter;
pub use store::{MembershipStore, PendingJoins};
