//! Integration tests for the full membership flow: commands in, requests
//! out, server events reconciled, derived notifications published.

use parking_lot::Mutex;
use slirc_membership::{
    ChannelMessage, CommandContext, CommandHandler, Config, EventReconciler, InboundEvent,
    JoinCommand, JoinPartExecutor, MembershipObserver, MembershipStore, OutboundRequest,
    PartCommand, PendingJoins,
};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Default)]
struct RecordingObserver {
    joins: Mutex<Vec<String>>,
    parts: Mutex<Vec<String>>,
}

impl MembershipObserver for RecordingObserver {
    fn channel_joined(&self, channel: &str) {
        self.joins.lock().push(channel.to_string());
    }

    fn channel_parted(&self, channel: &str) {
        self.parts.lock().push(channel.to_string());
    }
}

struct Harness {
    store: Arc<MembershipStore>,
    pending: Arc<PendingJoins>,
    reconciler: EventReconciler,
    join: JoinCommand,
    part: PartCommand,
    observer: Arc<RecordingObserver>,
    out_rx: mpsc::UnboundedReceiver<OutboundRequest>,
    reply_rx: mpsc::UnboundedReceiver<String>,
    ctx: CommandContext,
}

fn harness(nick: &str, autojoin: &[&str]) -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();

    let config = Config {
        nick: nick.to_string(),
        channels: autojoin.iter().map(|c| c.to_string()).collect(),
    };
    let store = Arc::new(MembershipStore::new());
    let pending = Arc::new(PendingJoins::new());
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let (reply_tx, reply_rx) = mpsc::unbounded_channel();
    let executor = JoinPartExecutor::new(out_tx);
    let observer = Arc::new(RecordingObserver::default());

    let mut reconciler = EventReconciler::new(
        &config,
        Arc::clone(&store),
        Arc::clone(&pending),
        executor.clone(),
    );
    reconciler.set_observer(Arc::clone(&observer) as Arc<dyn MembershipObserver>);

    let join = JoinCommand::new(Arc::clone(&store), Arc::clone(&pending), executor.clone());
    let part = PartCommand::new(executor);
    let ctx = CommandContext::new("#y", reply_tx);

    Harness { store, pending, reconciler, join, part, observer, out_rx, reply_rx, ctx }
}

fn self_part(channel: &str, nick: &str) -> InboundEvent {
    InboundEvent::Part {
        channel: channel.to_string(),
        user: None,
        nick: nick.to_string(),
    }
}

#[tokio::test]
async fn join_is_confirmed_by_topic_reply_not_by_request() {
    let mut h = harness("wildbot", &[]);

    h.join.dispatch(&h.ctx, "#x");

    // Request went out, but the store is still empty.
    let req = h.out_rx.recv().await.unwrap();
    assert_eq!(req, OutboundRequest::Join(vec!["#x".to_string()]));
    assert!(h.store.is_empty());
    assert!(h.pending.contains("#x"));

    // Server confirms with the topic reply.
    h.reconciler.handle_event(&InboundEvent::TopicReply { channel: "#x".to_string() });

    assert!(h.store.contains("#x"));
    assert!(!h.pending.contains("#x"));
    assert_eq!(*h.observer.joins.lock(), vec!["#x"]);
}

#[tokio::test]
async fn confirmed_join_then_self_part_empties_membership() {
    let h = harness("wildbot", &[]);

    h.reconciler.handle_event(&InboundEvent::TopicReply { channel: "#x".to_string() });
    assert_eq!(h.store.snapshot(), vec!["#x".to_string()]);

    h.reconciler.handle_event(&self_part("#x", "wildbot"));

    assert!(h.store.is_empty());
    assert_eq!(*h.observer.parts.lock(), vec!["#x"]);
}

#[tokio::test]
async fn foreign_kick_and_part_leave_membership_alone() {
    let h = harness("wildbot", &[]);
    h.reconciler.handle_event(&InboundEvent::TopicReply { channel: "#x".to_string() });

    h.reconciler.handle_event(&InboundEvent::Kick {
        channel: "#x".to_string(),
        user: Some("intruder".to_string()),
        nick: "op".to_string(),
    });
    h.reconciler.handle_event(&self_part("#x", "somebody_else"));

    assert!(h.store.contains("#x"));
    assert!(h.observer.parts.lock().is_empty());
}

#[tokio::test]
async fn join_skips_members_and_requests_the_rest() {
    let mut h = harness("wildbot", &[]);
    h.reconciler.handle_event(&InboundEvent::TopicReply { channel: "#a".to_string() });

    h.join.dispatch(&h.ctx, "#a #b");

    let req = h.out_rx.recv().await.unwrap();
    assert_eq!(req, OutboundRequest::Join(vec!["#b".to_string()]));
}

#[tokio::test]
async fn join_with_no_params_replies_with_usage_and_sends_nothing() {
    let mut h = harness("wildbot", &[]);

    h.join.dispatch(&h.ctx, "");

    let reply = h.reply_rx.recv().await.unwrap();
    assert!(reply.contains("Usage: join"));
    assert!(h.out_rx.try_recv().is_err());
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn part_with_no_params_targets_the_origin_channel() {
    let mut h = harness("wildbot", &[]);
    // Never joined #y; PART is verbatim regardless of membership.
    h.part.dispatch(&h.ctx, "");

    let req = h.out_rx.recv().await.unwrap();
    assert_eq!(req, OutboundRequest::Part(vec!["#y".to_string()]));
}

#[tokio::test]
async fn ready_autojoins_configured_channels_once() {
    let mut h = harness("wildbot", &["#lobby", "#ops", "bogus"]);

    h.reconciler.handle_event(&InboundEvent::Ready);

    // Invalid configured entries are dropped by the executor's policy.
    let req = h.out_rx.recv().await.unwrap();
    assert_eq!(
        req,
        OutboundRequest::Join(vec!["#lobby".to_string(), "#ops".to_string()])
    );
    assert!(h.out_rx.try_recv().is_err());
    // Still unconfirmed until topic replies arrive.
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn message_fanout_reaches_generic_and_scoped_subscribers() {
    let mut h = harness("wildbot", &[]);

    let generic = Arc::new(Mutex::new(Vec::new()));
    let scoped = Arc::new(Mutex::new(Vec::new()));

    let g = Arc::clone(&generic);
    h.reconciler.router_mut().subscribe_all(move |msg: &ChannelMessage| {
        g.lock().push((msg.channel.clone(), msg.text.clone()));
    });
    let s = Arc::clone(&scoped);
    h.reconciler.router_mut().subscribe("#x", move |msg: &ChannelMessage| {
        s.lock().push(msg.text.clone());
    });

    h.reconciler.handle_event(&InboundEvent::ChannelMessage(ChannelMessage {
        channel: "#x".to_string(),
        nick: "alice".to_string(),
        text: "hello".to_string(),
    }));
    h.reconciler.handle_event(&InboundEvent::ChannelMessage(ChannelMessage {
        channel: "#z".to_string(),
        nick: "bob".to_string(),
        text: "\u{1}ACTION waves\u{1}".to_string(),
    }));

    assert_eq!(
        *generic.lock(),
        vec![
            ("#x".to_string(), "hello".to_string()),
            ("#z".to_string(), "\u{1}ACTION waves\u{1}".to_string()),
        ]
    );
    assert_eq!(*scoped.lock(), vec!["hello".to_string()]);
    // Messages never mutate membership.
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn out_of_order_part_before_confirmation_still_notifies() {
    let mut h = harness("wildbot", &[]);

    h.join.dispatch(&h.ctx, "#x");
    let _ = h.out_rx.recv().await.unwrap();

    // Kick echo races ahead of the topic reply: membership is untouched
    // (idempotent remove) but downstream still hears about the part.
    h.reconciler.handle_event(&InboundEvent::Kick {
        channel: "#x".to_string(),
        user: Some("wildbot".to_string()),
        nick: "op".to_string(),
    });

    assert!(h.store.is_empty());
    assert_eq!(*h.observer.parts.lock(), vec!["#x"]);

    // The late confirmation then lands normally.
    h.reconciler.handle_event(&InboundEvent::TopicReply { channel: "#x".to_string() });
    assert!(h.store.contains("#x"));
}
