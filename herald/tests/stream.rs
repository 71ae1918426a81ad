//! Bridging events into tokio channels and streams.

use futures_util::StreamExt;
use herald::{Event, EventArgs, Payload, SinkError, ValueArgs};
use tokio::sync::mpsc;

#[tokio::test]
async fn test_stream_yields_broadcasts_in_order() {
    let event = Event::<ValueArgs<u32>>::named("numbers");
    let (_handler, mut stream) = event.stream();

    for n in 1..=3 {
        assert!(event.broadcast(ValueArgs::new(n)));
    }

    let mut values = Vec::new();
    for _ in 0..3 {
        let args = stream.next().await.expect("stream ended early");
        assert_eq!(args.event_name(), "numbers");
        values.push(*args.value());
    }
    assert_eq!(values, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_stream_ends_when_event_is_dropped() {
    let event = Event::<EventArgs>::named("short");
    let (handler, stream) = event.stream();
    event.fire();
    drop(handler);
    drop(event);

    let collected: Vec<_> = stream.collect().await;
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].event_name(), "short");
}

#[tokio::test]
async fn test_unsubscribed_bridge_stops_forwarding() {
    let event = Event::<ValueArgs<u8>>::new();
    let (handler, mut stream) = event.stream();
    event.broadcast(ValueArgs::new(1));

    assert!(event.unsubscribe(&handler));
    drop(handler);
    assert!(!event.broadcast(ValueArgs::new(2)));

    assert_eq!(*stream.next().await.unwrap().value(), 1);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_sink_feeds_async_consumer() {
    let event = Event::<ValueArgs<String>>::named("lines");
    let (tx, mut rx) = mpsc::channel(8);
    event.subscribe_sink(&tx).unwrap();
    // The bridge holds its own sender, the channel closes once both are gone
    drop(tx);

    let consumer = tokio::spawn(async move {
        let mut lines = Vec::new();
        while let Some(args) = rx.recv().await {
            lines.push(args.into_value());
        }
        lines
    });

    event.broadcast(ValueArgs::new("a".to_string()));
    event.broadcast(ValueArgs::new("b".to_string()));
    event.unsubscribe_all();

    assert_eq!(consumer.await.unwrap(), vec!["a", "b"]);
}

#[test]
fn test_sink_error_messages() {
    assert_eq!(SinkError::Closed.to_string(), "The sink is closed.");
    assert_eq!(
        SinkError::Full.to_string(),
        "The sink has reached its capacity."
    );
}
