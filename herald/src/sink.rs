use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures_util::Stream;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::{Error, Event, Handler, Payload, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("The sink is closed.")]
    Closed,

    #[error("The sink has reached its capacity.")]
    Full,
}

/// A push-based consumer that an [`Event`] can forward its payloads into.
///
/// Implemented for tokio's bounded and unbounded mpsc senders. A bridge holds
/// its own clone of the sender, so a channel stays open for as long as either
/// the caller or a subscribed bridge still holds one.
pub trait EventSink<T>: 'static {
    fn is_closed(&self) -> bool;

    /// Push a copy of `args` without blocking.
    fn push(&self, args: &T) -> std::result::Result<(), SinkError>;
}

impl<T: Clone + 'static> EventSink<T> for mpsc::UnboundedSender<T> {
    fn is_closed(&self) -> bool {
        mpsc::UnboundedSender::is_closed(self)
    }

    fn push(&self, args: &T) -> std::result::Result<(), SinkError> {
        self.send(args.clone()).map_err(|_| SinkError::Closed)
    }
}

impl<T: Clone + 'static> EventSink<T> for mpsc::Sender<T> {
    fn is_closed(&self) -> bool {
        mpsc::Sender::is_closed(self)
    }

    fn push(&self, args: &T) -> std::result::Result<(), SinkError> {
        self.try_send(args.clone()).map_err(|e| match e {
            TrySendError::Full(_) => SinkError::Full,
            TrySendError::Closed(_) => SinkError::Closed,
        })
    }
}

impl<T: Payload + Clone> Event<T> {
    /// Forward every broadcast into a clone of `sink`.
    ///
    /// The caller keeps ownership of `sink`. The bridge's clone is released once
    /// the returned handler is unsubscribed and dropped; the event never closes
    /// the caller's handle.
    /// Payloads the sink rejects later on (closed or full) are logged and dropped;
    /// the broadcaster never sees those failures.
    ///
    /// Fails with [`Error::InvalidArgument`] if the sink is already closed.
    pub fn subscribe_sink<S>(&self, sink: &S) -> Result<Handler<T>>
    where
        S: EventSink<T> + Clone,
    {
        if sink.is_closed() {
            return Err(Error::InvalidArgument("sink is closed".into()));
        }
        Ok(self.bridge(sink.clone()))
    }

    /// Bridge this event into a new unbounded [`EventStream`].
    ///
    /// The stream ends once the returned handler is unsubscribed and dropped,
    /// or when the event itself is dropped.
    pub fn stream(&self) -> (Handler<T>, EventStream<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (self.bridge(tx), EventStream { receiver: rx })
    }

    fn bridge<S>(&self, sink: S) -> Handler<T>
    where
        S: EventSink<T>,
    {
        let label = self.to_string();
        self.on(move |args: &T| {
            if let Err(err) = sink.push(args) {
                warn!(event = %label, error = %err, "Sink rejected event, dropping it");
            }
        })
    }
}

/// Stream of payloads broadcast by an [`Event`], created by [`Event::stream`].
#[derive(Debug)]
pub struct EventStream<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> EventStream<T> {
    /// Take the next buffered payload without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Number of payloads buffered and not yet consumed.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T> Stream for EventStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}
