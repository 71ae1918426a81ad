use std::{any::Any, cell::RefCell, fmt, sync::Arc};

use tracing::trace;

use crate::{Config, Error, EventArgs, Handler, Payload, Result, internal::short_type_name};

/// A typed event with an ordered list of subscribers.
///
/// Handlers are invoked synchronously, on the caller's thread, in the order
/// they were subscribed. The subscriber list is allocated on the first
/// subscription, so an event nobody listens to costs no more than the struct.
///
/// # Re-entrancy
///
/// A handler may subscribe or unsubscribe handlers (itself included) on the
/// event that is invoking it. Each broadcast dispatches to a snapshot of the
/// list taken when the broadcast starts:
/// - handlers added during a broadcast are first invoked by the next one,
/// - handlers removed during a broadcast still receive the current one.
///
/// # Panics
///
/// A panicking handler is not isolated: the panic unwinds out of
/// [`broadcast`](Event::broadcast) and the remaining handlers of that pass are
/// skipped. The subscriber list itself is left untouched.
///
/// # Examples
///
/// ```rust
/// use herald::{Event, EventArgs, Payload};
/// use std::{cell::RefCell, rc::Rc};
///
/// let tick = Event::<EventArgs>::named("tick");
/// let seen = Rc::new(RefCell::new(String::new()));
/// let s = seen.clone();
/// tick.on(move |args| *s.borrow_mut() = args.event_name().to_string());
///
/// assert!(tick.fire());
/// assert_eq!(*seen.borrow(), "tick");
/// ```
pub struct Event<T: Payload> {
    name: Option<Arc<str>>,
    config: Config,
    handlers: RefCell<Option<Vec<Handler<T>>>>,
}

impl<T: Payload> Event<T> {
    /// Create an unnamed event.
    pub fn new() -> Self {
        Self::with_config(None::<Arc<str>>, Config::default())
    }

    /// Create an event whose name is stamped onto every payload it delivers.
    pub fn named<N>(name: N) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self::with_config(Some(name), Config::default())
    }

    pub fn with_config<N>(name: Option<N>, config: Config) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self {
            name: name.map(Into::into),
            config,
            handlers: RefCell::new(None),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append `handler` to the subscriber list.
    ///
    /// Subscribing the same handler twice makes it run twice per broadcast.
    pub fn subscribe(&self, handler: &Handler<T>) {
        let count = {
            let mut handlers = self.handlers.borrow_mut();
            let capacity = self.config.initial_capacity;
            let list = handlers.get_or_insert_with(|| Vec::with_capacity(capacity));
            list.push(handler.clone());
            list.len()
        };
        trace!(event = %self, subscribers = count, "Handler subscribed");
    }

    /// Wrap `f` in a [`Handler`], subscribe it and return it for later removal.
    pub fn on<F>(&self, f: F) -> Handler<T>
    where
        F: Fn(&T) + 'static,
    {
        let handler = Handler::new(f);
        self.subscribe(&handler);
        handler
    }

    /// Remove the first subscription of `handler`.
    ///
    /// Returns false if the handler was not subscribed.
    pub fn unsubscribe(&self, handler: &Handler<T>) -> bool {
        // The removed handler is dropped after the borrow ends, its captures may
        // reach back into this event.
        let removed = {
            let mut handlers = self.handlers.borrow_mut();
            handlers.as_mut().and_then(|list| {
                list.iter()
                    .position(|h| h.ptr_eq(handler))
                    .map(|idx| list.remove(idx))
            })
        };
        let found = removed.is_some();
        trace!(
            event = %self,
            found,
            subscribers = self.subscriber_count(),
            "Handler unsubscribed"
        );
        found
    }

    /// Remove every subscriber and release the list.
    pub fn unsubscribe_all(&self) {
        let removed = self.handlers.borrow_mut().take();
        trace!(
            event = %self,
            removed = removed.as_ref().map_or(0, Vec::len),
            "All handlers unsubscribed"
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().as_ref().map_or(0, Vec::len)
    }

    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    #[cfg(test)]
    pub(crate) fn is_allocated(&self) -> bool {
        self.handlers.borrow().is_some()
    }

    fn snapshot(&self) -> Vec<Handler<T>> {
        self.handlers.borrow().as_ref().cloned().unwrap_or_default()
    }

    fn stamp_name(&self) -> Arc<str> {
        self.name.clone().unwrap_or_else(|| Arc::from(""))
    }

    /// Deliver `args` to every subscriber, in subscription order.
    ///
    /// Returns false, without stamping or invoking anything, when there are no
    /// subscribers.
    pub fn broadcast(&self, mut args: T) -> bool {
        self.broadcast_in_place(&mut args)
    }

    /// Same as [`broadcast`](Event::broadcast).
    #[inline]
    pub fn notify(&self, args: T) -> bool {
        self.broadcast(args)
    }

    /// Deliver a caller-owned payload, leaving the stamped metadata on it.
    pub fn broadcast_in_place(&self, args: &mut T) -> bool {
        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            trace!(event = %self, "Broadcast without subscribers");
            return false;
        }

        args.meta_mut().stamp(self.stamp_name());
        trace!(
            event = %self,
            subscribers = snapshot.len(),
            broadcast_id = %args.broadcast_id(),
            "Broadcasting"
        );
        for (idx, handler) in snapshot.iter().enumerate() {
            if self.config.trace_dispatch {
                trace!(event = %self, handler = idx, "Dispatching to handler");
            }
            handler.call(args);
        }
        true
    }

    /// Broadcast with optional arguments.
    ///
    /// Without arguments the payload is built by [`Payload::synthesize`]; types
    /// that do not support it fail with [`Error::ArgsType`].
    pub fn try_broadcast(&self, args: Option<T>) -> Result<bool> {
        let args = match args {
            Some(args) => args,
            None => T::synthesize().ok_or_else(Error::args_type::<T>)?,
        };
        Ok(self.broadcast(args))
    }

    /// Broadcast arguments whose type is only known at runtime.
    ///
    /// Fails with [`Error::ArgsType`] if `args` is not a `T`, or is absent and
    /// `T` cannot be synthesized.
    pub fn broadcast_dyn(&self, args: Option<Box<dyn Any>>) -> Result<bool> {
        let args = match args {
            Some(boxed) => boxed
                .downcast::<T>()
                .map(|args| *args)
                .map_err(|_| Error::args_type::<T>())?,
            None => return self.try_broadcast(None),
        };
        Ok(self.broadcast(args))
    }

    /// Subscribe a handler passed through an untyped boundary.
    ///
    /// Fails with [`Error::InvalidArgument`] if `handler` is absent or is not a
    /// `Handler<T>`.
    pub fn subscribe_dyn(&self, handler: Option<&(dyn Any + 'static)>) -> Result<()> {
        self.subscribe(Self::downcast_handler(handler)?);
        Ok(())
    }

    /// Untyped counterpart of [`unsubscribe`](Event::unsubscribe).
    pub fn unsubscribe_dyn(&self, handler: Option<&(dyn Any + 'static)>) -> Result<bool> {
        Ok(self.unsubscribe(Self::downcast_handler(handler)?))
    }

    fn downcast_handler<'a>(handler: Option<&'a (dyn Any + 'static)>) -> Result<&'a Handler<T>> {
        let handler = handler.ok_or(Error::InvalidArgument("handler is absent".into()))?;
        handler.downcast_ref::<Handler<T>>().ok_or_else(|| {
            Error::InvalidArgument(
                format!("expected Handler<{}>", short_type_name::<T>()).into(),
            )
        })
    }
}

impl Event<EventArgs> {
    /// Broadcast a fresh [`EventArgs`].
    pub fn fire(&self) -> bool {
        self.broadcast(EventArgs::new())
    }
}

impl<T: Payload> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Payload> fmt::Display for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:Event<{}>",
            self.name().unwrap_or("Unnamed"),
            short_type_name::<T>()
        )
    }
}

impl<T: Payload> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("payload", &short_type_name::<T>())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
