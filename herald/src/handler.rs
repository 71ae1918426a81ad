use std::{fmt, rc::Rc};

/// A subscriber callback.
///
/// Handlers are compared by identity: clones of the same handler are equal,
/// while two handlers built from identical closures are not. Keep a clone
/// around to [`unsubscribe`](crate::Event::unsubscribe) later.
///
/// ```rust
/// use herald::{Event, EventArgs, Handler, Payload};
///
/// let saved = Event::<EventArgs>::named("saved");
/// let log = Handler::new(|args: &EventArgs| println!("{} fired", args.event_name()));
/// saved.subscribe(&log);
/// assert!(saved.unsubscribe(&log));
/// ```
pub struct Handler<T>(Rc<dyn Fn(&T)>);

impl<T> Handler<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Handler(Rc::new(f))
    }

    #[inline]
    pub(crate) fn call(&self, args: &T) {
        (self.0)(args)
    }

    /// Returns true if both handles point to the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler(self.0.clone())
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Handler<T> {}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}
