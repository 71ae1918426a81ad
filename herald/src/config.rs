/// Per-event configuration.
///
/// Use the builder methods to customize, or use [`Default`] for sensible defaults.
///
/// # Examples
///
/// ```rust
/// use herald::{Config, Event, EventArgs};
///
/// let config = Config::default()
///     .with_initial_capacity(16)   // Many subscribers expected
///     .with_trace_dispatch(true);  // Log every handler invocation
/// let closed = Event::<EventArgs>::with_config(Some("closed"), config);
/// assert_eq!(closed.subscriber_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity reserved when the subscriber list is allocated,
    /// which happens on the first subscription.
    /// Default: 4
    pub initial_capacity: usize,

    /// Emit a `trace` record for every handler invoked during a broadcast.
    /// Default: false
    pub trace_dispatch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 4,
            trace_dispatch: false,
        }
    }
}

impl Config {
    /// Set the capacity reserved for subscribers on first subscription.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable per-handler tracing during broadcasts.
    ///
    /// Off by default since it produces one record per handler per broadcast.
    pub fn with_trace_dispatch(mut self, enabled: bool) -> Self {
        self.trace_dispatch = enabled;
        self
    }
}
