use std::time::SystemTime;

use crate::{BroadcastId, Meta};

/// Trait for argument types delivered by an [`Event`](crate::Event).
///
/// Every payload carries a [`Meta`] which the event stamps right before
/// dispatch. Implement this for your own argument struct, or use
/// `#[derive(Payload)]` on a struct with a `meta: Meta` field.
///
/// # Implicit payloads
///
/// [`synthesize`](Payload::synthesize) decides whether an event may be
/// broadcast without arguments. The default returns `None`, meaning the
/// caller must always supply an instance. Only the base [`EventArgs`] opts in.
pub trait Payload: 'static {
    fn meta(&self) -> &Meta;

    fn meta_mut(&mut self) -> &mut Meta;

    /// Builds an instance for a broadcast that supplied no arguments.
    fn synthesize() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }

    /// Name of the event that last delivered this payload.
    fn event_name(&self) -> &str {
        self.meta().event_name()
    }

    fn when_occurred(&self) -> Option<SystemTime> {
        self.meta().when_occurred()
    }

    fn broadcast_id(&self) -> BroadcastId {
        self.meta().id()
    }
}

/// Arguments of an event that carries no data besides its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventArgs {
    meta: Meta,
}

impl EventArgs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Payload for EventArgs {
    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    fn synthesize() -> Option<Self> {
        Some(EventArgs::new())
    }
}

/// Arguments carrying a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueArgs<V> {
    meta: Meta,
    value: V,
}

impl<V> ValueArgs<V> {
    pub fn new(value: V) -> Self {
        Self {
            meta: Meta::new(),
            value,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: 'static> Payload for ValueArgs<V> {
    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

impl<V> From<V> for ValueArgs<V> {
    fn from(value: V) -> Self {
        ValueArgs::new(value)
    }
}

/// Arguments carrying two values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairArgs<A, B> {
    meta: Meta,
    first: A,
    second: B,
}

impl<A, B> PairArgs<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            meta: Meta::new(),
            first,
            second,
        }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: 'static, B: 'static> Payload for PairArgs<A, B> {
    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

impl<A, B> From<(A, B)> for PairArgs<A, B> {
    fn from((first, second): (A, B)) -> Self {
        PairArgs::new(first, second)
    }
}
