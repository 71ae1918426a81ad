use std::{sync::Arc, time::SystemTime};

use uuid::Uuid;

use crate::BroadcastId;

/// Metadata stamped onto every payload by the event that delivers it.
///
/// - `id`: unique identifier of the broadcast that last delivered the payload.
/// - `event_name`: name of the delivering event, empty when the event is unnamed.
/// - `when_occurred`: wall-clock time of the broadcast.
///
/// A payload that was never broadcast carries the blank metadata produced by
/// [`Meta::default`]: id `0`, empty name and no timestamp. The fields can only
/// be written by [`Event`](crate::Event) at broadcast time, so handlers always
/// observe the values of the broadcast they are part of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meta {
    id: BroadcastId,
    event_name: Arc<str>,
    when_occurred: Option<SystemTime>,
}

impl Meta {
    /// Blank metadata, equivalent to [`Meta::default`].
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stamp(&mut self, event_name: Arc<str>) {
        self.id = Uuid::new_v4().as_u128();
        self.event_name = event_name;
        self.when_occurred = Some(SystemTime::now());
    }

    /// Identifier of the last broadcast, `0` if never broadcast.
    pub fn id(&self) -> BroadcastId {
        self.id
    }

    /// Name of the event that delivered the payload.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn when_occurred(&self) -> Option<SystemTime> {
        self.when_occurred
    }

    /// Returns true once the payload has been delivered at least once.
    pub fn is_stamped(&self) -> bool {
        self.when_occurred.is_some()
    }
}
