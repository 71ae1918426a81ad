//! Herald - typed, synchronous in-process events
//!
//! An [`Event`] holds an ordered list of [`Handler`]s and invokes them, in
//! subscription order, every time it is broadcast. Payloads implement
//! [`Payload`] and carry a [`Meta`] which the event stamps with its name,
//! a broadcast id and the time of the broadcast.
//!
//! ```rust
//! use herald::{Event, Payload, ValueArgs};
//!
//! let changed = Event::<ValueArgs<i64>>::named("changed");
//! changed.on(|args| println!("{} -> {}", args.event_name(), args.value()));
//! assert!(changed.broadcast(ValueArgs::new(42)));
//! ```
//!
//! Events can also feed tokio channels or a [`futures_util::Stream`],
//! see [`Event::subscribe_sink`] and [`Event::stream`].
//!
//! See `examples/counter.rs`.

mod config;
mod error;
mod event;
mod handler;
mod meta;
mod payload;
mod sink;

mod internal;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use handler::Handler;
pub use meta::Meta;
pub use payload::{EventArgs, PairArgs, Payload, ValueArgs};
pub use sink::{EventSink, EventStream, SinkError};

#[cfg(feature = "macros")]
pub use herald_macros::Payload;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type BroadcastId = u128;
