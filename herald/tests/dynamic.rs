//! The untyped boundary: payloads and handlers passed as `dyn Any`.

use herald::{Error, Event, EventArgs, Handler, ValueArgs};
use std::{any::Any, cell::Cell, rc::Rc};

#[test]
fn test_broadcast_dyn_with_matching_args() {
    let event = Event::<ValueArgs<i32>>::named("dyn");
    let seen = Rc::new(Cell::new(0));
    let s = seen.clone();
    event.on(move |args| s.set(*args.value()));

    let args: Box<dyn Any> = Box::new(ValueArgs::new(11));
    assert!(event.broadcast_dyn(Some(args)).unwrap());
    assert_eq!(seen.get(), 11);
}

#[test]
fn test_broadcast_dyn_with_wrong_args() {
    let event = Event::<ValueArgs<i32>>::named("dyn");
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    event.on(move |_| c.set(c.get() + 1));

    let err = event
        .broadcast_dyn(Some(Box::new(ValueArgs::new("text"))))
        .unwrap_err();
    assert_eq!(err, Error::ArgsType("ValueArgs<i32>".into()));

    let err = event.broadcast_dyn(Some(Box::new(EventArgs::new()))).unwrap_err();
    assert!(err.is_args_type());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_broadcast_dyn_without_args() {
    let base = Event::<EventArgs>::new();
    base.on(|_| {});
    assert!(base.broadcast_dyn(None).unwrap());

    let custom = Event::<ValueArgs<u8>>::new();
    custom.on(|_| {});
    let err = custom.broadcast_dyn(None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Event arguments must be of type ValueArgs<u8>"
    );
}

#[test]
fn test_broadcast_dyn_without_subscribers_still_checks_type() {
    let event = Event::<ValueArgs<u8>>::new();
    assert!(event.broadcast_dyn(Some(Box::new(1u8))).is_err());
    assert!(!event.broadcast_dyn(Some(Box::new(ValueArgs::new(1u8)))).unwrap());
}

#[test]
fn test_subscribe_dyn_accepts_handler() {
    let event = Event::<EventArgs>::new();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let handler = Handler::new(move |_: &EventArgs| c.set(c.get() + 1));

    event.subscribe_dyn(Some(&handler)).unwrap();
    assert!(event.fire());
    assert_eq!(calls.get(), 1);

    assert!(event.unsubscribe_dyn(Some(&handler)).unwrap());
    assert!(!event.unsubscribe_dyn(Some(&handler)).unwrap());
    assert_eq!(event.subscriber_count(), 0);
}

#[test]
fn test_subscribe_dyn_rejects_absent_handler() {
    let event = Event::<EventArgs>::new();
    let err = event.subscribe_dyn(None).unwrap_err();
    assert_eq!(err, Error::InvalidArgument("handler is absent".into()));
    assert!(event.unsubscribe_dyn(None).unwrap_err().is_invalid_argument());
    assert_eq!(event.subscriber_count(), 0);
}

#[test]
fn test_subscribe_dyn_rejects_non_handler() {
    let event = Event::<EventArgs>::new();
    let not_callable = 42_u32;
    let wrong_payload = Handler::new(|_: &ValueArgs<u8>| {});

    let err = event.subscribe_dyn(Some(&not_callable)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("Handler<EventArgs>"));

    assert!(event.subscribe_dyn(Some(&wrong_payload)).is_err());
    assert!(event.unsubscribe_dyn(Some(&not_callable)).is_err());
    assert_eq!(event.subscriber_count(), 0);
}
