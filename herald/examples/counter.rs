use herald::*;
use std::{cell::Cell, rc::Rc};

// A counter that announces changes and resets
struct Counter {
    value: Cell<i64>,
    changed: Event<ValueArgs<i64>>,
    reset: Event<EventArgs>,
}

impl Counter {
    fn new() -> Self {
        Self {
            value: Cell::new(0),
            changed: Event::named("changed"),
            reset: Event::named("reset"),
        }
    }

    fn add(&self, delta: i64) {
        self.value.set(self.value.get() + delta);
        self.changed.broadcast(ValueArgs::new(self.value.get()));
    }

    fn reset(&self) {
        self.value.set(0);
        self.reset.fire();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let counter = Rc::new(Counter::new());

    let printer = counter
        .changed
        .on(|args| println!("{} -> {}", args.event_name(), args.value()));

    // Stop listening for resets after the first one
    let weak = Rc::downgrade(&counter);
    counter.reset.on(move |args| {
        println!("{} at {:?}", args.event_name(), args.when_occurred());
        if let Some(counter) = weak.upgrade() {
            counter.reset.unsubscribe_all();
        }
    });

    counter.add(1);
    counter.add(41);
    counter.reset();
    counter.reset();

    counter.changed.unsubscribe(&printer);
    println!("{} has {} subscribers", counter.changed, counter.changed.subscriber_count());

    // The same event, driven through the untyped boundary
    counter.changed.on(|args| println!("dyn -> {}", args.value()));
    counter.changed.broadcast_dyn(Some(Box::new(ValueArgs::new(7_i64))))?;
    if let Err(e) = counter.changed.broadcast_dyn(None) {
        println!("expected failure: {e}");
    }
    Ok(())
}
