//! An element type that reports its own lifecycle, for watching what an
//! [`RtArray`](rtarray::RtArray) does with its elements.

use std::cell::RefCell;

/// Something that happened to a [`Tracked`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Built from scratch.
    Created(i32),
    /// Cloned from another value.
    Copied(i32),
    /// Dropped.
    Destroyed(i32),
}

/// Records [`Event`]s in the order they happen.
#[derive(Debug, Default)]
pub struct Ledger {
    events: RefCell<Vec<Event>>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Recorded events that match `pred`, by payload.
    pub fn ids(&self, pred: impl Fn(&Event) -> Option<i32>) -> Vec<i32> {
        self.events.borrow().iter().filter_map(pred).collect()
    }

    /// Payloads of all `Destroyed` events, in order.
    pub fn destroyed(&self) -> Vec<i32> {
        self.ids(|e| match e {
            Event::Destroyed(x) => Some(*x),
            _ => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// A value that logs and records its creation, copies and destruction.
#[derive(Debug)]
pub struct Tracked<'a> {
    /// The payload reported in every event.
    pub x: i32,
    ledger: &'a Ledger,
}

impl<'a> Tracked<'a> {
    /// Creates a value, recording an [`Event::Created`].
    pub fn new(x: i32, ledger: &'a Ledger) -> Self {
        log::info!("creating tracked x: {}", x);
        ledger.record(Event::Created(x));
        Tracked { x, ledger }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        log::info!("copying tracked x: {}", self.x);
        self.ledger.record(Event::Copied(self.x));
        Tracked {
            x: self.x,
            ledger: self.ledger,
        }
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        log::info!("destroying tracked x: {}", self.x);
        self.ledger.record(Event::Destroyed(self.x));
    }
}
