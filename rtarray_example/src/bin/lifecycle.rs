//! Builds two arrays of lifecycle-reporting values and lets them drop.
//!
//! Run with `RUST_LOG=trace` to also see the container's storage events.

use rtarray::RtArray;
use rtarray_example::{Event, Ledger, Tracked};

const LEN: usize = 20;

fn main() {
    env_logger::init();

    let ledger = Ledger::new();
    {
        let generated: RtArray<Tracked<'_>> =
            RtArray::from_fn(LEN, |i| Tracked::new(i as i32, &ledger));
        let filled: RtArray<Tracked<'_>> = RtArray::from_elem(LEN, Tracked::new(5, &ledger));
        log::info!(
            "built {} generated and {} filled elements",
            generated.len(),
            filled.len()
        );
    }

    let events = ledger.events();
    let count = |f: fn(&Event) -> bool| events.iter().filter(|e| f(e)).count();
    log::info!(
        "created: {}, copied: {}, destroyed: {}",
        count(|e| matches!(e, Event::Created(_))),
        count(|e| matches!(e, Event::Copied(_))),
        count(|e| matches!(e, Event::Destroyed(_))),
    );
}
