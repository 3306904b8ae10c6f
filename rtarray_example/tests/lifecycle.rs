use rtarray::prelude::*;
use rtarray_example::{Event, Ledger, Tracked};

#[test]
fn generator_creates_in_order_and_drop_reverses_it() {
    let ledger = Ledger::new();
    let arr: RtArray<Tracked<'_>> = RtArray::from_fn(20, |i| Tracked::new(i as i32, &ledger));
    let created = ledger.ids(|e| match e {
        Event::Created(x) => Some(*x),
        _ => None,
    });
    assert_eq!(created, (0..20).collect::<Vec<_>>());
    assert!(ledger.destroyed().is_empty());

    drop(arr);
    assert_eq!(ledger.destroyed(), (0..20).rev().collect::<Vec<_>>());
}

#[test]
fn fill_copies_the_prototype_into_every_slot() {
    let ledger = Ledger::new();
    let arr: RtArray<Tracked<'_>> = RtArray::from_elem(20, Tracked::new(5, &ledger));
    let copies = ledger
        .events()
        .into_iter()
        .filter(|e| *e == Event::Copied(5))
        .count();
    assert_eq!(copies, 20);
    // The prototype itself is consumed by the constructor.
    assert_eq!(ledger.destroyed(), [5]);
    assert!(arr.iter().all(|t| t.x == 5));

    ledger.clear();
    drop(arr);
    assert_eq!(ledger.destroyed().len(), 20);
}

#[test]
fn take_moves_without_touching_elements() {
    let ledger = Ledger::new();
    let mut a: RtArray<Tracked<'_>> = RtArray::from_fn(4, |i| Tracked::new(i as i32, &ledger));
    ledger.clear();

    let b = a.take();
    assert!(ledger.events().is_empty());
    assert_eq!(a.len(), 0);
    assert_eq!(b.iter().map(|t| t.x).collect::<Vec<_>>(), [0, 1, 2, 3]);

    drop(a);
    assert!(ledger.events().is_empty());
    drop(b);
    assert_eq!(ledger.destroyed(), [3, 2, 1, 0]);
}

#[test]
fn deep_copy_clones_each_element_once() {
    let ledger = Ledger::new();
    let a = RtArray::from_fn(3, |i| Tracked::new(i as i32 * 10, &ledger))
        .with_copy_policy::<DeepCopy>();
    ledger.clear();

    let b = a.clone();
    assert_eq!(
        ledger.events(),
        [Event::Copied(0), Event::Copied(10), Event::Copied(20)]
    );
    drop(a);
    assert_eq!(b.iter().map(|t| t.x).collect::<Vec<_>>(), [0, 10, 20]);
}

#[test]
fn failing_generator_cleans_up_what_it_built() {
    let ledger = Ledger::new();
    let r: Result<RtArray<Tracked<'_>>, _> = RtArray::from_fallible_fn(10, |i| {
        if i == 6 {
            Err("no more")
        } else {
            Ok(Tracked::new(i as i32, &ledger))
        }
    });
    let err = r.unwrap_err();
    assert_eq!(err.index(), Some(6));
    assert_eq!(err.to_string(), "initializer failed at index 6");
    assert_eq!(ledger.destroyed(), [5, 4, 3, 2, 1, 0]);
}

#[test]
fn owning_iterator_hands_out_elements_and_drops_the_rest() {
    let ledger = Ledger::new();
    let arr: RtArray<Tracked<'_>> = RtArray::from_fn(5, |i| Tracked::new(i as i32, &ledger));
    let mut it = arr.into_iter();
    let first = it.next().map(|t| t.x);
    assert_eq!(first, Some(0));
    assert_eq!(ledger.destroyed(), [0]);
    drop(it);
    assert_eq!(ledger.destroyed(), [0, 4, 3, 2, 1]);
}
