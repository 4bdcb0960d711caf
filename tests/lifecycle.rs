//! Construction and destruction accounting for items that own resources.

use std::{
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

use ring_buffer::{PushError, RingBuffer};

#[derive(Default)]
struct Ledger {
    live: Cell<usize>,
    clones: Cell<usize>,
    // clone number (1-based) that panics, if any
    panic_on_clone: Cell<Option<usize>>,
    // id of the item whose next drop panics, if any
    panic_on_drop: Cell<Option<u32>>,
}

struct Item {
    id: u32,
    ledger: Rc<Ledger>,
}

impl Item {
    fn new(id: u32, ledger: &Rc<Ledger>) -> Self {
        ledger.live.set(ledger.live.get() + 1);
        Self {
            id,
            ledger: ledger.clone(),
        }
    }
}

impl Clone for Item {
    fn clone(&self) -> Self {
        let n = self.ledger.clones.get() + 1;
        self.ledger.clones.set(n);
        if self.ledger.panic_on_clone.get() == Some(n) {
            panic!("clone {n} failed");
        }
        Self::new(self.id, &self.ledger)
    }
}

impl Drop for Item {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get() - 1);
        if self.ledger.panic_on_drop.get() == Some(self.id) {
            self.ledger.panic_on_drop.set(None);
            panic!("drop of {} failed", self.id);
        }
    }
}

fn ids<const N: usize, const OVERWRITE: bool>(buf: &RingBuffer<Item, N, OVERWRITE>) -> Vec<u32> {
    buf.iter().map(|item| item.id).collect()
}

/// Four items in a capacity-4 buffer whose live window wraps past the end of storage.
fn wrapped(ledger: &Rc<Ledger>) -> RingBuffer<Item, 4> {
    let mut buf = RingBuffer::new();
    for id in 0..6 {
        buf.push(Item::new(id, ledger));
    }
    buf
}

#[test]
fn every_item_is_dropped_exactly_once() {
    let ledger = Rc::new(Ledger::default());
    {
        let mut buf = wrapped(&ledger);
        assert_eq!(ledger.live.get(), 4);

        drop(buf.pop_front());
        drop(buf.pop_back());
        assert_eq!(ledger.live.get(), 2);

        let copy = buf.clone();
        assert_eq!(ledger.live.get(), 4);
        drop(copy);
        assert_eq!(ledger.live.get(), 2);
    }
    assert_eq!(ledger.live.get(), 0);
}

#[test]
fn panicking_clone_rolls_back() {
    let ledger = Rc::new(Ledger::default());
    let buf = wrapped(&ledger);
    ledger.panic_on_clone.set(Some(3));

    let res = catch_unwind(AssertUnwindSafe(|| buf.clone()));
    assert!(res.is_err());
    // the two clones that succeeded were dropped again
    assert_eq!(ledger.live.get(), 4);
    assert_eq!(ids(&buf), [2, 3, 4, 5]);
}

#[test]
fn panicking_clone_from_leaves_target_empty() {
    let ledger = Rc::new(Ledger::default());
    let source = wrapped(&ledger);
    let mut target = RingBuffer::<Item, 4>::new();
    target.push(Item::new(99, &ledger));
    ledger.panic_on_clone.set(Some(2));

    let res = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(res.is_err());
    assert!(target.is_empty());
    assert_eq!(ledger.live.get(), 4);

    // the target is still usable
    ledger.panic_on_clone.set(None);
    target.clone_from(&source);
    assert_eq!(ids(&target), [2, 3, 4, 5]);
}

#[test]
fn failed_construction_leaves_buffer_unchanged() {
    let ledger = Rc::new(Ledger::default());
    let mut buf = wrapped(&ledger);
    let layout = (buf.head(), buf.tail(), buf.len());

    let res = buf.try_push_back_with(|| Err::<Item, _>("out of ids"));
    assert!(matches!(res, Err(PushError::Construct("out of ids"))));
    assert_eq!((buf.head(), buf.tail(), buf.len()), layout);
    assert_eq!(ids(&buf), [2, 3, 4, 5]);
    assert_eq!(ledger.live.get(), 4);

    let res = catch_unwind(AssertUnwindSafe(|| {
        buf.try_push_back_with(|| -> Result<Item, ()> { panic!("constructor panicked") })
    }));
    assert!(res.is_err());
    assert_eq!((buf.head(), buf.tail(), buf.len()), layout);
    assert_eq!(ids(&buf), [2, 3, 4, 5]);
}

#[test]
fn overwrite_drops_the_evicted_item() {
    let ledger = Rc::new(Ledger::default());
    let mut buf = wrapped(&ledger);
    buf.push(Item::new(6, &ledger));
    assert_eq!(ledger.live.get(), 4);
    assert_eq!(ids(&buf), [3, 4, 5, 6]);
}

#[test]
fn rejected_item_goes_back_to_caller() {
    let ledger = Rc::new(Ledger::default());
    let mut buf = RingBuffer::<Item, 2, false>::new();
    buf.extend([Item::new(0, &ledger), Item::new(1, &ledger)]);

    let rejected = buf.push_back(Item::new(2, &ledger)).unwrap_err();
    assert_eq!(rejected.into_inner().id, 2);
    assert_eq!(ledger.live.get(), 2);
    assert_eq!(ids(&buf), [0, 1]);

    let mut called = false;
    let res = buf.try_push_back_with(|| {
        called = true;
        Ok::<_, ()>(Item::new(3, &ledger))
    });
    assert!(matches!(res, Err(PushError::Full)));
    assert!(!called);
}

#[test]
fn into_iter_drops_unconsumed_items() {
    let ledger = Rc::new(Ledger::default());
    let buf = wrapped(&ledger);
    let first: Vec<u32> = buf.into_iter().take(1).map(|item| item.id).collect();
    assert_eq!(first, [2]);
    assert_eq!(ledger.live.get(), 0);
}

#[test]
fn take_moves_ownership() {
    let ledger = Rc::new(Ledger::default());
    let mut buf = wrapped(&ledger);
    let moved = buf.take();
    drop(buf);
    assert_eq!(ledger.live.get(), 4);
    assert_eq!(ids(&moved), [2, 3, 4, 5]);
    drop(moved);
    assert_eq!(ledger.live.get(), 0);
}

#[test]
fn panicking_drop_in_clear_keeps_buffer_consistent() {
    let ledger = Rc::new(Ledger::default());
    let mut buf = wrapped(&ledger);
    ledger.panic_on_drop.set(Some(3));

    let res = catch_unwind(AssertUnwindSafe(|| buf.clear()));
    assert!(res.is_err());
    assert_eq!(buf.len(), 2);
    assert_eq!((buf.tail() + buf.len()) % buf.capacity(), buf.head());
    assert_eq!(ids(&buf), [4, 5]);
    assert_eq!(ledger.live.get(), 2);

    buf.push(Item::new(6, &ledger));
    assert_eq!(ids(&buf), [4, 5, 6]);
    drop(buf);
    assert_eq!(ledger.live.get(), 0);
}
