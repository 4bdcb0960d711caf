use ring_buffer::{swap, RingBuffer};

fn walk<T: Clone, const N: usize, const OVERWRITE: bool>(buf: &RingBuffer<T, N, OVERWRITE>) -> Vec<T> {
    let mut out = Vec::new();
    let (mut it, end) = (buf.begin(), buf.end());
    while it != end {
        out.extend(it.get().cloned());
        it.advance();
    }
    out
}

#[test]
fn overwrite_then_pop_then_clear() {
    let mut buf = RingBuffer::<_, 3>::new();
    for i in 1..=4 {
        buf.push(i);
    }
    assert_eq!(buf.front(), Some(&2));
    assert_eq!(buf.back(), Some(&4));
    assert_eq!(buf.len(), 3);
    assert!(buf.is_full());

    buf.pop_front();
    assert_eq!(buf.front(), Some(&3));
    assert_eq!(buf.back(), Some(&4));

    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
}

#[test]
fn rejecting_buffer_drops_overflow() {
    let mut buf = RingBuffer::<_, 3, false>::new();
    let rejected: Vec<_> = (1..=4)
        .filter_map(|i| buf.push_back(i).err())
        .map(|err| err.into_inner())
        .collect();

    assert_eq!(rejected, [4]);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.front(), Some(&1));
    assert_eq!(buf.back(), Some(&3));
}

#[test]
fn iteration_follows_logical_order_across_wraparound() {
    let mut buf = RingBuffer::<_, 4>::new();
    buf.extend([1, 2, 3, 4]);
    buf.pop_front();
    buf.pop_front();
    buf.extend([5, 6]);

    assert_eq!(walk(&buf), [3, 4, 5, 6]);
    assert!(buf.iter().eq(&[3, 4, 5, 6]));
    assert_eq!(buf.to_vec(), [3, 4, 5, 6]);
}

#[test]
fn push_sequence_tracks_front_and_back() {
    let mut buf = RingBuffer::<_, 5, false>::new();
    for i in 0..5 {
        buf.push_back(i * 10).unwrap();
        assert_eq!(buf.front(), Some(&0));
        assert_eq!(buf.back(), Some(&(i * 10)));
        assert_eq!(buf.len(), i as usize + 1);
    }
}

#[test]
fn overwrite_keeps_last_capacity_items() {
    let mut buf = RingBuffer::<_, 4>::new();
    buf.extend(0..11);
    assert!(buf.is_full());
    assert_eq!(buf.len(), buf.capacity());
    assert_eq!(walk(&buf), [7, 8, 9, 10]);
}

#[test]
fn pop_front_on_empty_is_noop() {
    let mut buf = RingBuffer::<String, 2>::new();
    assert_eq!(buf.pop_front(), None);
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!((buf.head(), buf.tail()), (0, 0));
}

#[test]
fn clone_is_independent() {
    let mut unwrapped = RingBuffer::<_, 4>::new();
    unwrapped.extend(["a", "b"].map(String::from));

    let mut wrapped = RingBuffer::<_, 4>::new();
    wrapped.extend(["a", "b", "c", "d", "e", "f"].map(String::from));
    assert_ne!(wrapped.as_slices().1.len(), 0);

    for original in [unwrapped, wrapped] {
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push(String::from("z"));
        copy.front_mut().unwrap().push('!');
        assert_ne!(copy, original);
        assert!(!original.iter().any(|s| s == "z" || s.ends_with('!')));
    }
}

#[test]
fn clone_assignment_copies_layout_and_self_copy_is_unchanged() {
    let mut source = RingBuffer::<_, 3>::new();
    source.extend((0..9).map(|i| vec![i, i + 1, i + 2]));

    let mut target = RingBuffer::<_, 3>::new();
    target.push(vec![42]);
    target.clone_from(&source);
    assert_eq!((target.head(), target.tail()), (source.head(), source.tail()));

    target.pop_front();
    assert_eq!(walk(&target), [vec![7, 8, 9], vec![8, 9, 10]]);

    let before = source.to_vec();
    source = source.clone();
    assert_eq!(source, before);
}

#[test]
fn clear_behaves_like_fresh_buffer() {
    let mut used = RingBuffer::<_, 3>::new();
    used.extend(0..7);
    used.clear();

    let mut fresh = RingBuffer::<_, 3>::new();
    for buf in [&mut used, &mut fresh] {
        buf.extend([1, 2]);
    }
    assert_eq!(used, fresh);
    assert_eq!((used.head(), used.tail()), (fresh.head(), fresh.tail()));
}

#[test]
fn swap_exchanges_contents() {
    let mut a = RingBuffer::<_, 4>::new();
    a.extend(0..6);
    let mut b = RingBuffer::<_, 4>::from([9]);

    swap(&mut a, &mut b);
    assert_eq!(a, [9]);
    assert_eq!(b, [2, 3, 4, 5]);
    assert_eq!((a.front(), a.back()), (Some(&9), Some(&9)));
    assert_eq!((b.front(), b.back()), (Some(&2), Some(&5)));

    a.swap(&mut b);
    assert_eq!(a.len(), 4);
    assert_eq!(b.len(), 1);
}

#[test]
fn take_leaves_source_empty() {
    let mut a = RingBuffer::<_, 3>::new();
    a.extend([vec![1], vec![2], vec![3], vec![4]]);

    let b = a.take();
    assert_eq!(b, [vec![2], vec![3], vec![4]]);
    assert!(a.is_empty());
    assert_eq!((a.head(), a.tail()), (0, 0));

    a.push(vec![5]);
    assert_eq!(a, [vec![5]]);
}
