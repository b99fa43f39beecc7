//! Model-based properties: each collection is driven by a random operation
//! sequence and compared against a `Vec` or `VecDeque` doing the same work.

use std::collections::VecDeque;

use array_collections::{ArrayList, ArraySet, Ascending, Descending, RingBuffer, SortOrder,
                        SortedList, SortedMap, SortedSet, Wrapping};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u8),
    Pop,
    RemoveFirst(u8),
    RemoveAll(u8),
}

fn op() -> impl Strategy<Value = Op> {
    // a narrow value range makes duplicates and hits likely
    prop_oneof![
        4 => (0u8..8).prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => (0u8..8).prop_map(Op::RemoveFirst),
        1 => (0u8..8).prop_map(Op::RemoveAll),
    ]
}

fn is_sorted_by<T, F: Fn(&T, &T) -> bool>(live: &[T], ok: F) -> bool {
    live.windows(2).all(|w| ok(&w[0], &w[1]))
}

fn has_duplicates(live: &[u8]) -> bool {
    let mut seen = [false; 256];
    live.iter().any(|&x| std::mem::replace(&mut seen[x as usize], true))
}

/// Drives a sorted list and a `Vec` kept in the same order through `ops`.
fn run_sorted<O: SortOrder<u8>>(capacity: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut list: SortedList<u8, O> = SortedList::new(capacity);
    let mut model: Vec<u8> = Vec::new();
    for op in ops {
        match *op {
            Op::Push(x) => {
                let pushed = list.insert(x).is_ok();
                prop_assert_eq!(pushed, model.len() < capacity);
                if pushed {
                    let index = model.iter().take_while(|&&y| O::precedes(&y, &x)).count();
                    model.insert(index, x);
                }
            }
            Op::Pop => {
                // the last element in sort order
                prop_assert_eq!(list.pop(), model.pop());
            }
            Op::RemoveFirst(x) => {
                let expected = model.iter().position(|&y| y == x);
                if let Some(index) = expected {
                    model.remove(index);
                }
                prop_assert_eq!(list.remove_first(&x), expected.is_some());
            }
            Op::RemoveAll(x) => {
                let before = model.len();
                model.retain(|&y| y != x);
                prop_assert_eq!(list.remove_all(&x), model.len() < before);
                prop_assert!(!list.contains(&x));
            }
        }
        prop_assert!(list.len() <= capacity);
        prop_assert!(is_sorted_by(list.as_slice(), |a, b| !O::precedes(b, a)));
        prop_assert_eq!(list.as_slice(), &model[..]);
    }
    Ok(())
}

proptest! {
    #[test]
    fn list_matches_vec(capacity in 1usize..10, ops in prop::collection::vec(op(), 0..64)) {
        let mut list = ArrayList::new(capacity);
        let mut model: Vec<u8> = Vec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    let pushed = list.push(x).is_ok();
                    prop_assert_eq!(pushed, model.len() < capacity);
                    if pushed {
                        model.push(x);
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(list.pop(), model.pop());
                }
                Op::RemoveFirst(x) => {
                    let expected = model.iter().position(|&y| y == x);
                    if let Some(index) = expected {
                        model.remove(index);
                    }
                    prop_assert_eq!(list.remove_first(&x), expected.is_some());
                }
                Op::RemoveAll(x) => {
                    let before = model.len();
                    model.retain(|&y| y != x);
                    prop_assert_eq!(list.remove_all(&x), model.len() < before);
                }
            }
            prop_assert!(list.len() <= list.capacity());
            prop_assert_eq!(list.as_slice(), &model[..]);
        }
    }

    #[test]
    fn sorted_list_stays_sorted(capacity in 1usize..10, ops in prop::collection::vec(op(), 0..64)) {
        run_sorted::<Ascending>(capacity, &ops)?;
        run_sorted::<Descending>(capacity, &ops)?;
    }

    #[test]
    fn sets_stay_unique(capacity in 1usize..10, values in prop::collection::vec(0u8..12, 0..48)) {
        let mut set = ArraySet::new(capacity);
        let mut sorted: SortedSet<u8> = SortedSet::new(capacity);
        for x in values {
            let present = set.contains(&x);
            let full = set.is_full();
            let inserted = set.insert(x).is_ok();
            prop_assert_eq!(inserted, !present && !full);
            let _ = sorted.insert(x);
            prop_assert!(!has_duplicates(set.as_slice()));
            prop_assert!(!has_duplicates(sorted.as_slice()));
            prop_assert!(is_sorted_by(sorted.as_slice(), |a, b| a < b));
            prop_assert_eq!(set.len(), sorted.len());
        }
    }

    #[test]
    fn find_agrees_with_linear_scan(values in prop::collection::vec(0u8..16, 0..12), probe in 0u8..16) {
        let mut sorted: SortedList<u8> = SortedList::new(12);
        for &x in &values {
            sorted.insert(x).unwrap();
        }
        let expected = sorted.as_slice().iter().position(|&y| y == probe);
        prop_assert_eq!(sorted.find(&probe), expected);
    }

    #[test]
    fn map_matches_model(entries in prop::collection::vec((0u8..10, any::<u16>()), 0..24)) {
        let mut map: SortedMap<u8, u16> = SortedMap::new(8);
        let mut model: Vec<(u8, u16)> = Vec::new();
        for (k, v) in entries {
            let fits = model.len() < 8 && !model.iter().any(|&(mk, _)| mk == k);
            prop_assert_eq!(map.add(k, v).is_ok(), fits);
            if fits {
                model.push((k, v));
            }
        }
        model.sort_by_key(|&(k, _)| k);
        let pairs: Vec<(u8, u16)> = map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&pairs, &model);
        for &(k, v) in &model {
            prop_assert_eq!(map.try_get(&k), Some(&v));
            prop_assert_eq!(map.remove(&k), Some(v));
            prop_assert!(!map.contains_key(&k));
        }
        prop_assert!(map.is_empty());
    }

    #[test]
    fn saturating_ring_is_bounded_fifo(capacity in 1usize..8, ops in prop::collection::vec(op(), 0..64)) {
        let mut ring: RingBuffer<u8> = RingBuffer::new(capacity);
        let mut model: VecDeque<u8> = VecDeque::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    let pushed = ring.push(x).is_ok();
                    prop_assert_eq!(pushed, model.len() < capacity);
                    if pushed {
                        model.push_back(x);
                    }
                }
                _ => {
                    prop_assert_eq!(ring.pop(), model.pop_front());
                }
            }
            prop_assert!(ring.iter().eq(model.iter()));
            prop_assert_eq!(ring.front(), model.front());
            prop_assert_eq!(ring.back(), model.back());
        }
    }

    #[test]
    fn wrapping_ring_keeps_newest(capacity in 1usize..8, values in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut ring: RingBuffer<u8, Wrapping> = RingBuffer::new(capacity);
        let mut model: VecDeque<u8> = VecDeque::new();
        for x in values {
            let evicted = if model.len() == capacity { model.pop_front() } else { None };
            model.push_back(x);
            prop_assert_eq!(ring.push(x).ok(), Some(evicted));
            prop_assert_eq!(ring.len(), model.len());
            for (i, expected) in model.iter().enumerate() {
                prop_assert_eq!(&ring[i], expected);
            }
        }
    }
}
