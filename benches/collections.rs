//! Benchmarks: sequential vs ordered placement, and the two ring behaviors.
//!
//! Every variant is filled to the same capacity `N = 64`, so the numbers
//! compare the cost of choosing a slot and shifting the tail.

use array_collections::{ArrayList, ArraySet, RingBuffer, Saturating, SortedList, SortedMap,
                        SortedSet, Wrapping};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const N: usize = 64;

// scrambled but deterministic input
fn key(i: usize) -> u32 {
    ((i * 37) % N) as u32
}

// Push

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("Push (N=64)");

    group.bench_function("ArrayList", |b| {
        b.iter(|| {
            let mut l = ArrayList::new(N);
            for i in 0..N {
                let _ = l.push(black_box(key(i)));
            }
            l
        })
    });

    group.bench_function("ArraySet", |b| {
        b.iter(|| {
            let mut s = ArraySet::new(N);
            for i in 0..N {
                let _ = s.insert(black_box(key(i)));
            }
            s
        })
    });

    group.bench_function("SortedList", |b| {
        b.iter(|| {
            let mut l: SortedList<u32> = SortedList::new(N);
            for i in 0..N {
                let _ = l.insert(black_box(key(i)));
            }
            l
        })
    });

    group.bench_function("SortedSet", |b| {
        b.iter(|| {
            let mut s: SortedSet<u32> = SortedSet::new(N);
            for i in 0..N {
                let _ = s.insert(black_box(key(i)));
            }
            s
        })
    });

    group.finish();
}

// Lookup

fn bench_find(c: &mut Criterion) {
    let mut list = ArrayList::new(N);
    let mut sorted: SortedSet<u32> = SortedSet::new(N);
    let mut map: SortedMap<u32, u32> = SortedMap::new(N);
    for i in 0..N {
        let _ = list.push(key(i));
        let _ = sorted.insert(key(i));
        let _ = map.add(key(i), i as u32);
    }

    let mut group = c.benchmark_group("Find (N=64)");

    group.bench_function("ArrayList linear", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(list.find(&black_box(i as u32)));
            }
        })
    });

    group.bench_function("SortedSet binary", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(sorted.find(&black_box(i as u32)));
            }
        })
    });

    group.bench_function("SortedMap try_get", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(map.try_get(&black_box(i as u32)));
            }
        })
    });

    group.finish();
}

// Ring

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("RingBuffer push/pop (N=64)");

    group.bench_function("Saturating", |b| {
        let mut ring: RingBuffer<u32, Saturating> = RingBuffer::new(N);
        b.iter(|| {
            for i in 0..N {
                let _ = ring.push(black_box(i as u32));
            }
            while let Some(x) = ring.pop() {
                black_box(x);
            }
        })
    });

    group.bench_function("Wrapping overwrite", |b| {
        let mut ring: RingBuffer<u32, Wrapping> = RingBuffer::new(N);
        b.iter(|| {
            for i in 0..2 * N {
                black_box(ring.push(black_box(i as u32)).ok());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_find, bench_ring);
criterion_main!(benches);
