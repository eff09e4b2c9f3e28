//! Mauka Collections Benchmarks
//!
//! Criterion benchmarks for every container, driven by the shared
//! [`Workload`] inputs so results are comparable across structures.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use mauka_collections_lib::bench::{Workload, BENCH_SIZES};
use mauka_collections_lib::data_structures::{
    merge_sorted, AvlTree, CyclicDeque, LinkedDeque, OpenHashTable, PriorityQueue, RedBlackTree,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Benchmark the cyclic deque against `VecDeque`
fn bench_deques(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in BENCH_SIZES {
        let workload = Workload::new(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("cyclic_both_ends", size), &workload, |b, w| {
            b.iter(|| {
                let mut deque = CyclicDeque::new();
                for (i, &value) in w.ints.iter().enumerate() {
                    if i % 2 == 0 {
                        deque.add_first(black_box(value));
                    } else {
                        deque.add_last(black_box(value));
                    }
                }
                while let Ok(value) = deque.remove_first() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("linked_both_ends", size), &workload, |b, w| {
            b.iter(|| {
                let mut deque = LinkedDeque::new();
                for (i, &value) in w.ints.iter().enumerate() {
                    if i % 2 == 0 {
                        deque.add_first(black_box(value));
                    } else {
                        deque.add_last(black_box(value));
                    }
                }
                while let Ok(value) = deque.remove_last() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec_deque", size), &workload, |b, w| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for (i, &value) in w.ints.iter().enumerate() {
                    if i % 2 == 0 {
                        deque.push_front(black_box(value));
                    } else {
                        deque.push_back(black_box(value));
                    }
                }
                while let Some(value) = deque.pop_front() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark heap insertion, draining and cursor removal
fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in BENCH_SIZES {
        let workload = Workload::new(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add_then_drain", size), &workload, |b, w| {
            b.iter(|| {
                let mut queue = PriorityQueue::new();
                for &value in &w.ints {
                    queue.add(black_box(value));
                }
                while let Ok(value) = queue.remove() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("cursor_remove_half", size), &workload, |b, w| {
            b.iter_batched(
                || w.ints.iter().copied().collect::<PriorityQueue<i64>>(),
                |mut queue| {
                    let mut cursor = queue.cursor();
                    while let Ok(Some(&value)) = cursor.next(&queue) {
                        if value % 2 == 0 {
                            black_box(cursor.remove(&mut queue).ok());
                        }
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the open-addressed table with double hashing
fn bench_open_hash_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_hash_table");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in BENCH_SIZES {
        let workload = Workload::new(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("insert_students", size), &workload, |b, w| {
            b.iter_batched(
                || w.students.clone(),
                |students| {
                    let mut table = OpenHashTable::new();
                    for student in students {
                        black_box(table.add(student).ok());
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });

        let mut table = OpenHashTable::new();
        for student in workload.students.iter().cloned() {
            let _ = table.add(student);
        }
        group.bench_with_input(BenchmarkId::new("lookup", size), &workload, |b, w| {
            b.iter(|| {
                for student in &w.students {
                    black_box(table.contains(student));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("churn", size), &workload, |b, w| {
            b.iter_batched(
                || table.clone(),
                |mut table| {
                    for student in &w.students {
                        table.remove(student);
                        let _ = table.add(student.clone());
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark both balanced trees on the same permutation
fn bench_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("balanced_trees");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in BENCH_SIZES {
        let workload = Workload::new(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("avl_insert_remove", size), &workload, |b, w| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for &key in &w.keys {
                    tree.add(black_box(key));
                }
                for key in &w.keys {
                    black_box(tree.remove(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("rb_insert_remove", size), &workload, |b, w| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for &key in &w.keys {
                    tree.add(black_box(key));
                }
                for key in &w.keys {
                    black_box(tree.remove(key));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the k-way merge
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merging");
    group.sampling_mode(SamplingMode::Flat);

    for size in BENCH_SIZES {
        let workload = Workload::new(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("merge_sorted", size), &workload, |b, w| {
            b.iter_batched(
                || w.runs.clone(),
                |runs| black_box(merge_sorted(runs)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_deques, bench_priority_queue, bench_open_hash_table, bench_trees, bench_merge
}

criterion_main!(benches);
