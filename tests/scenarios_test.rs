// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests driving every container through the public API.

use mauka_collections_lib::data_structures::{
    AvlTree, BalanceCheck, Color, CyclicDeque, CyclicDequeConfig, OpenHashTable, PriorityQueue,
    RedBlackTree, ReverseOrder,
};
use mauka_collections_lib::error::CollectionError;
use mauka_collections_lib::generator::{DataGenerator, Student};

#[test]
fn test_deque_wraparound_resize() {
    let mut deque = CyclicDeque::with_config(CyclicDequeConfig::new().with_initial_capacity(10));
    for value in 0..10 {
        deque.add_first(value);
    }
    assert_eq!(deque.capacity(), 10);

    deque.add_first(10);
    assert_eq!(deque.capacity(), 20);
    assert_eq!(deque.len(), 11);
    assert_eq!(deque.remove_first(), Ok(10));
    assert_eq!(
        deque.iter().copied().collect::<Vec<_>>(),
        (0..10).rev().collect::<Vec<_>>()
    );
}

#[test]
fn test_deque_large_growth() {
    let mut deque = CyclicDeque::new();
    for value in 0..100_000 {
        if value % 2 == 0 {
            deque.add_last(value);
        } else {
            deque.add_first(value);
        }
    }
    assert_eq!(deque.len(), 100_000);
    assert!(deque.contains(&99_999));
    assert_eq!(deque.get_first(), Ok(&99_999));
    assert_eq!(deque.get_last(), Ok(&99_998));
}

#[test]
fn test_hash_double_hashing() {
    let students = vec![
        Student::new(1, "Kalani", 91),
        Student::new(2, "Makoa", 78),
        Student::new(3, "Leilani", 85),
        Student::new(4, "Keoni", 66),
    ];
    let mut table = OpenHashTable::new();
    for student in &students {
        assert_eq!(table.add(student.clone()), Ok(true));
    }
    assert_eq!(table.add(Student::new(3, "Leilani", 85)), Ok(false));
    assert_eq!(table.len(), 4);

    let size = table.table_size();
    for student in &students {
        OpenHashTable::validate_probe_sequence(student, size).unwrap();
        let mut slots: Vec<usize> = (0..size)
            .map(|i| mauka_collections_lib::data_structures::DoubleHash::probe(student, size, i))
            .collect();
        slots.sort_unstable();
        assert_eq!(slots.first(), Some(&0));
        assert_eq!(slots.last(), Some(&(size - 1)));
        slots.dedup();
        assert_eq!(slots.len(), size);
    }
}

#[test]
fn test_hash_resize_preserves_members() {
    let students = DataGenerator::new(2024).students(1_000);
    let mut table = OpenHashTable::new();
    for student in &students {
        table.add(student.clone()).unwrap();
    }
    assert!(table.table_size() >= 2_000);
    assert!(students.iter().all(|student| table.contains(student)));
    assert!(!table.remove(&Student::new(5_000, "Nobody", 0)));
}

#[test]
fn test_avl_rebalance() {
    let mut tree = AvlTree::new();
    for value in [1, 2, 3] {
        tree.add(value);
    }
    assert!(tree.check_balance().is_ok());
    assert_eq!(tree.root(), Some(&2));
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_red_black_delete_fixup() {
    let mut tree = RedBlackTree::new();
    for value in [10, 20, 30, 15, 25, 5] {
        tree.add(value);
    }
    assert!(tree.remove(&10));

    let root = tree.root().copied().unwrap();
    assert_eq!(tree.color_of(&root), Some(Color::Black));
    assert!(tree.check_balance().is_ok());
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 15, 20, 25, 30]);
}

#[test]
fn test_priority_queue_orders() {
    let values = DataGenerator::new(8).random_ints(2_000, -500..500).unwrap();

    let ascending: PriorityQueue<i64> = values.iter().copied().collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(ascending.into_sorted_vec(), sorted);

    let descending = PriorityQueue::from_vec_with_comparator(values, ReverseOrder);
    sorted.reverse();
    assert_eq!(descending.into_sorted_vec(), sorted);
}

#[test]
fn test_priority_queue_cursor_removal_keeps_heap() {
    let mut queue: PriorityQueue<i64> = DataGenerator::new(13)
        .random_ints(500, 0..100)
        .unwrap()
        .into_iter()
        .collect();
    let mut cursor = queue.cursor();
    while let Some(&value) = cursor.next(&queue).unwrap() {
        if value % 4 == 1 {
            cursor.remove(&mut queue).unwrap();
            queue.check_heap().unwrap();
            let min = queue.iter().min().copied();
            assert_eq!(queue.peek().copied(), min);
        }
    }
    assert!(queue.iter().all(|value| value % 4 != 1));
}

#[test]
fn test_error_conditions() {
    let mut deque: CyclicDeque<i32> = CyclicDeque::new();
    assert!(matches!(deque.remove_last(), Err(CollectionError::EmptyContainer { .. })));

    let mut queue: PriorityQueue<i32> = PriorityQueue::new();
    assert!(matches!(queue.element(), Err(CollectionError::EmptyContainer { .. })));
    assert!(matches!(queue.remove(), Err(CollectionError::EmptyContainer { .. })));

    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert!(matches!(tree.first(), Err(CollectionError::EmptyContainer { .. })));

    let mut avl: AvlTree<i32> = (0..5).collect();
    let mut cursor = avl.cursor();
    assert!(matches!(cursor.remove(&mut avl), Err(CollectionError::IteratorState(_))));
    cursor.next(&avl).unwrap();
    avl.add(10);
    assert!(matches!(
        cursor.next(&avl),
        Err(CollectionError::ConcurrentModification { .. })
    ));
}

#[test]
fn test_init_loads_default_config() {
    let config = mauka_collections_lib::init().unwrap();
    let mut table = OpenHashTable::with_config(config.open_hash_table);
    assert_eq!(table.add(Student::new(1, "Kale", 80)), Ok(true));
    assert_eq!(table.len(), 1);
    assert!(!mauka_collections_lib::VERSION.is_empty());
}
