//! Demonstration workloads for the `demo` subcommand.
//!
//! Each workload fills one container from a seeded [`DataGenerator`],
//! mutates it through its cursor, runs the structural diagnostics and
//! summarises the result.

use clap::ValueEnum;
use mauka_collections_lib::config::CollectionsConfig;
use mauka_collections_lib::data_structures::{
    AvlTree, BalanceCheck, CyclicDeque, LinkedDeque, MergingIterator, OpenHashTable,
    PriorityQueue, RedBlackTree,
};
use mauka_collections_lib::error::{CollectionError, MaukaError, MaukaResult};
use mauka_collections_lib::generator::DataGenerator;
use serde::Serialize;
use tracing::{debug, info};

/// Containers that can be demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Structure {
    /// Cyclic buffer deque
    Deque,
    /// Linked deque
    Linked,
    /// Binary-heap priority queue
    Heap,
    /// Open-addressed hash table
    Hash,
    /// AVL tree
    Avl,
    /// Red-black tree
    Rb,
    /// K-way merge of sorted runs
    Merge,
    /// Every workload above
    All,
}

impl Structure {
    const ALL: [Structure; 7] = [
        Structure::Deque,
        Structure::Linked,
        Structure::Heap,
        Structure::Hash,
        Structure::Avl,
        Structure::Rb,
        Structure::Merge,
    ];

    fn name(self) -> &'static str {
        match self {
            Structure::Deque => "deque",
            Structure::Linked => "linked",
            Structure::Heap => "heap",
            Structure::Hash => "hash",
            Structure::Avl => "avl",
            Structure::Rb => "rb",
            Structure::Merge => "merge",
            Structure::All => "all",
        }
    }
}

/// Outcome of one workload.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub structure: &'static str,
    pub inserted: usize,
    pub removed: usize,
    pub remaining: usize,
    pub detail: String,
}

/// Runs the requested workload, or every workload for [`Structure::All`],
/// each with a generator seeded by `seed`.
pub fn run(
    structure: Structure,
    config: &CollectionsConfig,
    count: usize,
    seed: u64,
) -> MaukaResult<Vec<DemoReport>> {
    let mut generator = DataGenerator::new(seed);
    debug!(structure = structure.name(), count, seed, "Running demo workload");
    let report = match structure {
        Structure::All => {
            let mut reports = Vec::new();
            for single in Structure::ALL {
                reports.extend(run(single, config, count, seed)?);
            }
            return Ok(reports);
        }
        Structure::Deque => deque(config, &mut generator, count),
        Structure::Linked => linked(&mut generator, count),
        Structure::Heap => heap(config, &mut generator, count),
        Structure::Hash => hash(config, &mut generator, count),
        Structure::Avl => avl(&mut generator, count),
        Structure::Rb => red_black(&mut generator, count),
        Structure::Merge => merge(&mut generator, count),
    }?;
    info!(
        structure = report.structure,
        inserted = report.inserted,
        removed = report.removed,
        remaining = report.remaining,
        "{}",
        report.detail
    );
    Ok(vec![report])
}

fn deque(
    config: &CollectionsConfig,
    generator: &mut DataGenerator,
    count: usize,
) -> MaukaResult<DemoReport> {
    let mut deque = CyclicDeque::with_config(config.cyclic_deque.clone());
    for (i, value) in generator.random_ints(count, -100..100)?.into_iter().enumerate() {
        if i % 2 == 0 {
            deque.add_last(value);
        } else {
            deque.add_first(value);
        }
    }
    let capacity = deque.capacity();

    let mut removed = 0;
    let mut cursor = deque.cursor();
    while let Some(&value) = cursor.next(&deque)? {
        if value < 0 {
            cursor.remove(&mut deque)?;
            removed += 1;
        }
    }
    if deque.iter().any(|&value| value < 0) {
        return Err(CollectionError::violation("negative value survived cursor removal").into());
    }

    Ok(DemoReport {
        structure: Structure::Deque.name(),
        inserted: count,
        removed,
        remaining: deque.len(),
        detail: format!("grew to capacity {capacity}"),
    })
}

fn linked(generator: &mut DataGenerator, count: usize) -> MaukaResult<DemoReport> {
    let mut deque: LinkedDeque<usize> = generator.shuffled_range(count).into_iter().collect();
    let mut removed = 0;
    let mut cursor = deque.cursor();
    while let Some(&value) = cursor.next(&deque)? {
        if value % 2 == 1 {
            cursor.remove(&mut deque)?;
            removed += 1;
        }
    }
    let front = deque.get_first().ok().copied();
    Ok(DemoReport {
        structure: Structure::Linked.name(),
        inserted: count,
        removed,
        remaining: deque.len(),
        detail: format!("front after removing odd values: {front:?}"),
    })
}

fn heap(
    config: &CollectionsConfig,
    generator: &mut DataGenerator,
    count: usize,
) -> MaukaResult<DemoReport> {
    let mut queue = PriorityQueue::with_config(config.priority_queue.clone());
    for value in generator.random_ints(count, 0..1_000)? {
        queue.add(value);
    }
    queue.check_heap()?;
    let peak_capacity = queue.capacity();

    let mut removed = 0;
    let mut cursor = queue.cursor();
    while let Some(&value) = cursor.next(&queue)? {
        if value % 3 == 0 {
            cursor.remove(&mut queue)?;
            removed += 1;
        }
    }
    queue.check_heap()?;

    let remaining = queue.len();
    let mut previous = None;
    while let Ok(value) = queue.remove() {
        if previous.is_some_and(|p| p > value) {
            return Err(CollectionError::violation(format!(
                "heap yielded {value} after {previous:?}"
            ))
            .into());
        }
        previous = Some(value);
    }

    Ok(DemoReport {
        structure: Structure::Heap.name(),
        inserted: count,
        removed,
        remaining,
        detail: format!(
            "capacity peaked at {peak_capacity}, shrank to {}",
            queue.capacity()
        ),
    })
}

fn hash(
    config: &CollectionsConfig,
    generator: &mut DataGenerator,
    count: usize,
) -> MaukaResult<DemoReport> {
    let students = u32::try_from(count)
        .map_err(|_| MaukaError::Custom(format!("count {count} exceeds the student id range")))?;
    let mut table = OpenHashTable::with_config(config.open_hash_table.clone());
    let mut inserted = 0;
    for student in generator.students(students) {
        if table.add(student)? {
            inserted += 1;
        }
    }

    let mut removed = 0;
    let mut cursor = table.cursor();
    while let Some(even) = cursor.next(&table)?.map(|student| student.id % 2 == 0) {
        if even {
            cursor.remove(&mut table)?;
            removed += 1;
        }
    }

    Ok(DemoReport {
        structure: Structure::Hash.name(),
        inserted,
        removed,
        remaining: table.len(),
        detail: format!(
            "{} slots, {} tombstones, load factor {:.3}",
            table.table_size(),
            table.tombstones(),
            table.load_factor()
        ),
    })
}

fn avl(generator: &mut DataGenerator, count: usize) -> MaukaResult<DemoReport> {
    let mut tree = AvlTree::new();
    for value in generator.shuffled_range(count) {
        tree.add(value);
    }
    tree.check_balance()?;

    let mut removed = 0;
    let mut cursor = tree.cursor();
    while let Some(value) = cursor.next(&tree)? {
        if value % 2 == 0 {
            cursor.remove(&mut tree)?;
            removed += 1;
        }
    }
    tree.check_balance()?;

    Ok(DemoReport {
        structure: Structure::Avl.name(),
        inserted: count,
        removed,
        remaining: tree.len(),
        detail: format!("height {}", tree.height()),
    })
}

fn red_black(generator: &mut DataGenerator, count: usize) -> MaukaResult<DemoReport> {
    let mut tree = RedBlackTree::new();
    for value in generator.shuffled_range(count) {
        tree.add(value);
    }
    tree.check_balance()?;

    let mut removed = 0;
    let mut cursor = tree.cursor_desc();
    while let Some(&value) = cursor.next(&tree)? {
        if value % 2 == 0 {
            cursor.remove(&mut tree)?;
            removed += 1;
        }
    }
    tree.check_balance()?;

    Ok(DemoReport {
        structure: Structure::Rb.name(),
        inserted: count,
        removed,
        remaining: tree.len(),
        detail: format!("root {:?}", tree.root()),
    })
}

fn merge(generator: &mut DataGenerator, count: usize) -> MaukaResult<DemoReport> {
    let runs = 4;
    let sources = generator.sorted_runs(runs, count / runs, 10_000)?;
    let inserted = sources.iter().map(Vec::len).sum();
    let merged: Vec<i64> = MergingIterator::new(sources).collect();
    if let Some(pair) = merged.windows(2).find(|pair| pair[0] > pair[1]) {
        return Err(CollectionError::violation(format!(
            "merge emitted {} before {}",
            pair[0], pair[1]
        ))
        .into());
    }

    Ok(DemoReport {
        structure: Structure::Merge.name(),
        inserted,
        removed: 0,
        remaining: merged.len(),
        detail: format!("merged {runs} sorted runs"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_workloads_pass_diagnostics() {
        let reports = run(Structure::All, &CollectionsConfig::default(), 200, 9).unwrap();
        assert_eq!(reports.len(), Structure::ALL.len());
        for report in &reports {
            assert!(report.remaining <= report.inserted, "{report:?}");
        }
    }

    #[test]
    fn test_hash_workload_removes_even_ids() {
        let reports = run(Structure::Hash, &CollectionsConfig::default(), 50, 1).unwrap();
        assert_eq!(reports[0].inserted, 50);
        assert_eq!(reports[0].removed, 25);
        assert_eq!(reports[0].remaining, 25);
    }

    #[test]
    fn test_empty_workloads() {
        let reports = run(Structure::All, &CollectionsConfig::default(), 0, 2).unwrap();
        assert!(reports.iter().all(|report| report.remaining == 0));
    }
}
