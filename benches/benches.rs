use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use intervalmap::*;
use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};
use std::any::type_name;
use test_strategy::Arbitrary;

type Key = i64;
type Value = u8;

const SPAN: Key = 1_000_000;
const COUNT: usize = 100000;
const OPERATIONS: usize = 100000;
const LOOKUPS: usize = 1000000;

#[derive(Debug, Clone, Arbitrary)]
enum Operation {
    Assign(
        #[strategy(0..SPAN)] Key,
        #[strategy(0..SPAN)] Key,
        #[strategy(0..4u8)] Value,
    ),
    // Put the default back.
    Reset(#[strategy(0..SPAN)] Key, #[strategy(0..SPAN)] Key),
}

fn interval(max_width: Key) -> impl Strategy<Value = (Key, Key, Value)> {
    (0..SPAN, 1..max_width, 0..4u8).prop_map(|(begin, width, value)| (begin, begin + width, value))
}

fn interval_map(
    intervals: impl Strategy<Value = (Key, Key, Value)>,
    size: usize,
) -> impl Strategy<Value = IntervalMap<Key, Value>> {
    prop::collection::vec(intervals, size).prop_map(|intervals| {
        let mut map = IntervalMap::new(0);
        for (begin, end, value) in intervals {
            map.assign(begin, end, value);
        }
        map
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut runner = TestRunner::deterministic();

    let mut group = c.benchmark_group(format!(
        "IntervalMap<{}, {}>",
        type_name::<Key>(),
        type_name::<Value>()
    ));

    group.throughput(Throughput::Elements(COUNT as u64));
    group.bench_function("assign", |b| {
        let entries = prop::collection::vec(interval(1000), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter_with_large_drop(|| {
            let mut map = IntervalMap::new(0);
            for (begin, end, value) in entries.clone().into_iter() {
                map.assign(begin, end, value);
            }
            map
        })
    });

    group.throughput(Throughput::Elements(OPERATIONS as u64));
    group.bench_function("operations", |b| {
        let map = interval_map(interval(1000), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        let operations = prop::collection::vec(any::<Operation>(), OPERATIONS)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter_with_large_drop(|| {
            let mut map = map.clone();
            for operation in operations.clone().into_iter() {
                match operation {
                    Operation::Assign(begin, end, value) => map.assign(begin, end, value),
                    Operation::Reset(begin, end) => map.assign(begin, end, 0),
                }
            }
            map
        })
    });

    group.throughput(Throughput::Elements(LOOKUPS as u64));
    group.bench_function("lookups", |b| {
        let map = interval_map(interval(1000), COUNT)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        let lookups = prop::collection::vec(0..SPAN, LOOKUPS)
            .new_tree(&mut runner)
            .unwrap()
            .current();
        b.iter(|| {
            for lookup in lookups.iter() {
                black_box(map.lookup(lookup));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
