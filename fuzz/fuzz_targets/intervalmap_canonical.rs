#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use intervalmap::IntervalMap;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Assign(u8, u8, u8),
    Reset(u8, u8),
}

impl Op {
    fn apply(self, map: &mut IntervalMap<u8, u8>, dense: &mut [u8; 256]) {
        let (begin, end, value) = match self {
            Op::Assign(begin, end, value) => (begin, end, value),
            Op::Reset(begin, end) => (begin, end, *map.default_value()),
        };
        map.assign(begin, end, value);
        for k in begin..end {
            dense[usize::from(k)] = value;
        }
    }
}

fuzz_target!(|input: (u8, Vec<Op>)| {
    let (default, ops) = input;
    let mut map = IntervalMap::new(default);
    let mut dense = [default; 256];

    for op in ops {
        op.apply(&mut map, &mut dense);
    }

    for k in 0..=u8::MAX {
        assert_eq!(*map.lookup(&k), dense[usize::from(k)]);
    }

    // Rebuilding from the minimal set of value changes must give back
    // exactly the same map, i.e. `map` holds nothing redundant.
    let mut in_force = default;
    let mut changes = Vec::new();
    for k in 0..=u8::MAX {
        if dense[usize::from(k)] != in_force {
            in_force = dense[usize::from(k)];
            changes.push((k, in_force));
        }
    }
    assert_eq!(IntervalMap::from_breakpoints(default, changes), Ok(map));
});
