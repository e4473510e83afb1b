use alloc::{vec, vec::Vec};
use core::ops::Range;

use super::IntervalMap;

// A simple but memory-hungry version of `IntervalMap` for testing.
//
// Only understands `u8` keys, so that it can store a value for
// every single key in the domain. This is just for testing,
// so that's fine.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DenseU8IntervalMap<V> {
    // One value per key, indexed by key.
    values: Vec<V>,
}

impl<V> DenseU8IntervalMap<V>
where
    V: Eq + Clone,
{
    pub fn new(default: V) -> DenseU8IntervalMap<V> {
        DenseU8IntervalMap {
            values: vec![default; 256],
        }
    }

    pub fn assign(&mut self, range: Range<u8>, value: V) {
        for k in range {
            self.values[usize::from(k)] = value.clone();
        }
    }

    pub fn lookup(&self, key: u8) -> &V {
        &self.values[usize::from(key)]
    }

    // The breakpoints a canonical `IntervalMap` over `u8` keys
    // has to store to represent the same function.
    pub fn breakpoints(&self, default: &V) -> Vec<(u8, V)> {
        let mut in_force = default;
        let mut breakpoints = Vec::new();
        for (k, value) in (0..=u8::MAX).zip(&self.values) {
            if value != in_force {
                breakpoints.push((k, value.clone()));
                in_force = value;
            }
        }
        breakpoints
    }
}

impl<V> From<&IntervalMap<u8, V>> for DenseU8IntervalMap<V>
where
    V: Eq + Clone,
{
    fn from(interval_map: &IntervalMap<u8, V>) -> Self {
        DenseU8IntervalMap {
            values: (0..=u8::MAX)
                .map(|k| interval_map.lookup(&k).clone())
                .collect(),
        }
    }
}
