use crate::error::BreakpointError;
use alloc::collections::BTreeMap;
use core::fmt::{self, Debug};
use core::ops::{Index, Range};
use core::prelude::v1::*;

#[cfg(feature = "quickcheck")]
use alloc::{boxed::Box, vec::Vec};

/// A total map from keys to values, stored as the points at which
/// the value changes.
///
/// Every key starts out mapped to the map's default value.
/// [`assign`](IntervalMap::assign) overwrites a half-open interval
/// `begin..end`, and [`lookup`](IntervalMap::lookup) returns the value in
/// force at any key.
///
/// Neighbouring runs that map to the same value are always coalesced, so
/// the map never holds more breakpoints than there are actual changes of
/// value. Two maps therefore compare equal exactly when they have the same
/// default and map every key to the same value.
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    // Value for every key below the first breakpoint.
    default: V,
    // Each entry `k => v` means "from `k` (inclusive) up to the next
    // stored key (exclusive), the value is `v`".
    //
    // No entry carries the same value as the run to its left;
    // in particular the first entry never carries `default`.
    btm: BTreeMap<K, V>,
}

impl<K, V> Default for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone + Default,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    /// Makes a new `IntervalMap` that maps every key to `default`.
    pub fn new(default: V) -> Self {
        IntervalMap {
            default,
            btm: BTreeMap::new(),
        }
    }

    /// Builds a map from its default value and a sequence of breakpoints,
    /// each meaning "from this key onwards, the value is this".
    ///
    /// Breakpoints that don't change the value in force to their left
    /// (including the default) are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::OutOfOrder`] if the keys are not
    /// strictly increasing.
    pub fn from_breakpoints<I>(default: V, breakpoints: I) -> Result<Self, BreakpointError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut interval_map = IntervalMap::new(default);
        let mut previous_key: Option<K> = None;
        for (index, (key, value)) in breakpoints.into_iter().enumerate() {
            if previous_key.as_ref().map_or(false, |previous| *previous >= key) {
                return Err(BreakpointError::OutOfOrder { index });
            }
            if *interval_map.last_value() != value {
                interval_map.btm.insert(key.clone(), value);
            }
            previous_key = Some(key);
        }
        debug_assert!(interval_map.is_canonical());
        Ok(interval_map)
    }

    /// Returns the value of every key below the first assigned interval.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Returns the value in force at `key`.
    ///
    /// This is the value of the last interval assigned over `key`,
    /// or the default value if no interval ever covered it.
    pub fn lookup(&self, key: &K) -> &V {
        // The last breakpoint at or before the key decides its value.
        self.btm
            .range(..=key)
            .next_back()
            .map_or(&self.default, |(_key, value)| value)
    }

    /// Assigns `value` to every key in `begin..end`.
    ///
    /// Keys outside of the interval keep whatever value they had before.
    /// If `begin >= end` the interval is empty and nothing changes.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if begin >= end {
            trace!(breakpoints = self.btm.len(); "ignored empty interval");
            return;
        }

        // Whatever is in force at `end` right now has to still be in
        // force there afterwards, so capture it before editing anything.
        let value_after_end = self.lookup(&end).clone();
        let continues_from_left = *self.value_left_of(&begin) == value;

        // Every breakpoint inside the interval is superseded.
        let mut removed = 0usize;
        while let Some(key) = self
            .btm
            .range(&begin..&end)
            .next()
            .map(|(key, _value)| key.clone())
        {
            self.btm.remove(&key);
            removed += 1;
        }

        // Right edge.
        if value_after_end == value {
            // The new run carries straight on past `end`, so any
            // breakpoint there no longer changes anything.
            self.btm.remove(&end);
        } else {
            self.btm.insert(end, value_after_end);
        }

        // Left edge. Nothing before `begin` was touched, so comparing
        // against the run we captured above is enough to stay canonical.
        if !continues_from_left {
            self.btm.insert(begin, value);
        }

        debug_assert!(self.is_canonical());
        trace!(removed = removed, breakpoints = self.btm.len(); "assigned interval");
    }

    // Value of the run that ends immediately before `key`.
    fn value_left_of(&self, key: &K) -> &V {
        self.btm
            .range(..key)
            .next_back()
            .map_or(&self.default, |(_key, value)| value)
    }

    // Value of the final, unbounded run.
    fn last_value(&self) -> &V {
        self.btm
            .last_key_value()
            .map_or(&self.default, |(_key, value)| value)
    }

    // Every breakpoint must change the value in force to its left.
    fn is_canonical(&self) -> bool {
        let mut in_force = &self.default;
        for value in self.btm.values() {
            if value == in_force {
                return false;
            }
            in_force = value;
        }
        true
    }
}

impl<K, V> Index<&K> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.lookup(key)
    }
}

// Shows each run by where it starts, with the default first as `..`.
// E.g. `{..: 'A', 1..: 'B', 3..: 'A'}`.
impl<K: Debug, V: Debug> Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entry(&RunStart::<K>(None), &self.default)
            .entries(self.btm.iter().map(|(key, value)| (RunStart(Some(key)), value)))
            .finish()
    }
}

struct RunStart<'a, K>(Option<&'a K>);

impl<'a, K: Debug> Debug for RunStart<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, "{:?}..", key),
            None => f.write_str(".."),
        }
    }
}

impl<K, V> Extend<(Range<K>, V)> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(range, value)| {
            self.assign(range.start, range.end, value);
        })
    }
}

#[cfg(feature = "quickcheck")]
impl<K, V> quickcheck::Arbitrary for IntervalMap<K, V>
where
    K: quickcheck::Arbitrary + Ord,
    V: quickcheck::Arbitrary + Eq,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut interval_map = IntervalMap::new(V::arbitrary(g));
        for (begin, end, value) in Vec::<(K, K, V)>::arbitrary(g) {
            interval_map.assign(begin, end, value);
        }
        interval_map
    }

    // Shrink by dropping one breakpoint at a time.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let default = self.default.clone();
        let breakpoints: Vec<(K, V)> = self
            .btm
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Box::new((0..breakpoints.len()).filter_map(move |skip| {
            let remaining = breakpoints
                .iter()
                .enumerate()
                .filter(|(index, _breakpoint)| *index != skip)
                .map(|(_index, breakpoint)| breakpoint.clone());
            IntervalMap::from_breakpoints(default.clone(), remaining).ok()
        }))
    }
}
