/*!
[`IntervalMap`] is a total map over an ordered key space whose value is
constant across contiguous intervals of keys. Rather than storing a value for
every key, it stores a default value plus the _breakpoints_ at which the value
changes, so its size is proportional to the number of changes of value, not
to the number or width of the intervals assigned.

It answers "what value is in force at this key?" for every key in the
domain, including keys that were never mentioned in any assignment.


# Assignment and lookup

Intervals are half-open, like [`Range`]: `assign(begin, end, value)`
covers `begin` but not `end`. Assigning an empty or inverted interval
(`begin >= end`) does nothing.

Assignments never leave redundant breakpoints behind. Assigning the default
value back over an interval is how values are "removed"; when that restores
the starting picture the map shrinks back to having no breakpoints at all.

```rust
use intervalmap::IntervalMap;

let mut map = IntervalMap::new('A');
map.assign(1, 3, 'B');
map.assign(5, 7, 'C');

assert_eq!(map.lookup(&0), &'A');
assert_eq!(map.lookup(&2), &'B');
assert_eq!(map[&3], 'A');
assert_eq!(map[&6], 'C');

// Put the background back over everything.
map.assign(0, 10, 'A');
assert_eq!(map, IntervalMap::new('A'));
```


# Example: use with Chrono

```rust
use chrono::{Duration, TimeZone, Utc};
use intervalmap::IntervalMap;

let mut on_call = IntervalMap::new("nobody");

let start = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
on_call.assign(start, start + Duration::weeks(2), "Alice");
// Bob covers Alice's second week.
on_call.assign(start + Duration::weeks(1), start + Duration::weeks(2), "Bob");

assert_eq!(on_call[&(start + Duration::days(3))], "Alice");
assert_eq!(on_call[&(start + Duration::days(10))], "Bob");
assert_eq!(on_call[&(start + Duration::weeks(2))], "nobody");
```


## Crate features

By default this crate depends only on `thiserror` (without its `std`
feature).

- **quickcheck** provides `quickcheck::Arbitrary` for [`IntervalMap`].
- **tracing** emits `trace`-level events from
  [`assign`](IntervalMap::assign) through the _tracing_ crate.

```toml
[dependencies]
intervalmap = { version = "0.1", features = ["tracing"] }
```


## Building without the Rust standard library

This crate links the `core` and `alloc` crates, but not `std`, so it can be
used wherever a global allocator is available.


[`IntervalMap`]: crate::IntervalMap
[`Range`]: core::ops::Range

*/

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

pub mod error;
pub mod map;

#[cfg(test)]
mod dense;

pub use error::BreakpointError;
pub use map::IntervalMap;
