use thiserror::Error;

/// Error returned when an [`IntervalMap`](crate::IntervalMap) can not be
/// built from a sequence of breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// The key at `index` is not strictly greater than the key before it.
    #[error("breakpoint {index} is not strictly after the breakpoint before it")]
    OutOfOrder {
        /// Position of the offending breakpoint in the input sequence.
        index: usize,
    },
}
