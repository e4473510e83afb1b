// Structured events for `assign`, compiled out unless the `tracing`
// feature is enabled.
//
// Field values are still borrowed when the feature is off so that
// callers don't trip `unused_variables` on counts they only compute
// for the event.
macro_rules! trace {
    ($($field:ident = $value:expr),+ ; $msg:literal) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($field = $value),+, $msg);
        #[cfg(not(feature = "tracing"))]
        let _ = ($(&$value),+);
    }};
}
