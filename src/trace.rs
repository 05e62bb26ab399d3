//! Trace hooks.
//!
//! `trace_event!` forwards to `tracing::trace!` when the `tracing` feature is
//! enabled and expands to nothing otherwise.

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}
