//! Trace events for whole-set operations.
//!
//! With the `tracing` feature enabled, `trace_operation!` forwards to
//! `tracing::trace!`. Without it the macro expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_operation {
    ($($field:tt)*) => {
        tracing::trace!(target: "setalgebra", $($field)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_operation {
    ($($field:tt)*) => {};
}

pub(crate) use trace_operation;
