//! Optional `tracing` events.
//!
//! With the `tracing` feature, [`trace_event!`] forwards to
//! `tracing::trace!`. Without it the macro expands to nothing, so call sites
//! carry no cost and no `cfg` noise.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)+) => {
        ::tracing::trace!($($argument)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)+) => {};
}

pub(crate) use trace_event;
