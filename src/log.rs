//! Logging for the optimizer, formatter and tracer pipeline.
//!
//! Passes report byte counts at `debug`; `convert` reports a fallback to the
//! raw tracer output at `warn`. Both are `tracing` macros with the `tracing`
//! feature and expand to nothing without it.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

/// Report the byte counts around one optimizer pass.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn pass_delta(pass: &'static str, before: usize, after: usize) {
    debug!(pass, before, after, "optimizer pass");
}
