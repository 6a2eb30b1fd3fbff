//! `debug!`/`warn!` for the graph builder, linearizer and codec.
//!
//! Debug events: node/edge counts after a graph build, each committed trail,
//! stroke flips during orientation fix-up, encode/decode summaries. The one
//! warning is a longest-walk search running out of its step budget.
//!
//! With the `tracing` feature these are the `tracing` macros; without it they
//! expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
