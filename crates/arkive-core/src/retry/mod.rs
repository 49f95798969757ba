//! Retry policy for filesystem operations that fail transiently.
//!
//! Recently used files can stay locked for a short while on some platforms
//! (virus scanners, indexers, lingering handles). Callers classify the failure,
//! ask the policy whether to try again, and sleep for the fixed delay.

mod classify;
mod policy;
mod run;

pub use classify::classify_io_error;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
