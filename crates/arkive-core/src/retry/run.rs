//! Retry loop: run a closure until success or policy says stop.

use std::io;

use super::classify::classify_io_error;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the policy delay then tries again.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> io::Result<T>
where
    F: FnMut() -> io::Result<T>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, classify_io_error(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::debug!(attempt, error = %e, "retrying after {:?}", d);
                    std::thread::sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}
