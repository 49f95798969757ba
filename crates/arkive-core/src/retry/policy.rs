use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resource may become available again (locked, busy, interrupted).
    Transient,
    /// Retrying cannot help (invalid input, unsupported operation).
    Permanent,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-delay retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts that may be retried; one more attempt follows whose error is final.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// `attempt` is 1-based (1 = first attempt).
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt > self.max_attempts {
            return RetryDecision::NoRetry;
        }
        match kind {
            ErrorKind::Permanent => RetryDecision::NoRetry,
            ErrorKind::Transient => RetryDecision::RetryAfter(self.delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_retry_for_permanent() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, ErrorKind::Permanent), RetryDecision::NoRetry);
    }

    #[test]
    fn fixed_delay() {
        let p = RetryPolicy::default();
        assert_eq!(
            p.decide(1, ErrorKind::Transient),
            RetryDecision::RetryAfter(Duration::from_millis(500))
        );
        assert_eq!(
            p.decide(3, ErrorKind::Transient),
            RetryDecision::RetryAfter(Duration::from_millis(500))
        );
    }

    #[test]
    fn respects_max_attempts() {
        let p = RetryPolicy {
            max_attempts: 2,
            delay: Duration::ZERO,
        };
        assert!(matches!(
            p.decide(2, ErrorKind::Transient),
            RetryDecision::RetryAfter(_)
        ));
        assert_eq!(p.decide(3, ErrorKind::Transient), RetryDecision::NoRetry);
    }
}
