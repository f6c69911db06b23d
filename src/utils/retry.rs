//! Fixed-delay retry loop
//!
//! Runs an operation until its result is judged usable or the attempt budget
//! runs out. There is no backoff growth and no jitter: every pause between
//! attempts has the same length, and the pause blocks the calling thread.

use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts (the first one included)
    pub max_attempts: u32,

    /// Pause between two consecutive attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

/// Result of a retry loop
#[derive(Debug, Clone, PartialEq)]
pub struct RetryOutcome<T> {
    /// Value produced by the last attempt that ran
    pub value: T,

    /// 1-based number of that attempt
    pub attempt: u32,

    /// Whether the value passed the usability check
    pub accepted: bool,
}

/// Run `operation` until `is_usable` accepts its result
///
/// `operation` receives the 1-based attempt number. Returns `None` only when
/// the policy allows zero attempts.
///
/// # Example
///
/// ```
/// use campwatch::utils::retry::{retry_until, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3, Duration::ZERO);
/// let outcome = retry_until(&policy, |attempt| attempt * 10, |v| *v >= 20).unwrap();
/// assert_eq!(outcome.attempt, 2);
/// assert!(outcome.accepted);
/// ```
pub fn retry_until<T, F, P>(
    policy: &RetryPolicy,
    operation: F,
    is_usable: P,
) -> Option<RetryOutcome<T>>
where
    F: FnMut(u32) -> T,
    P: Fn(&T) -> bool,
{
    retry_until_with_sleep(policy, operation, is_usable, std::thread::sleep)
}

/// Same as [`retry_until`] with a caller-supplied sleep function
pub fn retry_until_with_sleep<T, F, P, S>(
    policy: &RetryPolicy,
    mut operation: F,
    is_usable: P,
    mut sleep: S,
) -> Option<RetryOutcome<T>>
where
    F: FnMut(u32) -> T,
    P: Fn(&T) -> bool,
    S: FnMut(Duration),
{
    let mut last = None;

    for attempt in 1..=policy.max_attempts {
        let value = operation(attempt);

        if is_usable(&value) {
            if attempt > 1 {
                debug!(attempt, "Operation succeeded after retry");
            }
            return Some(RetryOutcome {
                value,
                attempt,
                accepted: true,
            });
        }

        last = Some(RetryOutcome {
            value,
            attempt,
            accepted: false,
        });

        if attempt < policy.max_attempts {
            warn!(
                attempt,
                max_attempts = policy.max_attempts,
                delay_ms = policy.delay.as_millis() as u64,
                "Attempt not usable, retrying after delay"
            );
            sleep(policy.delay);
        }
    }

    last
}
