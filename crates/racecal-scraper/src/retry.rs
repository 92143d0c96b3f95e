//! Bounded retry with exponential backoff for blocking HTTP calls.
//!
//! [`retry_with_backoff`] re-runs an operation while the caller-supplied
//! classifier reports a transient outcome, sleeping between attempts. Once the
//! retry budget is spent the last outcome is handed back unchanged, so a
//! retryable status (e.g. 502) surfaces to the caller as an ordinary response.

use std::time::Duration;

use racecal_core::RetrySettings;

/// Upper bound on a single backoff sleep.
const MAX_BACKOFF_SECS: f64 = 120.0;

/// Delay before retry number `attempt` (1-based): `factor * 2^(attempt-1)`
/// seconds, capped at [`MAX_BACKOFF_SECS`].
///
/// | attempt | factor = 20.0 |
/// |---------|---------------|
/// | 1       | 20 s          |
/// | 2       | 40 s          |
/// | 3       | 80 s          |
/// | 4       | 120 s (cap)   |
pub(crate) fn backoff_delay(factor: f64, attempt: u32) -> Duration {
    let exponent = i32::try_from(attempt.saturating_sub(1).min(30)).unwrap_or(30);
    let secs = (factor * 2f64.powi(exponent)).min(MAX_BACKOFF_SECS);
    if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    }
}

/// Runs `operation` with up to `policy.max_retries` additional attempts.
///
/// `retry_reason` inspects each outcome and returns `Some(reason)` when it is
/// worth retrying; `None` ends the loop immediately.
pub(crate) fn retry_with_backoff<T, E, F, R>(
    policy: &RetrySettings,
    mut operation: F,
    retry_reason: R,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    R: Fn(&Result<T, E>) -> Option<String>,
{
    let mut attempt = 0u32;
    loop {
        let outcome = operation();
        let Some(reason) = retry_reason(&outcome) else {
            return outcome;
        };
        if attempt >= policy.max_retries {
            tracing::warn!(
                attempts = attempt + 1,
                reason = %reason,
                "retries exhausted"
            );
            return outcome;
        }
        attempt += 1;
        let delay = backoff_delay(policy.backoff_factor, attempt);
        tracing::warn!(
            attempt,
            max_retries = policy.max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            reason = %reason,
            "transient HTTP failure, retrying after backoff"
        );
        std::thread::sleep(delay);
    }
}
