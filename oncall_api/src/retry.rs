//! Retry policy for transient API failures.
//!
//! The policy is a pure function from `(attempt, failure)` to a delay; the
//! single retry loop lives in [`Client`](crate::Client). Jitter comes from a
//! caller-supplied RNG so tests can seed it.

use std::time::Duration;

use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// `RateLimit-Reset`: seconds until the server-side quota resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "ratelimit-reset";

const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_WAIT_MIN: Duration = Duration::from_millis(100);
const DEFAULT_WAIT_MAX: Duration = Duration::from_millis(400);

/// Bounds for retrying transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. `0` disables retrying.
    pub max_retries: u32,
    /// Backoff floor.
    pub wait_min: Duration,
    /// Upper bound of the jitter window added to the floor.
    pub wait_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            wait_min: DEFAULT_WAIT_MIN,
            wait_max: DEFAULT_WAIT_MAX,
        }
    }
}

/// Why an attempt failed in a way worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transient {
    /// HTTP 429, with the server's reset hint if it sent one.
    RateLimited { reset: Option<Duration> },
    /// Any 5xx.
    ServerError(StatusCode),
    /// Connection or timeout failure below HTTP.
    Network,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, wait_min: Duration, wait_max: Duration) -> Self {
        Self {
            max_retries,
            wait_min,
            wait_max,
        }
    }

    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Whether another attempt is allowed after `attempt` (0-based) failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Delay before the attempt following `attempt` (0-based).
    ///
    /// Server errors and network failures back off linearly:
    /// `(wait_min + jitter) * (attempt + 1)`. A 429 waits
    /// `max(wait_min, reset) + jitter`, so a `RateLimit-Reset` hint is always
    /// honored as the floor.
    pub fn backoff<R: Rng>(&self, attempt: u32, failure: &Transient, rng: &mut R) -> Duration {
        let spread = self.wait_max.saturating_sub(self.wait_min);
        let jitter = if spread.is_zero() {
            Duration::ZERO
        } else {
            spread.mul_f64(rng.gen::<f64>())
        };

        match failure {
            Transient::RateLimited { reset } => {
                let floor = match reset {
                    Some(reset) => (*reset).max(self.wait_min),
                    None => self.wait_min,
                };
                floor + jitter
            }
            Transient::ServerError(_) | Transient::Network => {
                (self.wait_min + jitter).saturating_mul(attempt.saturating_add(1))
            }
        }
    }
}

/// 429 and every 5xx are retried; other statuses are final.
pub fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Connection and timeout failures are retried; builder, redirect and body
/// errors are not.
pub fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

/// Parses a positive `RateLimit-Reset` header into a duration.
pub fn rate_limit_reset(headers: &HeaderMap) -> Option<Duration> {
    let reset = headers
        .get(RATE_LIMIT_RESET_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()?;
    (reset > 0).then(|| Duration::from_secs(reset as u64))
}

/// Classifies a failed response status.
pub(crate) fn classify(status: StatusCode, headers: &HeaderMap) -> Option<Transient> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        Some(Transient::RateLimited {
            reset: rate_limit_reset(headers),
        })
    } else if status.is_server_error() {
        Some(Transient::ServerError(status))
    } else {
        None
    }
}
