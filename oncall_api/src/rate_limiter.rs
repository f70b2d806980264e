//! Client-side rate limiting for OnCall API requests.
//!
//! A token bucket that paces requests under the documented server quota
//! (50 requests per minute, burst of 50). The bucket lives behind a tokio
//! Mutex; `acquire()` never sleeps while holding the lock.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

const DEFAULT_REQUESTS: u32 = 50;
const DEFAULT_PERIOD: Duration = Duration::from_secs(60);
const DEFAULT_BURST: u32 = 50;

/// Sustained rate and burst size for a [`RateLimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Tokens added per `period`.
    pub requests: u32,
    pub period: Duration,
    /// Bucket capacity.
    pub burst: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests: DEFAULT_REQUESTS,
            period: DEFAULT_PERIOD,
            burst: DEFAULT_BURST,
        }
    }
}

impl RateLimit {
    pub fn new(requests: u32, period: Duration, burst: u32) -> Self {
        Self {
            requests,
            period,
            burst,
        }
    }

    /// Time to refill one token.
    fn interval(&self) -> Duration {
        self.period / self.requests.max(1)
    }
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token-bucket limiter shared by every request of a client.
///
/// Waiters queue on the tokio Mutex, which hands out the lock in FIFO order.
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    limit: RateLimit,
}

impl RateLimiter {
    /// Creates a limiter with a full bucket.
    pub fn new(limit: RateLimit) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                tokens: f64::from(limit.burst.max(1)),
                last_refill: Instant::now(),
            }),
            limit,
        }
    }

    fn capacity(&self) -> f64 {
        f64::from(self.limit.burst.max(1))
    }

    fn refill(&self, bucket: &mut Bucket, now: Instant) {
        let elapsed = now.saturating_duration_since(bucket.last_refill);
        let earned = elapsed.as_secs_f64() / self.limit.interval().as_secs_f64();
        bucket.tokens = (bucket.tokens + earned).min(self.capacity());
        bucket.last_refill = now;
    }

    /// Waits until a token is available, then takes it.
    ///
    /// Cancel-safe: dropping the future before it completes takes no token.
    pub async fn acquire(&self) {
        loop {
            let mut bucket = self.bucket.lock().await;
            let now = Instant::now();
            self.refill(&mut bucket, now);

            if bucket.tokens >= 1.0 {
                bucket.tokens -= 1.0;
                return;
            }

            let missing = 1.0 - bucket.tokens;
            let wait = self.limit.interval().mul_f64(missing);

            // Drop lock before sleeping
            drop(bucket);
            tracing::trace!(wait_ms = wait.as_millis() as u64, "rate limiter waiting for token");
            sleep(wait).await;
        }
    }

    /// Non-blocking snapshot of whole tokens currently available.
    ///
    /// Returns `None` if the lock is contended (callers should treat as "unknown").
    pub fn remaining_budget(&self) -> Option<u32> {
        match self.bucket.try_lock() {
            Ok(mut bucket) => {
                self.refill(&mut bucket, Instant::now());
                Some(bucket.tokens.floor() as u32)
            }
            Err(_) => None,
        }
    }

    pub fn limit(&self) -> RateLimit {
        self.limit
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimit::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn acquire_within_burst() {
        let limiter = RateLimiter::new(RateLimit::new(10, Duration::from_secs(60), 10));

        // Should all return immediately when under budget
        for _ in 0..10 {
            limiter.acquire().await;
        }

        assert_eq!(limiter.remaining_budget(), Some(0));
    }

    #[tokio::test]
    async fn empty_bucket_blocks_until_refill() {
        tokio::time::pause();

        // One token every 10 seconds.
        let limiter = Arc::new(RateLimiter::new(RateLimit::new(6, Duration::from_secs(60), 3)));

        for _ in 0..3 {
            limiter.acquire().await;
        }

        let limiter_clone = Arc::clone(&limiter);
        let handle = tokio::spawn(async move {
            limiter_clone.acquire().await;
        });

        // Advance time just short of one interval -- task should still be pending
        tokio::time::advance(Duration::from_secs(9)).await;
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn refill_is_capped_at_burst() {
        tokio::time::pause();

        let limiter = RateLimiter::new(RateLimit::new(60, Duration::from_secs(60), 5));
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(limiter.remaining_budget(), Some(3));

        tokio::time::advance(Duration::from_secs(600)).await;
        assert_eq!(limiter.remaining_budget(), Some(5));
    }

    #[tokio::test]
    async fn long_run_rate_is_respected() {
        tokio::time::pause();

        let limiter = RateLimiter::new(RateLimit::new(2, Duration::from_secs(1), 1));
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        // First token from the burst, four more at 500ms each.
        assert!(start.elapsed() >= Duration::from_millis(1990));
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn default_matches_server_quota() {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.limit(), RateLimit::new(50, Duration::from_secs(60), 50));
        assert_eq!(limiter.remaining_budget(), Some(50));
    }
}
