//! Rate limiting middleware using Governor.
//!
//! Implements per-client rate limiting with governor's keyed token buckets so a
//! single caller cannot exhaust the upstream rate API quota.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde_json::json;
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tokio::task::JoinHandle;

/// Header identifying the client behind a proxy.
const FORWARDED_FOR: &str = "X-Forwarded-For";

/// Shared bucket for callers that arrive while the client table is full.
const OVERFLOW_KEY: &str = "~overflow";

/// Upper bound on tracked clients before new ones share [`OVERFLOW_KEY`].
pub const DEFAULT_MAX_CLIENTS: usize = 10_000;

/// Rate limiter state shared across requests.
pub struct RateLimiterState {
    /// Per-client token buckets
    limiter: DefaultKeyedRateLimiter<String>,
    max_clients: usize,
}

impl Default for RateLimiterState {
    fn default() -> Self {
        Self::new(100, Duration::from_secs(60))
    }
}

impl RateLimiterState {
    /// Creates a new rate limiter state.
    ///
    /// # Arguments
    /// * `requests` - Number of requests allowed per period (at least 1)
    /// * `period` - Time period for the quota
    pub fn new(requests: u32, period: Duration) -> Self {
        Self::with_max_clients(requests, period, DEFAULT_MAX_CLIENTS)
    }

    /// Same as [`RateLimiterState::new`] with a custom client table bound.
    pub fn with_max_clients(requests: u32, period: Duration, max_clients: usize) -> Self {
        let burst = NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period / burst.get())
            .unwrap_or_else(|| Quota::per_minute(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            max_clients: max_clients.max(1),
        }
    }

    /// Checks if a request should be rate limited.
    /// Returns true if the request is allowed, false if rate limited.
    ///
    /// Once `max_clients` buckets are live, idle ones are evicted; if the
    /// table is still full the request is charged to one shared bucket.
    pub fn check(&self, key: &str) -> bool {
        if self.limiter.len() >= self.max_clients {
            self.sweep();
        }

        let key = if self.limiter.len() >= self.max_clients {
            OVERFLOW_KEY
        } else {
            key
        };

        self.limiter.check_key(&key.to_string()).is_ok()
    }

    /// Drops buckets that have fully refilled.
    pub fn sweep(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of client buckets currently held.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Runs [`RateLimiterState::sweep`] every `interval` until aborted.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let state = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                state.sweep();
                tracing::debug!(clients = state.tracked_clients(), "Swept idle rate limit buckets");
            }
        })
    }
}

/// Client key: first `X-Forwarded-For` address, or `anonymous`.
fn client_key(request: &Request<Body>) -> String {
    request
        .headers()
        .get(FORWARDED_FOR)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Rate limiting middleware.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Skip rate limiting for health endpoint
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let key = client_key(&request);

    if !limiter.check(&key) {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Rate limit exceeded. Please try again later.",
                "retry_after_seconds": 60
            })),
        )
            .into_response();
    }

    next.run(request).await
}
