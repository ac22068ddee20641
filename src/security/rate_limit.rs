use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use std::fmt;
use std::num::NonZeroU32;

/// Global token-bucket limiter shared by every route.
///
/// Not keyed by client address; the directory is a single small site.
pub struct AppRateLimiter {
    limiter: DefaultDirectRateLimiter,
}

impl fmt::Debug for AppRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRateLimiter").finish_non_exhaustive()
    }
}

impl AppRateLimiter {
    /// Zero values fall back to 1 req/s and a burst equal to the rate.
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(nonzero!(1u32));
        let burst = NonZeroU32::new(burst_size).unwrap_or(rate);
        Self {
            limiter: RateLimiter::direct(Quota::per_second(rate).allow_burst(burst)),
        }
    }

    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Middleware to enforce rate limits
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if state.config.resilience.rate_limit_enabled && !state.rate_limiter.check() {
        tracing::warn!(name: "http.rate_limited", path = %req.uri().path(), "Request rejected");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_then_reject() {
        let limiter = AppRateLimiter::new(1, 3);

        assert!(limiter.check());
        assert!(limiter.check());
        assert!(limiter.check());

        // Burst exhausted; refill takes a full second.
        assert!(!limiter.check());
    }

    #[test]
    fn test_zero_quota_falls_back() {
        let limiter = AppRateLimiter::new(0, 0);
        assert!(limiter.check());
        assert!(!limiter.check());
    }
}
