use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::AppState;

// Register/login budget per client IP.
const AUTH_MAX_REQUESTS: u32 = 10;
const AUTH_WINDOW_SECS: u64 = 60;

/// Fixed-window per-key counters. In-memory, so limits are per instance.
#[derive(Clone, Default)]
pub struct RateLimitState {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

struct Window {
    count: u32,
    started: Instant,
}

impl RateLimitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit for `key`; Err means the caller is over budget for the
    /// current window.
    pub async fn hit(&self, key: &str, max_requests: u32, window_secs: u64) -> Result<(), ()> {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started: now,
        });

        if now.duration_since(window.started) > Duration::from_secs(window_secs) {
            window.count = 0;
            window.started = now;
        }

        if window.count >= max_requests {
            return Err(());
        }
        window.count += 1;
        Ok(())
    }

    /// Drop windows that have been idle past expiry. Run from a background
    /// task so the map does not grow with one entry per IP ever seen.
    pub async fn sweep(&self) {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        let keep = Duration::from_secs(AUTH_WINDOW_SECS * 2);
        windows.retain(|_, w| now.duration_since(w.started) < keep);
    }
}

pub async fn rate_limit_auth(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = format!("auth:{}", addr.ip());
    if state
        .rate_limiter
        .hit(&key, AUTH_MAX_REQUESTS, AUTH_WINDOW_SECS)
        .await
        .is_err()
    {
        tracing::warn!(ip = %addr.ip(), "Auth rate limit exceeded");
        return Err(AppError::RateLimited);
    }
    Ok(next.run(req).await)
}
