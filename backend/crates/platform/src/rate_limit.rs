//! Rate Limiting Infrastructure
//!
//! Common rate limiting abstractions plus an in-memory fixed-window
//! implementation for stateless deployments.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment rate limit counter
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory fixed-window rate limiter
///
/// Counters live only in the current process. The gateway requires no
/// coordination state beyond its shared secret, so a per-instance
/// window is sufficient.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    windows: Mutex<HashMap<String, WindowEntry>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    window_start_ms: i64,
    count: u32,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn check(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult {
        let now_ms = Self::now_ms();
        let window_ms = config.window_ms();

        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        // Drop stale windows before they accumulate
        if windows.len() > 4096 {
            windows.retain(|_, e| now_ms - e.window_start_ms < window_ms);
        }

        let entry = windows.entry(key.to_string()).or_insert(WindowEntry {
            window_start_ms: now_ms,
            count: 0,
        });

        if now_ms - entry.window_start_ms >= window_ms {
            entry.window_start_ms = now_ms;
            entry.count = 0;
        }

        let allowed = entry.count < config.max_requests;
        if allowed {
            entry.count += 1;
        }

        RateLimitResult {
            allowed,
            remaining: config.max_requests.saturating_sub(entry.count),
            reset_at_ms: entry.window_start_ms + window_ms,
        }
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.check(key, config))
    }
}
