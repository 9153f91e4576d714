//! Rate Limiting Infrastructure
//!
//! Policy-agnostic fixed-window attempt counting. Each call site supplies
//! its own [`RateLimitConfig`]; the limiter itself knows nothing about
//! what it is protecting.
//!
//! Known limitation: this is a fixed-window counter, not a sliding one.
//! A burst straddling a window boundary can reach twice the nominal rate
//! in the worst case. That tradeoff is accepted for the simplicity of an
//! atomic per-key record.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum attempts allowed in the window
    pub max_attempts: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_attempts: u32, window_secs: u64) -> Self {
        Self {
            max_attempts,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and consume one attempt for `key`
    ///
    /// Returns `true` if the attempt is allowed. A denied call must not
    /// extend or reset the window.
    async fn check_and_consume(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

// ============================================================================
// In-memory store
// ============================================================================

/// Per-key attempt window
#[derive(Debug, Clone)]
struct WindowRecord {
    attempts: u32,
    reset_at_ms: i64,
}

/// In-memory fixed-window store
///
/// Suitable for a single process. The map only grows as keys are first
/// seen; call [`MemoryRateLimitStore::sweep_stale`] periodically to bound
/// memory (correctness does not depend on the sweep).
#[derive(Debug, Clone, Default)]
pub struct MemoryRateLimitStore {
    records: Arc<Mutex<HashMap<String, WindowRecord>>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove records whose window has already elapsed
    ///
    /// Returns the number of records removed.
    pub fn sweep_stale(&self) -> usize {
        let now = now_ms();
        let mut records = self.records.lock().expect("rate limit lock poisoned");
        let before = records.len();
        records.retain(|_, record| record.reset_at_ms > now);
        before - records.len()
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_consume(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let now = now_ms();
        let window_ms = config.window_ms();
        let mut records = self.records.lock().expect("rate limit lock poisoned");

        let record = records.entry(key.to_string()).or_insert(WindowRecord {
            attempts: 0,
            reset_at_ms: now + window_ms,
        });

        // The previous window elapsed: replace the record, not extend it
        if now > record.reset_at_ms {
            *record = WindowRecord {
                attempts: 0,
                reset_at_ms: now + window_ms,
            };
        }

        // At the cap: deny without touching the record
        if record.attempts >= config.max_attempts {
            return Ok(false);
        }

        record.attempts += 1;
        Ok(true)
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_millis() as i64
}
