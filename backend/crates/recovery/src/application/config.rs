//! Application Configuration
//!
//! Configuration for the recovery application layer. The limiter itself
//! is policy-agnostic; each operation's attempt budget lives here.

use std::time::Duration;

use crate::domain::value_object::email::Email;
use platform::rate_limit::RateLimitConfig;

/// Recovery application configuration
#[derive(Debug, Clone)]
pub struct RecoveryConfig {
    /// Restrict recovery to emails in this domain (None = any domain)
    pub allowed_email_domain: Option<String>,
    /// Rate limit for question lookups, keyed by email
    pub questions_rate_limit: RateLimitConfig,
    /// Rate limit for answer verification, keyed by email
    pub verify_rate_limit: RateLimitConfig,
    /// Rate limit for reset attempts, keyed by email
    pub reset_rate_limit: RateLimitConfig,
    /// Verification token TTL
    pub token_ttl: Duration,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            allowed_email_domain: None,
            questions_rate_limit: RateLimitConfig::new(30, 15 * 60),
            verify_rate_limit: RateLimitConfig::new(5, 3600),
            reset_rate_limit: RateLimitConfig::new(10, 15 * 60),
            token_ttl: Duration::from_secs(10 * 60),
        }
    }
}

impl RecoveryConfig {
    /// Create config restricted to one institutional email domain
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            allowed_email_domain: Some(domain.into()),
            ..Default::default()
        }
    }

    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Check an email against the configured domain restriction
    pub fn email_domain_allowed(&self, email: &Email) -> bool {
        match &self.allowed_email_domain {
            Some(domain) => email.domain().eq_ignore_ascii_case(domain),
            None => true,
        }
    }
}
