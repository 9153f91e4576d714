//! Verification Token Entity
//!
//! A short-lived, single-use credential bridging a successful
//! answer-verification call to the password-reset call that follows.
//!
//! The secret is 32 bytes from the OS RNG (256 bits of entropy),
//! base64url encoded. Stores never see the secret: records are keyed by
//! its SHA-256 fingerprint, so an exfiltrated token table cannot be
//! replayed.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::value_object::email::Email;
use kernel::id::UserId;
use platform::crypto::{random_bytes, sha256_hex, to_base64url};

/// Secret length in bytes
pub const TOKEN_BYTES: usize = 32;

/// Stored form of a verification token
#[derive(Debug, Clone)]
pub struct TokenRecord {
    /// SHA-256 hex fingerprint of the secret
    pub fingerprint: String,
    pub user_id: UserId,
    pub email: Email,
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

/// A freshly-issued verification token
///
/// Carries the secret exactly once, on its way back to the caller.
pub struct VerificationToken {
    secret: String,
    record: TokenRecord,
}

impl VerificationToken {
    /// Issue a new token for a verified identity
    pub fn issue(user_id: UserId, email: Email, ttl_ms: i64) -> Self {
        let secret = to_base64url(&random_bytes(TOKEN_BYTES));
        let now = Utc::now();

        Self {
            record: TokenRecord {
                fingerprint: sha256_hex(secret.as_bytes()),
                user_id,
                email,
                expires_at_ms: now.timestamp_millis() + ttl_ms,
                created_at: now,
            },
            secret,
        }
    }

    /// Fingerprint of a presented secret, for lookup at consume time
    pub fn fingerprint_of(secret: &str) -> String {
        sha256_hex(secret.as_bytes())
    }

    /// The secret to hand back to the caller
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The record to persist
    pub fn record(&self) -> &TokenRecord {
        &self.record
    }
}

impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationToken")
            .field("secret", &"[REDACTED]")
            .field("record", &self.record)
            .finish()
    }
}
