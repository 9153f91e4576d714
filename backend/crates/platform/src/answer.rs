//! Security-Answer Hashing and Verification
//!
//! One-way handling of security-question answers:
//! - Normalization (NFKC, trim, lowercase) applied identically at
//!   save time and verify time, so case/whitespace differences never
//!   cause a false rejection
//! - Argon2id hashing with a per-call random salt
//! - Verification through the hash primitive's own constant-time compare
//!
//! A malformed stored hash verifies as `false` rather than erroring, so
//! corrupt data and a wrong answer are indistinguishable to callers.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Answer validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerPolicyError {
    /// Answer is empty after normalization
    #[error("Answer cannot be empty")]
    Empty,
}

/// Answer hashing errors
#[derive(Debug, Error)]
pub enum AnswerHashError {
    /// Hashing operation failed
    #[error("Answer hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Normalized Answer (Zeroized on drop)
// ============================================================================

/// A security answer in canonical form
///
/// Normalization: Unicode NFKC, surrounding whitespace trimmed,
/// lowercased. Memory is zeroized on drop and Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct NormalizedAnswer(String);

impl NormalizedAnswer {
    /// Normalize a raw answer
    ///
    /// Returns [`AnswerPolicyError::Empty`] if nothing remains after
    /// trimming.
    pub fn new(raw: &str) -> Result<Self, AnswerPolicyError> {
        let normalized: String = raw.nfkc().collect::<String>().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AnswerPolicyError::Empty);
        }

        Ok(Self(normalized))
    }

    /// Get the answer as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for NormalizedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NormalizedAnswer")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Answer Hash (Safe to store)
// ============================================================================

/// Hashed security answer in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct AnswerHash {
    hash: String,
}

impl AnswerHash {
    /// Hash a normalized answer with a fresh random salt
    pub fn from_answer(answer: &NormalizedAnswer) -> Result<Self, AnswerHashError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(answer.as_bytes(), &salt)
            .map_err(|e| AnswerHashError::HashingFailed(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash string loaded from storage
    ///
    /// Deliberately does not validate the PHC format: a corrupt stored
    /// hash must behave exactly like a wrong answer at verify time, not
    /// like a distinguishable error.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a normalized answer against this hash
    ///
    /// Returns `false` for a wrong answer and for a malformed stored
    /// hash alike. Comparison happens inside the Argon2 primitive.
    pub fn verify(&self, answer: &NormalizedAnswer) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(answer.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for AnswerHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnswerHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
