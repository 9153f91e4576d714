//! New Password Value Object
//!
//! Domain wrapper for the replacement password chosen at the end of the
//! recovery flow. Delegates policy and hashing to `platform::password`.

use crate::error::{RecoveryError, RecoveryResult};
use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

/// A policy-validated replacement password
///
/// Memory is zeroized when dropped; Debug output is redacted.
pub struct NewPassword(ClearTextPassword);

impl NewPassword {
    /// Validate a raw password against the recovery policy
    ///
    /// Policy: 12-128 characters with at least one uppercase letter,
    /// lowercase letter, digit, and punctuation symbol.
    pub fn new(raw: String) -> RecoveryResult<Self> {
        let clear_text =
            ClearTextPassword::new(raw).map_err(|e| RecoveryError::WeakPassword(e.to_string()))?;
        Ok(Self(clear_text))
    }

    /// The plaintext, for handing to the external credential setter
    ///
    /// Never log this value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Hash with Argon2id for storage by the reference credential writer
    pub fn hash(&self) -> RecoveryResult<HashedPassword> {
        Ok(self.0.hash()?)
    }

    /// Access the inner cleartext (for verification in stores/tests)
    pub fn cleartext(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NewPassword").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_enforced() {
        // 11 characters: one short of the minimum
        let result = NewPassword::new("Short1!aaaa".to_string());
        assert!(matches!(result, Err(RecoveryError::WeakPassword(_))));

        assert!(NewPassword::new("Correct#Horse7battery".to_string()).is_ok());
    }

    #[test]
    fn test_hash_verifies() {
        let password = NewPassword::new("Correct#Horse7battery".to_string()).unwrap();
        let hashed = password.hash().unwrap();
        assert!(hashed.verify(password.cleartext()));
    }

    #[test]
    fn test_debug_redaction() {
        let password = NewPassword::new("Correct#Horse7battery".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("Horse"));
    }
}
