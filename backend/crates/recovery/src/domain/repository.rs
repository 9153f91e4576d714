//! Repository Traits
//!
//! Interfaces for data persistence and for the external collaborators
//! (user store, primary auth provider). Implementations live in the
//! infrastructure layer.

use crate::domain::entity::question_set::SecurityQuestionSet;
use crate::domain::entity::user_account::UserAccount;
use crate::domain::entity::verification_token::TokenRecord;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::new_password::NewPassword;
use crate::error::RecoveryResult;
use kernel::id::UserId;

/// User directory trait (external user store boundary)
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Find a user by email
    async fn find_by_email(&self, email: &Email) -> RecoveryResult<Option<UserAccount>>;

    /// Find a user by ID
    async fn find_by_id(&self, user_id: &UserId) -> RecoveryResult<Option<UserAccount>>;
}

/// Credential writer trait (external primary-auth boundary)
///
/// Force-sets a user's primary credential. The only legitimate caller in
/// this subsystem is the reset use case, gated by a consumed token.
#[trait_variant::make(CredentialWriter: Send)]
pub trait LocalCredentialWriter {
    /// Overwrite the user's primary credential
    async fn force_set_password(
        &self,
        user_id: &UserId,
        password: &NewPassword,
    ) -> RecoveryResult<()>;
}

/// Security question set repository trait
#[trait_variant::make(QuestionSetRepository: Send)]
pub trait LocalQuestionSetRepository {
    /// Atomically overwrite the user's whole question set
    async fn save(&self, user_id: &UserId, set: &SecurityQuestionSet) -> RecoveryResult<()>;

    /// Load the user's question set, if configured
    async fn find_by_user_id(&self, user_id: &UserId) -> RecoveryResult<Option<SecurityQuestionSet>>;
}

/// Outcome of an atomic token consumption
#[derive(Debug)]
pub enum TokenConsume {
    /// Token was present and live; the record is returned and the token
    /// no longer exists in the store
    Consumed(TokenRecord),
    /// Token was present but past expiry; it has been deleted
    Expired,
    /// No such token (never issued, or already consumed)
    Missing,
}

/// Verification token repository trait
#[trait_variant::make(TokenRepository: Send)]
pub trait LocalTokenRepository {
    /// Persist a freshly-issued token record
    async fn create(&self, record: &TokenRecord) -> RecoveryResult<()>;

    /// Atomic lookup-and-delete by fingerprint
    ///
    /// The record is removed on every hit, expired or not. Under two
    /// concurrent calls for the same fingerprint exactly one observes
    /// `Consumed`.
    async fn consume(&self, fingerprint: &str) -> RecoveryResult<TokenConsume>;
}
