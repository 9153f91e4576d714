//! In-Memory Repository Implementation
//!
//! Single-process reference store. One mutex guards all recovery state,
//! so token consumption and question-set writes are atomic with respect
//! to concurrent handlers. Records do not survive a restart and are not
//! shared across instances; a multi-instance deployment must use
//! [`crate::infra::postgres::PgRecoveryStore`] behind the same traits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entity::question_set::SecurityQuestionSet;
use crate::domain::entity::user_account::UserAccount;
use crate::domain::entity::verification_token::TokenRecord;
use crate::domain::repository::{
    CredentialWriter, QuestionSetRepository, TokenConsume, TokenRepository, UserDirectory,
};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::new_password::NewPassword;
use crate::error::{RecoveryError, RecoveryResult};
use kernel::id::UserId;
use platform::password::HashedPassword;
use platform::rate_limit::{MemoryRateLimitStore, RateLimitConfig, RateLimitStore};

#[derive(Debug)]
struct StoredUser {
    user_id: UserId,
    email: Email,
    password_hash: Option<HashedPassword>,
    question_set: Option<SecurityQuestionSet>,
}

#[derive(Debug, Default)]
struct State {
    /// Keyed by user id
    users: HashMap<String, StoredUser>,
    /// Keyed by token fingerprint
    tokens: HashMap<String, TokenRecord>,
}

/// In-memory recovery store
///
/// Implements every repository trait plus the rate-limit store, so a
/// single instance can back the whole router in tests and single-process
/// deployments.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecoveryStore {
    state: Arc<Mutex<State>>,
    limiter: MemoryRateLimitStore,
}

impl MemoryRecoveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user record, as the external user store would
    pub fn insert_user(&self, email: &str) -> RecoveryResult<UserId> {
        let email = Email::new(email)?;
        let user_id = UserId::new_random();

        let mut state = self.lock();
        state.users.insert(
            user_id.as_str().to_string(),
            StoredUser {
                user_id: user_id.clone(),
                email,
                password_hash: None,
                question_set: None,
            },
        );

        Ok(user_id)
    }

    /// Drop a user record, as an account deletion in the external store would
    pub fn remove_user(&self, user_id: &UserId) {
        self.lock().users.remove(user_id.as_str());
    }

    /// Check a candidate password against the stored credential
    pub fn password_matches(&self, user_id: &UserId, candidate: &NewPassword) -> bool {
        let state = self.lock();
        state
            .users
            .get(user_id.as_str())
            .and_then(|user| user.password_hash.as_ref())
            .is_some_and(|hash| hash.verify(candidate.cleartext()))
    }

    /// Number of live token records (expired ones included until touched)
    pub fn token_count(&self) -> usize {
        self.lock().tokens.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("recovery store lock poisoned")
    }
}

impl UserDirectory for MemoryRecoveryStore {
    async fn find_by_email(&self, email: &Email) -> RecoveryResult<Option<UserAccount>> {
        let state = self.lock();
        Ok(state
            .users
            .values()
            .find(|user| &user.email == email)
            .map(to_account))
    }

    async fn find_by_id(&self, user_id: &UserId) -> RecoveryResult<Option<UserAccount>> {
        let state = self.lock();
        Ok(state.users.get(user_id.as_str()).map(to_account))
    }
}

impl CredentialWriter for MemoryRecoveryStore {
    async fn force_set_password(
        &self,
        user_id: &UserId,
        password: &NewPassword,
    ) -> RecoveryResult<()> {
        let hash = password.hash()?;

        let mut state = self.lock();
        let user = state
            .users
            .get_mut(user_id.as_str())
            .ok_or_else(|| RecoveryError::Internal("User not found in directory".to_string()))?;
        user.password_hash = Some(hash);

        Ok(())
    }
}

impl QuestionSetRepository for MemoryRecoveryStore {
    async fn save(&self, user_id: &UserId, set: &SecurityQuestionSet) -> RecoveryResult<()> {
        let mut state = self.lock();
        let user = state
            .users
            .get_mut(user_id.as_str())
            .ok_or_else(|| RecoveryError::Internal("User not found in directory".to_string()))?;
        user.question_set = Some(set.clone());

        Ok(())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> RecoveryResult<Option<SecurityQuestionSet>> {
        let state = self.lock();
        Ok(state
            .users
            .get(user_id.as_str())
            .and_then(|user| user.question_set.clone()))
    }
}

impl TokenRepository for MemoryRecoveryStore {
    async fn create(&self, record: &TokenRecord) -> RecoveryResult<()> {
        let mut state = self.lock();
        state
            .tokens
            .insert(record.fingerprint.clone(), record.clone());
        Ok(())
    }

    async fn consume(&self, fingerprint: &str) -> RecoveryResult<TokenConsume> {
        // Remove-then-inspect under one lock: a hit deletes the record
        // before anything is checked, so no outcome can be retried.
        let removed = self.lock().tokens.remove(fingerprint);

        Ok(match removed {
            None => TokenConsume::Missing,
            Some(record) if record.is_expired() => TokenConsume::Expired,
            Some(record) => TokenConsume::Consumed(record),
        })
    }
}

impl RateLimitStore for MemoryRecoveryStore {
    async fn check_and_consume(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.limiter.check_and_consume(key, config).await
    }
}

fn to_account(user: &StoredUser) -> UserAccount {
    UserAccount {
        user_id: user.user_id.clone(),
        email: user.email.clone(),
        has_security_questions: user.question_set.is_some(),
    }
}
