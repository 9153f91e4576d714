//! Get Security Questions Use Case
//!
//! First step of the recovery flow: the claimed email is exchanged for
//! its configured question texts. An unknown email and an email without
//! a configured set both return the empty list - the two cases must be
//! indistinguishable to the caller.

use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::domain::repository::{QuestionSetRepository, UserDirectory};
use crate::domain::value_object::email::Email;
use crate::error::{RecoveryError, RecoveryResult};
use platform::rate_limit::RateLimitStore;

/// Get Security Questions Use Case
pub struct GetSecurityQuestionsUseCase<U, Q, L>
where
    U: UserDirectory,
    Q: QuestionSetRepository,
    L: RateLimitStore,
{
    user_dir: Arc<U>,
    question_repo: Arc<Q>,
    limiter: Arc<L>,
    config: Arc<RecoveryConfig>,
}

impl<U, Q, L> GetSecurityQuestionsUseCase<U, Q, L>
where
    U: UserDirectory,
    Q: QuestionSetRepository,
    L: RateLimitStore,
{
    pub fn new(
        user_dir: Arc<U>,
        question_repo: Arc<Q>,
        limiter: Arc<L>,
        config: Arc<RecoveryConfig>,
    ) -> Self {
        Self {
            user_dir,
            question_repo,
            limiter,
            config,
        }
    }

    pub async fn execute(&self, email_raw: &str) -> RecoveryResult<Vec<String>> {
        // Input validation fails fast, before any rate-limit slot is spent
        let email = Email::new(email_raw)?;
        if !self.config.email_domain_allowed(&email) {
            return Err(RecoveryError::InvalidEmail);
        }

        let allowed = self
            .limiter
            .check_and_consume(
                &format!("questions:{}", email.as_str()),
                &self.config.questions_rate_limit,
            )
            .await
            .map_err(|e| RecoveryError::Internal(e.to_string()))?;

        if !allowed {
            return Err(RecoveryError::RateLimited);
        }

        let Some(account) = self.user_dir.find_by_email(&email).await? else {
            tracing::debug!("Recovery questions requested for unknown email");
            return Ok(Vec::new());
        };

        let Some(set) = self.question_repo.find_by_user_id(&account.user_id).await? else {
            tracing::debug!(user_id = %account.user_id, "No security question set configured");
            return Ok(Vec::new());
        };

        tracing::info!(user_id = %account.user_id, "Security questions fetched");

        Ok(set.questions())
    }
}
