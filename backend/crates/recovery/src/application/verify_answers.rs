//! Verify Security Answers Use Case
//!
//! The identity-proving step. Every submitted answer is hash-verified
//! even after one has already failed, so response timing does not reveal
//! which answer was wrong. Every failure path produces the same
//! `AnswersIncorrect` error - unknown email, missing set, wrong answer,
//! and duplicated question are indistinguishable to the caller.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::domain::entity::question_set::QUESTION_COUNT;
use crate::domain::entity::verification_token::VerificationToken;
use crate::domain::repository::{QuestionSetRepository, TokenRepository, UserDirectory};
use crate::domain::value_object::email::Email;
use crate::error::{RecoveryError, RecoveryResult};
use kernel::id::UserId;
use platform::answer::NormalizedAnswer;
use platform::rate_limit::RateLimitStore;

/// One (question, answer) pair as submitted by the claimant
#[derive(Debug, Clone)]
pub struct SubmittedAnswer {
    pub question: String,
    pub answer: String,
}

/// Input DTO for answer verification
#[derive(Debug, Clone)]
pub struct VerifySecurityAnswersInput {
    pub email: String,
    pub answers: Vec<SubmittedAnswer>,
}

/// Output DTO for a successful verification
#[derive(Debug)]
pub struct VerifySecurityAnswersOutput {
    /// The single-use token secret; returned to the caller exactly once
    pub token: String,
    pub user_id: UserId,
    pub expires_at_ms: i64,
}

/// Verify Security Answers Use Case
pub struct VerifySecurityAnswersUseCase<U, Q, T, L>
where
    U: UserDirectory,
    Q: QuestionSetRepository,
    T: TokenRepository,
    L: RateLimitStore,
{
    user_dir: Arc<U>,
    question_repo: Arc<Q>,
    token_repo: Arc<T>,
    limiter: Arc<L>,
    config: Arc<RecoveryConfig>,
}

impl<U, Q, T, L> VerifySecurityAnswersUseCase<U, Q, T, L>
where
    U: UserDirectory,
    Q: QuestionSetRepository,
    T: TokenRepository,
    L: RateLimitStore,
{
    pub fn new(
        user_dir: Arc<U>,
        question_repo: Arc<Q>,
        token_repo: Arc<T>,
        limiter: Arc<L>,
        config: Arc<RecoveryConfig>,
    ) -> Self {
        Self {
            user_dir,
            question_repo,
            token_repo,
            limiter,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: VerifySecurityAnswersInput,
    ) -> RecoveryResult<VerifySecurityAnswersOutput> {
        // Shape checks fail fast and never consume a rate-limit slot
        let email = Email::new(&input.email)?;
        if !self.config.email_domain_allowed(&email) {
            return Err(RecoveryError::InvalidEmail);
        }
        if input.answers.len() != QUESTION_COUNT {
            return Err(RecoveryError::InvalidInput(format!(
                "Exactly {} answers are required",
                QUESTION_COUNT
            )));
        }

        let allowed = self
            .limiter
            .check_and_consume(
                &format!("verify:{}", email.as_str()),
                &self.config.verify_rate_limit,
            )
            .await
            .map_err(|e| RecoveryError::Internal(e.to_string()))?;

        if !allowed {
            return Err(RecoveryError::RateLimited);
        }

        let Some(account) = self.user_dir.find_by_email(&email).await? else {
            tracing::debug!("Answer verification attempted for unknown email");
            return Err(RecoveryError::AnswersIncorrect);
        };

        let Some(set) = self.question_repo.find_by_user_id(&account.user_id).await? else {
            tracing::debug!(user_id = %account.user_id, "Answer verification without configured set");
            return Err(RecoveryError::AnswersIncorrect);
        };

        let mut all_correct = input.answers.len() == set.len();
        let mut matched: HashSet<&str> = HashSet::new();

        // No early exit: every answer is checked so that which one failed
        // does not show up in the response timing.
        for submitted in &input.answers {
            let correct = match set.find(&submitted.question) {
                Some(entry) if matched.insert(entry.question.as_str()) => {
                    match NormalizedAnswer::new(&submitted.answer) {
                        Ok(normalized) => entry.answer_hash.verify(&normalized),
                        Err(_) => false,
                    }
                }
                // Unknown question text, or the same question twice
                _ => false,
            };
            all_correct &= correct;
        }

        if !all_correct {
            tracing::warn!(user_id = %account.user_id, "Security answer verification failed");
            return Err(RecoveryError::AnswersIncorrect);
        }

        let token = VerificationToken::issue(
            account.user_id.clone(),
            email,
            self.config.token_ttl_ms(),
        );
        self.token_repo.create(token.record()).await?;

        tracing::info!(
            user_id = %account.user_id,
            expires_at_ms = token.record().expires_at_ms,
            "Security answers verified, token issued"
        );

        Ok(VerifySecurityAnswersOutput {
            token: token.secret().to_string(),
            user_id: account.user_id,
            expires_at_ms: token.record().expires_at_ms,
        })
    }
}
