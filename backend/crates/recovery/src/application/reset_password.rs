//! Reset Password Use Case
//!
//! Final step of the recovery flow: consume the verification token and
//! force-set the user's primary credential.
//!
//! Consumption is fail-closed: the token is deleted the moment it is
//! looked up, whether or not the checks after it pass. A claimant whose
//! password fails policy, or whose email does not match the token, must
//! restart from answer verification. Clients are expected to validate
//! the password policy before calling (the flow controller does).

use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::domain::entity::verification_token::VerificationToken;
use crate::domain::repository::{CredentialWriter, TokenConsume, TokenRepository, UserDirectory};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::new_password::NewPassword;
use crate::error::{RecoveryError, RecoveryResult};
use platform::rate_limit::RateLimitStore;

/// Input DTO for password reset
#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub email: String,
    pub new_password: String,
    pub token: String,
}

/// Reset Password Use Case
pub struct ResetPasswordUseCase<U, C, T, L>
where
    U: UserDirectory,
    C: CredentialWriter,
    T: TokenRepository,
    L: RateLimitStore,
{
    user_dir: Arc<U>,
    credentials: Arc<C>,
    token_repo: Arc<T>,
    limiter: Arc<L>,
    config: Arc<RecoveryConfig>,
}

impl<U, C, T, L> ResetPasswordUseCase<U, C, T, L>
where
    U: UserDirectory,
    C: CredentialWriter,
    T: TokenRepository,
    L: RateLimitStore,
{
    pub fn new(
        user_dir: Arc<U>,
        credentials: Arc<C>,
        token_repo: Arc<T>,
        limiter: Arc<L>,
        config: Arc<RecoveryConfig>,
    ) -> Self {
        Self {
            user_dir,
            credentials,
            token_repo,
            limiter,
            config,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> RecoveryResult<()> {
        let email = Email::new(&input.email)?;

        let allowed = self
            .limiter
            .check_and_consume(
                &format!("reset:{}", email.as_str()),
                &self.config.reset_rate_limit,
            )
            .await
            .map_err(|e| RecoveryError::Internal(e.to_string()))?;

        if !allowed {
            return Err(RecoveryError::RateLimited);
        }

        // From here on the token is spent, no matter what fails below.
        let record = match self
            .token_repo
            .consume(&VerificationToken::fingerprint_of(&input.token))
            .await?
        {
            TokenConsume::Consumed(record) => record,
            TokenConsume::Expired => return Err(RecoveryError::TokenExpired),
            TokenConsume::Missing => return Err(RecoveryError::TokenNotFound),
        };

        let new_password = NewPassword::new(input.new_password)?;

        if record.email != email {
            return Err(RecoveryError::TokenMismatch);
        }

        // The token's user must still resolve to an account with this
        // email; guards against token/email drift since issuance.
        let account = self
            .user_dir
            .find_by_id(&record.user_id)
            .await?
            .ok_or(RecoveryError::UserMismatch)?;
        if account.email != email {
            return Err(RecoveryError::UserMismatch);
        }

        self.credentials
            .force_set_password(&record.user_id, &new_password)
            .await?;

        tracing::info!(user_id = %record.user_id, "Password reset completed");

        Ok(())
    }
}
