//! PostgreSQL Repository Implementations
//!
//! The multi-instance backing for recovery state. Token consumption is a
//! single `DELETE .. RETURNING`, and rate limiting a single
//! `INSERT .. ON CONFLICT .. RETURNING`, so concurrent handlers on
//! different instances cannot double-spend a token or both pass the
//! attempt cap.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domain::entity::question_set::{SecurityQuestion, SecurityQuestionSet};
use crate::domain::entity::user_account::UserAccount;
use crate::domain::entity::verification_token::TokenRecord;
use crate::domain::repository::{
    CredentialWriter, QuestionSetRepository, TokenConsume, TokenRepository, UserDirectory,
};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::new_password::NewPassword;
use crate::error::{RecoveryError, RecoveryResult};
use kernel::id::UserId;
use platform::answer::AnswerHash;
use platform::rate_limit::{RateLimitConfig, RateLimitStore};

/// PostgreSQL-backed recovery store
#[derive(Clone)]
pub struct PgRecoveryStore {
    pool: PgPool,
}

impl PgRecoveryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired tokens and elapsed rate-limit windows
    pub async fn cleanup_expired(&self) -> RecoveryResult<(u64, u64)> {
        let now_ms = Utc::now().timestamp_millis();

        let tokens_deleted = sqlx::query("DELETE FROM recovery_tokens WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        let rate_limits_deleted =
            sqlx::query("DELETE FROM recovery_rate_limits WHERE reset_at_ms < $1")
                .bind(now_ms)
                .execute(&self.pool)
                .await?
                .rows_affected();

        tracing::info!(
            tokens = tokens_deleted,
            rate_limits = rate_limits_deleted,
            "Cleaned up expired recovery data"
        );

        Ok((tokens_deleted, rate_limits_deleted))
    }
}

// ============================================================================
// User Directory Implementation
// ============================================================================

impl UserDirectory for PgRecoveryStore {
    async fn find_by_email(&self, email: &Email) -> RecoveryResult<Option<UserAccount>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                security_questions IS NOT NULL AS has_security_questions
            FROM recovery_users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_account))
    }

    async fn find_by_id(&self, user_id: &UserId) -> RecoveryResult<Option<UserAccount>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                security_questions IS NOT NULL AS has_security_questions
            FROM recovery_users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_account))
    }
}

// ============================================================================
// Credential Writer Implementation
// ============================================================================

impl CredentialWriter for PgRecoveryStore {
    async fn force_set_password(
        &self,
        user_id: &UserId,
        password: &NewPassword,
    ) -> RecoveryResult<()> {
        let hash = password.hash()?;

        let updated = sqlx::query(
            "UPDATE recovery_users SET password_hash = $2, updated_at = now() WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .bind(hash.as_phc_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(RecoveryError::Internal(
                "User not found in directory".to_string(),
            ));
        }

        tracing::info!(user_id = %user_id, "Credential force-set");

        Ok(())
    }
}

// ============================================================================
// Question Set Repository Implementation
// ============================================================================

impl QuestionSetRepository for PgRecoveryStore {
    async fn save(&self, user_id: &UserId, set: &SecurityQuestionSet) -> RecoveryResult<()> {
        let rows: Vec<QuestionJson> = set
            .entries()
            .iter()
            .map(|entry| QuestionJson {
                question: entry.question.clone(),
                answer_hash: entry.answer_hash.as_phc_string().to_string(),
            })
            .collect();
        let json = serde_json::to_value(&rows)
            .map_err(|e| RecoveryError::Internal(e.to_string()))?;

        let updated = sqlx::query(
            r#"
            UPDATE recovery_users
            SET security_questions = $2, updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(json)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(RecoveryError::Internal(
                "User not found in directory".to_string(),
            ));
        }

        Ok(())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> RecoveryResult<Option<SecurityQuestionSet>> {
        let json = sqlx::query_scalar::<_, Option<serde_json::Value>>(
            "SELECT security_questions FROM recovery_users WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .flatten();

        let Some(json) = json else {
            return Ok(None);
        };

        let rows: Vec<QuestionJson> = serde_json::from_value(json)
            .map_err(|e| RecoveryError::Internal(format!("Corrupt question set: {}", e)))?;

        let entries = rows
            .into_iter()
            .map(|row| SecurityQuestion {
                question: row.question,
                answer_hash: AnswerHash::from_stored(row.answer_hash),
            })
            .collect();

        Ok(Some(SecurityQuestionSet::new(entries)?))
    }
}

// ============================================================================
// Token Repository Implementation
// ============================================================================

impl TokenRepository for PgRecoveryStore {
    async fn create(&self, record: &TokenRecord) -> RecoveryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recovery_tokens (
                token_fingerprint,
                user_id,
                email,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.fingerprint)
        .bind(record.user_id.as_str())
        .bind(record.email.as_str())
        .bind(record.expires_at_ms)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id = %record.user_id, "Verification token created");

        Ok(())
    }

    async fn consume(&self, fingerprint: &str) -> RecoveryResult<TokenConsume> {
        // Unconditional delete: the row is gone whether or not it turns
        // out to be expired. Exactly one concurrent caller gets the row.
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            DELETE FROM recovery_tokens
            WHERE token_fingerprint = $1
            RETURNING
                token_fingerprint,
                user_id,
                email,
                expires_at_ms,
                created_at
            "#,
        )
        .bind(fingerprint)
        .fetch_optional(&self.pool)
        .await?;

        let now_ms = Utc::now().timestamp_millis();

        Ok(match row {
            None => TokenConsume::Missing,
            Some(row) if row.expires_at_ms < now_ms => TokenConsume::Expired,
            Some(row) => TokenConsume::Consumed(row.into_record()),
        })
    }
}

// ============================================================================
// Rate Limit Store Implementation
// ============================================================================

impl RateLimitStore for PgRecoveryStore {
    async fn check_and_consume(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let now_ms = Utc::now().timestamp_millis();
        let reset_at_ms = now_ms + config.window_ms();

        // Single statement: a fresh or elapsed window restarts at 1,
        // otherwise the counter advances. The counter keeps counting
        // past the cap; allowed is decided by comparison.
        let attempts = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO recovery_rate_limits AS rl (bucket_key, attempts, reset_at_ms)
            VALUES ($1, 1, $2)
            ON CONFLICT (bucket_key) DO UPDATE SET
                attempts = CASE
                    WHEN rl.reset_at_ms <= $3 THEN 1
                    ELSE rl.attempts + 1
                END,
                reset_at_ms = CASE
                    WHEN rl.reset_at_ms <= $3 THEN $2
                    ELSE rl.reset_at_ms
                END
            RETURNING attempts
            "#,
        )
        .bind(key)
        .bind(reset_at_ms)
        .bind(now_ms)
        .fetch_one(&self.pool)
        .await?;

        let allowed = attempts as u32 <= config.max_attempts;

        if !allowed {
            tracing::warn!(attempts = attempts, max = config.max_attempts, "Rate limit exceeded");
        }

        Ok(allowed)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    email: String,
    has_security_questions: bool,
}

impl UserRow {
    fn into_account(self) -> UserAccount {
        UserAccount {
            user_id: UserId::from_string(self.user_id),
            email: Email::from_db(self.email),
            has_security_questions: self.has_security_questions,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    token_fingerprint: String,
    user_id: String,
    email: String,
    expires_at_ms: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TokenRow {
    fn into_record(self) -> TokenRecord {
        TokenRecord {
            fingerprint: self.token_fingerprint,
            user_id: UserId::from_string(self.user_id),
            email: Email::from_db(self.email),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}

/// JSONB shape of one stored question entry
#[derive(Serialize, Deserialize)]
struct QuestionJson {
    question: String,
    answer_hash: String,
}
