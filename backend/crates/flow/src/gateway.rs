//! Recovery Gateway Trait
//!
//! The flow controller's view of the recovery API. Implemented over
//! HTTP in [`crate::http`] and by scripted fakes in tests.

use thiserror::Error;

use crate::wire::AnswerPayload;

/// Gateway call errors
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The server refused the request; the message is already user-safe
    #[error("{0}")]
    Rejected(String),

    /// The server could not be reached
    #[error("Network error: {0}")]
    Transport(String),
}

/// A verified identity as returned by the verify operation
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub token: String,
    pub user_id: String,
}

/// Client-side contract for the three recovery operations
#[trait_variant::make(RecoveryGateway: Send)]
pub trait LocalRecoveryGateway {
    /// Exchange an email for its configured question texts
    async fn fetch_questions(&self, email: &str) -> Result<Vec<String>, GatewayError>;

    /// Submit answers; success yields a single-use verification token
    async fn verify_answers(
        &self,
        email: &str,
        answers: &[AnswerPayload],
    ) -> Result<VerifiedIdentity, GatewayError>;

    /// Consume the token and set the new password
    async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        token: &str,
    ) -> Result<(), GatewayError>;
}
