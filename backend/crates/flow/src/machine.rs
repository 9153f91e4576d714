//! Recovery Flow State Machine
//!
//! Four steps, strictly forward:
//! `Email -> SecurityQuestions -> NewPassword -> Success`.
//!
//! A failed submit never changes step; it sets an error overlay the
//! caller can show and retries from the same place. There is no back
//! transition - an issued token would not be validly resumable after
//! stepping backwards, so the flow restarts from the beginning instead.

use std::collections::HashMap;

use platform::password::ClearTextPassword;
use platform::rate_limit::{MemoryRateLimitStore, RateLimitConfig, RateLimitStore};

use crate::gateway::{GatewayError, RecoveryGateway};
use crate::wire::AnswerPayload;

/// Guidance shown when the account has no recovery questions
pub const CONTACT_SUPPORT_MESSAGE: &str =
    "No recovery questions are available for this account. Please contact support.";

const UNREACHABLE_MESSAGE: &str = "Could not reach the server. Please try again.";

const RATE_LIMIT_MESSAGE: &str = "Too many verification attempts. Please try again later.";

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Email,
    SecurityQuestions,
    NewPassword,
    Success,
}

/// Client-side recovery wizard
///
/// Holds the transient recovery session: claimed email, fetched
/// questions, entered answers, and the verification token between the
/// verify and reset calls. All of it is discarded on success.
pub struct RecoveryFlow<G>
where
    G: RecoveryGateway,
{
    gateway: G,
    limiter: MemoryRateLimitStore,
    client_rate_limit: RateLimitConfig,
    step: Step,
    email: String,
    questions: Vec<String>,
    answers: HashMap<String, String>,
    token: Option<String>,
    error: Option<String>,
}

impl<G> RecoveryFlow<G>
where
    G: RecoveryGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            limiter: MemoryRateLimitStore::new(),
            // Mirrors the server's verify budget; a second line of
            // defense, not the enforcement point.
            client_rate_limit: RateLimitConfig::new(5, 3600),
            step: Step::Email,
            email: String::new(),
            questions: Vec::new(),
            answers: HashMap::new(),
            token: None,
            error: None,
        }
    }

    /// Override the client-side attempt budget
    pub fn with_client_rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.client_rate_limit = config;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Record the answer entered for one question
    pub fn set_answer(&mut self, question: &str, answer: &str) {
        self.answers
            .insert(question.to_string(), answer.to_string());
    }

    /// Submit the claimed email and fetch its questions
    pub async fn submit_email(&mut self, email: &str) -> Step {
        if self.step != Step::Email {
            return self.step;
        }

        let email = email.trim();
        if email.is_empty() {
            self.error = Some("Please enter your email address".to_string());
            return self.step;
        }

        match self.gateway.fetch_questions(email).await {
            Ok(questions) if questions.is_empty() => {
                // Terminal guidance: no account or no configured set -
                // the server does not say which, and neither do we.
                self.error = Some(CONTACT_SUPPORT_MESSAGE.to_string());
            }
            Ok(questions) => {
                tracing::debug!(count = questions.len(), "Security questions received");
                self.email = email.to_string();
                self.questions = questions;
                self.answers.clear();
                self.error = None;
                self.step = Step::SecurityQuestions;
            }
            Err(e) => self.error = Some(user_message(e)),
        }

        self.step
    }

    /// Submit the entered answers for verification
    pub async fn submit_answers(&mut self) -> Step {
        if self.step != Step::SecurityQuestions {
            return self.step;
        }

        let unanswered = self.questions.iter().any(|question| {
            self.answers
                .get(question)
                .is_none_or(|answer| answer.trim().is_empty())
        });
        if unanswered {
            self.error = Some("Please answer every question before continuing".to_string());
            return self.step;
        }

        let allowed = self
            .limiter
            .check_and_consume(
                &format!("verify:{}", self.email),
                &self.client_rate_limit,
            )
            .await
            .unwrap_or(false);
        if !allowed {
            self.error = Some(RATE_LIMIT_MESSAGE.to_string());
            return self.step;
        }

        let payload: Vec<AnswerPayload> = self
            .questions
            .iter()
            .map(|question| AnswerPayload {
                question: question.clone(),
                answer: self.answers[question].trim().to_string(),
            })
            .collect();

        match self.gateway.verify_answers(&self.email, &payload).await {
            Ok(identity) => {
                tracing::debug!("Security answers verified");
                self.token = Some(identity.token);
                self.answers.clear();
                self.error = None;
                self.step = Step::NewPassword;
            }
            Err(e) => self.error = Some(user_message(e)),
        }

        self.step
    }

    /// Submit the replacement password and finish the flow
    pub async fn submit_new_password(&mut self, new_password: &str, confirm: &str) -> Step {
        if self.step != Step::NewPassword {
            return self.step;
        }

        if new_password != confirm {
            self.error = Some("Passwords do not match".to_string());
            return self.step;
        }

        // Same policy the server enforces, checked before the token is
        // put at risk: a reset call spends the token even on rejection.
        if let Err(e) = ClearTextPassword::new(new_password.to_string()) {
            self.error = Some(e.to_string());
            return self.step;
        }

        let Some(token) = self.token.clone() else {
            self.error = Some("Verification has expired. Please start over.".to_string());
            return self.step;
        };

        match self
            .gateway
            .reset_password(&self.email, new_password, &token)
            .await
        {
            Ok(()) => {
                tracing::debug!("Password reset completed");
                self.token = None;
                self.error = None;
                self.step = Step::Success;
            }
            Err(e) => self.error = Some(user_message(e)),
        }

        self.step
    }
}

fn user_message(error: GatewayError) -> String {
    match error {
        GatewayError::Rejected(message) => message,
        GatewayError::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
    }
}
