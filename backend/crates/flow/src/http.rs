//! HTTP Recovery Gateway
//!
//! reqwest-backed implementation of [`RecoveryGateway`] against the
//! recovery API's JSON endpoints.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::gateway::{GatewayError, RecoveryGateway, VerifiedIdentity};
use crate::wire::{
    AnswerPayload, ProblemDetails, QuestionsRequest, QuestionsResponse, ResetRequest,
    ResetResponse, VerifyRequest, VerifyResponse,
};

/// HTTP gateway to the recovery API
#[derive(Debug, Clone)]
pub struct HttpRecoveryGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecoveryGateway {
    /// Create a gateway for a base URL such as
    /// `https://api.example.com/api/recovery`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, GatewayError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Resp>()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()));
        }

        // Error bodies are RFC 7807; fall back to the status line when
        // the body is not parseable.
        let detail = response
            .json::<ProblemDetails>()
            .await
            .ok()
            .and_then(|problem| problem.detail)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        tracing::debug!(%url, %status, "Recovery API rejected request");

        Err(GatewayError::Rejected(detail))
    }
}

impl RecoveryGateway for HttpRecoveryGateway {
    async fn fetch_questions(&self, email: &str) -> Result<Vec<String>, GatewayError> {
        let response: QuestionsResponse = self
            .post_json(
                "/questions",
                &QuestionsRequest {
                    email: email.to_string(),
                },
            )
            .await?;

        Ok(response.questions)
    }

    async fn verify_answers(
        &self,
        email: &str,
        answers: &[AnswerPayload],
    ) -> Result<VerifiedIdentity, GatewayError> {
        let response: VerifyResponse = self
            .post_json(
                "/verify",
                &VerifyRequest {
                    email: email.to_string(),
                    answers: answers.to_vec(),
                },
            )
            .await?;

        Ok(VerifiedIdentity {
            token: response.token,
            user_id: response.user_id,
        })
    }

    async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        token: &str,
    ) -> Result<(), GatewayError> {
        let _: ResetResponse = self
            .post_json(
                "/reset",
                &ResetRequest {
                    email: email.to_string(),
                    new_password: new_password.to_string(),
                    token: token.to_string(),
                },
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let gateway = HttpRecoveryGateway::new("https://api.example.com/api/recovery/");
        assert_eq!(gateway.base_url, "https://api.example.com/api/recovery");
    }
}
