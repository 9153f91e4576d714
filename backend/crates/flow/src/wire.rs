//! Wire Types
//!
//! Request/response shapes of the recovery API. Declared here rather
//! than imported from the server crate: the flow controller's only
//! dependency on the backend is this contract.

use serde::{Deserialize, Serialize};

/// One (question, answer) pair on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub question: String,
    pub answer: String,
}

/// Request for POST /questions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub email: String,
}

/// Response for POST /questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// Request for POST /verify
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub email: String,
    pub answers: Vec<AnswerPayload>,
}

/// Response for POST /verify
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub verified: bool,
    pub token: String,
    pub user_id: String,
    pub expires_at_ms: i64,
}

/// Request for POST /reset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub email: String,
    pub new_password: String,
    pub token: String,
}

/// Response for POST /reset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// RFC 7807 problem+json error body
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDetails {
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub action: Option<String>,
}
