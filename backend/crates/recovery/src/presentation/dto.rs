//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// One (question, answer) pair on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    pub question: String,
    pub answer: String,
}

// ============================================================================
// Get Security Questions
// ============================================================================

/// Request for POST /api/recovery/questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub email: String,
}

/// Response for POST /api/recovery/questions
///
/// `questions` is empty both for unknown emails and for accounts without
/// a configured set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

// ============================================================================
// Verify Security Answers
// ============================================================================

/// Request for POST /api/recovery/verify
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAnswersRequest {
    pub email: String,
    pub answers: Vec<AnswerDto>,
}

/// Response for POST /api/recovery/verify
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAnswersResponse {
    pub verified: bool,
    pub token: String,
    pub user_id: String,
    pub expires_at_ms: i64,
}

// ============================================================================
// Reset Password
// ============================================================================

/// Request for POST /api/recovery/reset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
    pub token: String,
}

/// Response for POST /api/recovery/reset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Save Security Questions (authenticated owner)
// ============================================================================

/// Request for PUT /api/recovery/questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuestionsRequest {
    pub user_id: String,
    pub questions: Vec<AnswerDto>,
}
