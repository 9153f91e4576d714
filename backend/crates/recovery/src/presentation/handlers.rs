//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::application::{
    GetSecurityQuestionsUseCase, QuestionAnswerPair, ResetPasswordInput, ResetPasswordUseCase,
    SaveSecurityQuestionsInput, SaveSecurityQuestionsUseCase, SubmittedAnswer,
    VerifySecurityAnswersInput, VerifySecurityAnswersUseCase,
};
use crate::domain::repository::{
    CredentialWriter, QuestionSetRepository, TokenRepository, UserDirectory,
};
use crate::error::RecoveryResult;
use crate::presentation::dto::{
    QuestionsRequest, QuestionsResponse, ResetPasswordRequest, ResetPasswordResponse,
    SaveQuestionsRequest, VerifyAnswersRequest, VerifyAnswersResponse,
};
use kernel::id::UserId;
use platform::rate_limit::RateLimitStore;

/// Authenticated caller, injected by the host application's auth
/// middleware as a request extension
#[derive(Debug, Clone)]
pub struct RequesterId(pub UserId);

/// Shared state for recovery handlers
#[derive(Clone)]
pub struct RecoveryAppState<R, L>
where
    R: UserDirectory
        + CredentialWriter
        + QuestionSetRepository
        + TokenRepository
        + Clone
        + Send
        + Sync
        + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub limiter: Arc<L>,
    pub config: Arc<RecoveryConfig>,
}

// ============================================================================
// Get Security Questions
// ============================================================================

/// POST /api/recovery/questions
pub async fn get_questions<R, L>(
    State(state): State<RecoveryAppState<R, L>>,
    Json(req): Json<QuestionsRequest>,
) -> RecoveryResult<Json<QuestionsResponse>>
where
    R: UserDirectory
        + CredentialWriter
        + QuestionSetRepository
        + TokenRepository
        + Clone
        + Send
        + Sync
        + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let use_case = GetSecurityQuestionsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );

    let questions = use_case.execute(&req.email).await?;

    Ok(Json(QuestionsResponse { questions }))
}

// ============================================================================
// Verify Security Answers
// ============================================================================

/// POST /api/recovery/verify
pub async fn verify_answers<R, L>(
    State(state): State<RecoveryAppState<R, L>>,
    Json(req): Json<VerifyAnswersRequest>,
) -> RecoveryResult<Json<VerifyAnswersResponse>>
where
    R: UserDirectory
        + CredentialWriter
        + QuestionSetRepository
        + TokenRepository
        + Clone
        + Send
        + Sync
        + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let use_case = VerifySecurityAnswersUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );

    let input = VerifySecurityAnswersInput {
        email: req.email,
        answers: req
            .answers
            .into_iter()
            .map(|a| SubmittedAnswer {
                question: a.question,
                answer: a.answer,
            })
            .collect(),
    };

    let output = use_case.execute(input).await?;

    Ok(Json(VerifyAnswersResponse {
        verified: true,
        token: output.token,
        user_id: output.user_id.into_string(),
        expires_at_ms: output.expires_at_ms,
    }))
}

// ============================================================================
// Reset Password
// ============================================================================

/// POST /api/recovery/reset
pub async fn reset_password<R, L>(
    State(state): State<RecoveryAppState<R, L>>,
    Json(req): Json<ResetPasswordRequest>,
) -> RecoveryResult<Json<ResetPasswordResponse>>
where
    R: UserDirectory
        + CredentialWriter
        + QuestionSetRepository
        + TokenRepository
        + Clone
        + Send
        + Sync
        + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );

    let input = ResetPasswordInput {
        email: req.email,
        new_password: req.new_password,
        token: req.token,
    };

    use_case.execute(input).await?;

    Ok(Json(ResetPasswordResponse {
        success: true,
        message: "Password has been reset. You can now sign in.".to_string(),
    }))
}

// ============================================================================
// Save Security Questions (authenticated owner)
// ============================================================================

/// PUT /api/recovery/questions
pub async fn save_questions<R, L>(
    State(state): State<RecoveryAppState<R, L>>,
    axum::Extension(requester): axum::Extension<RequesterId>,
    Json(req): Json<SaveQuestionsRequest>,
) -> RecoveryResult<StatusCode>
where
    R: UserDirectory
        + CredentialWriter
        + QuestionSetRepository
        + TokenRepository
        + Clone
        + Send
        + Sync
        + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let use_case = SaveSecurityQuestionsUseCase::new(state.repo.clone());

    let input = SaveSecurityQuestionsInput {
        user_id: UserId::from_string(req.user_id),
        requester_id: requester.0,
        questions: req
            .questions
            .into_iter()
            .map(|a| QuestionAnswerPair {
                question: a.question,
                answer: a.answer,
            })
            .collect(),
    };

    use_case.execute(input).await?;

    Ok(StatusCode::NO_CONTENT)
}
