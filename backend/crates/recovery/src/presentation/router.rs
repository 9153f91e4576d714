//! Recovery Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::domain::repository::{
    CredentialWriter, QuestionSetRepository, TokenRepository, UserDirectory,
};
use crate::infra::postgres::PgRecoveryStore;
use crate::presentation::handlers::{self, RecoveryAppState};
use platform::rate_limit::RateLimitStore;

/// Create the recovery router with the PostgreSQL store
///
/// The store doubles as the rate-limit backend, so attempt caps hold
/// across every instance sharing the database.
pub fn recovery_router(repo: PgRecoveryStore, config: RecoveryConfig) -> Router {
    let repo = Arc::new(repo);
    let state = RecoveryAppState {
        repo: repo.clone(),
        limiter: repo,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/questions",
            post(handlers::get_questions::<PgRecoveryStore, PgRecoveryStore>)
                .put(handlers::save_questions::<PgRecoveryStore, PgRecoveryStore>),
        )
        .route(
            "/verify",
            post(handlers::verify_answers::<PgRecoveryStore, PgRecoveryStore>),
        )
        .route(
            "/reset",
            post(handlers::reset_password::<PgRecoveryStore, PgRecoveryStore>),
        )
        .with_state(state)
}

/// Create a generic recovery router for any store and limiter
pub fn recovery_router_generic<R, L>(repo: R, limiter: L, config: RecoveryConfig) -> Router
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
    let state = RecoveryAppState {
        repo: Arc::new(repo),
        limiter: Arc::new(limiter),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/questions",
            post(handlers::get_questions::<R, L>).put(handlers::save_questions::<R, L>),
        )
        .route("/verify", post(handlers::verify_answers::<R, L>))
        .route("/reset", post(handlers::reset_password::<R, L>))
        .with_state(state)
}
