//! Account Recovery Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - In-memory and PostgreSQL repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Security answers are stored only as salted Argon2id hashes
//! - Every answer-verification attempt is rate limited per email
//! - Verification tokens are high-entropy, short-lived, and single-use;
//!   consumption is an atomic lookup-and-delete (fail-closed: a token is
//!   spent the moment it is examined)
//! - Unknown emails, missing question sets, and wrong answers are
//!   indistinguishable in responses

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RecoveryConfig;
pub use error::{RecoveryError, RecoveryResult};
pub use infra::memory::MemoryRecoveryStore;
pub use infra::postgres::PgRecoveryStore;
pub use presentation::router::{recovery_router, recovery_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
