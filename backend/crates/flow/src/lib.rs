//! Recovery Flow Controller
//!
//! Client-side wizard for the account recovery API. Drives the three
//! wire operations in sequence through a [`gateway::RecoveryGateway`]:
//!
//! ```text
//! Email -> SecurityQuestions -> NewPassword -> Success
//! ```
//!
//! Failures surface as an error overlay on the current step; the wizard
//! never advances on a failed call and has no backward transitions. The
//! controller depends only on the network contract, never on server
//! internals.

pub mod gateway;
pub mod http;
pub mod machine;
pub mod wire;

pub use gateway::{GatewayError, RecoveryGateway, VerifiedIdentity};
pub use http::HttpRecoveryGateway;
pub use machine::{RecoveryFlow, Step};
