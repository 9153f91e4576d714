//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (OS RNG, SHA-256, Base64)
//! - Security-answer hashing (Argon2id, normalized comparison)
//! - Password policy validation and hashing
//! - Rate limiting infrastructure

pub mod answer;
pub mod crypto;
pub mod password;
pub mod rate_limit;
