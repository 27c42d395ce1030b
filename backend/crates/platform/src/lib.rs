//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Bearer token extraction from the `Authorization` header
//! - Secure random bytes and Base64 helpers for secrets

pub mod bearer;
pub mod crypto;
pub mod password;
