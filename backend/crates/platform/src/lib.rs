//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
