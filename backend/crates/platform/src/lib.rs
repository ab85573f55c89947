//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed bearer-token issuance and verification (HS256)
//! - `Authorization: Bearer` header extraction

pub mod bearer;
pub mod password;
pub mod token;
