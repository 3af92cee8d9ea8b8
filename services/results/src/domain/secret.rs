//! Secret hashing — Argon2id with a per-secret random salt.
//!
//! Hashes are PHC-format strings (`$argon2id$v=19$...`) stored in the
//! `secret_hash` column. Verification is constant-time inside the argon2
//! crate; a mismatch is `Ok(false)`, a malformed stored hash is an error.

use anyhow::{Context as _, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a secret for storage.
pub fn hash_secret(secret: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash secret: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a secret against a stored PHC hash.
pub fn verify_secret(secret: &str, stored_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("{e}"))
        .context("parse stored secret hash")?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}
