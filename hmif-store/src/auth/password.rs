//! Argon2 password hashing

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::core::error::{StoreError, StoreResult};

/// Hash a password into an argon2 PHC string
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Internal(format!("Password hashing failed: {e}")))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A malformed stored hash counts as a mismatch rather than an error, so
/// the caller's failure path stays uniform.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
