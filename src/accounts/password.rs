use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a plaintext with a freshly drawn random salt.
///
/// The result is a PHC string carrying salt and parameters, so hashing the
/// same plaintext twice never yields the same value. Hashing is the only
/// credential operation here: nothing in this crate turns a stored hash back
/// into a plaintext, and nothing verifies one (sessions are issued
/// elsewhere).
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?
        .to_string();
    Ok(hash)
}
