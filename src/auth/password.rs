use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes with a fresh random salt per call, so equal passwords never
/// produce equal hashes.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?;
    Ok(hash.to_string())
}

/// Ok(false) means a valid hash that does not match; a hash that cannot be
/// parsed at all is an error.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_the_original_password() {
        let hash = hash_password("kale-smoothie-4am").unwrap();
        assert!(verify_password("kale-smoothie-4am", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_a_different_password() {
        let hash = hash_password("kale-smoothie-4am").unwrap();
        assert!(!verify_password("kale-smoothie-5am", &hash).unwrap());
    }

    #[test]
    fn salts_are_fresh_per_hash() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-input", &first).unwrap());
        assert!(verify_password("same-input", &second).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("anything", "$argon2id$garbage").is_err());
    }
}
