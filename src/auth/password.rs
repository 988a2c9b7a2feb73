// Password hashing and verification service
// Argon2id with a random per-password salt; work runs on the blocking pool

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::auth::error::AuthError;

/// Password service for hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl PasswordService {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password, returning the PHC string (salt and parameters embedded)
    pub async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let hasher = self.hasher();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            hasher
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AuthError::PasswordHashError(e.to_string()))
        })
        .await
        .map_err(|e| AuthError::PasswordHashError(e.to_string()))?
    }

    /// Verify a password against a stored hash
    /// Parameters are read from the hash itself
    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let hasher = self.hasher();
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash)
                .map_err(|e| AuthError::PasswordHashError(e.to_string()))?;
            Ok(hasher.verify_password(password.as_bytes(), &parsed_hash).is_ok())
        })
        .await
        .map_err(|e| AuthError::PasswordHashError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service() -> PasswordService {
        PasswordService::new(Params::new(1024, 1, 1, None).unwrap())
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let service = fast_service();
        let hash = service.hash_password("kheti@123").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "kheti@123");
        assert!(service.verify_password("kheti@123", &hash).await.unwrap());
        assert!(!service.verify_password("kheti@124", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_different_salts() {
        let service = fast_service();
        let hash1 = service.hash_password("same-password").await.unwrap();
        let hash2 = service.hash_password("same-password").await.unwrap();
        assert_ne!(hash1, hash2);
    }

    #[tokio::test]
    async fn test_invalid_hash_format() {
        let result = fast_service().verify_password("password", "not-a-valid-hash").await;
        assert!(matches!(result, Err(AuthError::PasswordHashError(_))));
    }
}
