// JWT session token generation and validation service

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::auth::models::Role;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub email: String,
    pub role: Role,
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for JWT operations
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_duration: i64, // in seconds
}

impl TokenService {
    /// Session tokens are valid for one hour
    pub const TOKEN_DURATION_SECS: i64 = 3600;

    /// Create a new TokenService with secret key
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_duration: Self::TOKEN_DURATION_SECS,
        }
    }

    /// Generate a signed session token
    pub fn generate_token(&self, user_id: i32, email: &str, role: Role) -> Result<String, AuthError> {
        self.generate_token_at(user_id, email, role, Utc::now().timestamp())
    }

    /// Generate a token as if issued at `issued_at` (unix seconds)
    pub(crate) fn generate_token_at(
        &self,
        user_id: i32,
        email: &str,
        role: Role,
        issued_at: i64,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role,
            iat: issued_at,
            exp: issued_at + self.token_duration,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Verify signature and expiry
    /// Expiry is reported separately from every other failure
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;

        // jsonwebtoken still accepts the second where now == exp
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::ExpiredToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes")
    }

    // Feature: session-tokens, Property 1: Tokens expire one hour after issue
    #[test]
    fn test_token_expiration_is_one_hour() {
        let service = test_token_service();
        let token = service.generate_token(1, "ravi@example.com", Role::Farmer).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    // Feature: session-tokens, Property 2: Expired tokens are reported as expired
    #[test]
    fn test_expired_token_is_distinguished() {
        let service = test_token_service();
        let issued = Utc::now().timestamp() - 3601;
        let token = service
            .generate_token_at(1, "ravi@example.com", Role::Farmer, issued)
            .unwrap();

        assert!(matches!(service.validate_token(&token), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_token_rejected_at_expiry_second() {
        let service = test_token_service();
        let issued = Utc::now().timestamp() - TokenService::TOKEN_DURATION_SECS;
        let token = service
            .generate_token_at(1, "ravi@example.com", Role::Farmer, issued)
            .unwrap();

        assert!(matches!(service.validate_token(&token), Err(AuthError::ExpiredToken)));
    }

    // Feature: session-tokens, Property 3: Signature verification
    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1");
        let service2 = TokenService::new("secret2");

        let token = service1.generate_token(1, "ravi@example.com", Role::Admin).unwrap();

        assert!(service1.validate_token(&token).is_ok());
        assert!(matches!(service2.validate_token(&token), Err(AuthError::InvalidToken)));
    }

    // Feature: session-tokens, Property 4: Malformed tokens are rejected
    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        for token in ["", "not.a.token", "invalid_token_format", "eyJhbGciOiJIUzI1NiJ9.e30.sig"] {
            assert!(matches!(service.validate_token(token), Err(AuthError::InvalidToken)));
        }
    }

    proptest! {
        // Feature: session-tokens, Property 5: Claims carry the user identity
        #[test]
        fn prop_token_claims_contain_identity(
            user_id in 1i32..1000000,
            email in "[a-z]{3,10}@[a-z]{3,10}\\.(com|org|in)",
            role in prop_oneof![
                Just(Role::Farmer),
                Just(Role::Expert),
                Just(Role::Admin),
                Just(Role::Moderator)
            ]
        ) {
            let service = test_token_service();
            let token = service.generate_token(user_id, &email, role)?;
            let claims = service.validate_token(&token)?;

            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.email, email);
            prop_assert_eq!(claims.role, role);
            prop_assert_eq!(claims.exp - claims.iat, 3600);
        }

        // Feature: session-tokens, Property 6: Altering any byte invalidates the token
        #[test]
        fn prop_tampered_tokens_are_rejected(position in any::<prop::sample::Index>()) {
            let service = test_token_service();
            let token = service.generate_token(42, "ravi@example.com", Role::Farmer)?;

            let mut bytes = token.into_bytes();
            let i = position.index(bytes.len());
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            prop_assert!(matches!(service.validate_token(&tampered), Err(AuthError::InvalidToken)));
        }

        // Feature: session-tokens, Property 7: Random strings are rejected
        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.validate_token(&malformed).is_err());
        }
    }
}
