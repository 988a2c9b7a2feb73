// Authentication service - business logic layer

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AuthResponse, NewUser, RegisterRequest, UserResponse},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Hashed once, verified against when the email is unknown
const UNKNOWN_ACCOUNT_PASSWORD: &str = "unknown-account-placeholder";

/// Authentication service coordinating all auth operations
pub struct AuthService {
    user_repo: UserRepository,
    password_service: PasswordService,
    token_service: Arc<TokenService>,
    unknown_account_hash: OnceCell<String>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        user_repo: UserRepository,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            token_service,
            unknown_account_hash: OnceCell::new(),
        }
    }

    /// Register a new user and issue a session token
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        if self.user_repo.email_exists(&request.email).await {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = self.password_service.hash_password(&request.password).await?;

        // A concurrent registration can still win the race; the repository rejects it
        let user = self
            .user_repo
            .create_user(NewUser {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                phone: request.phone,
                role: request.role.unwrap_or_default(),
            })
            .await?;

        let token = self
            .token_service
            .generate_token(user.id, &user.email, user.role)?;
        info!("Registered user {} with role {}", user.id, user.role);

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Authenticate by email and password
    /// Unknown email and wrong password fail identically
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let Some(user) = self.user_repo.find_by_email(email).await else {
            // Pay the same Argon2 cost as a real account
            let hash = self
                .unknown_account_hash
                .get_or_try_init(|| self.password_service.hash_password(UNKNOWN_ACCOUNT_PASSWORD))
                .await?;
            self.password_service.verify_password(password, hash).await?;
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .password_service
            .verify_password(password, &user.password_hash)
            .await?
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_service
            .generate_token(user.id, &user.email, user.role)?;
        debug!("User {} logged in", user.id);

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Profile of the verified caller
    pub async fn get_profile(
        &self,
        identity: Option<&AuthenticatedUser>,
    ) -> Result<UserResponse, AuthError> {
        let identity = identity.ok_or(AuthError::NotAuthenticated)?;

        self.user_repo
            .find_by_id(identity.user_id)
            .await
            .map(UserResponse::from)
            .ok_or(AuthError::UserNotFound(identity.user_id))
    }
}
