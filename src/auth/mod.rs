// Authentication module
// Registration, login, session tokens, and role-based route guards

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

// Re-export commonly used types
pub use error::AuthError;
pub use middleware::{require_admin, require_moderator, AuthenticatedUser, RequireRole};
pub use models::{AuthResponse, LoginRequest, RegisterRequest, Role, User, UserResponse};
pub use password::PasswordService;
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::TokenService;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register_handler))
        .route("/login", post(handlers::login_handler))
        .route("/profile", get(handlers::profile_handler))
        .route("/health", get(handlers::health_handler))
}
