// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_name, validate_phone, validate_registrable_role};

/// User role carried in session tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Farmer,
    Expert,
    Admin,
    /// Reviews community price submissions; assigned, never self-registered
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Expert => "expert",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stored user record
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    /// Trimmed and lower-cased
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ravi@example.com")]
    pub email: String,
    #[schema(example = "Ravi")]
    pub first_name: String,
    #[schema(example = "Kumar")]
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    #[schema(example = "ravi@example.com")]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(custom = "validate_name")]
    #[schema(example = "Ravi")]
    pub first_name: String,

    #[validate(custom = "validate_name")]
    #[schema(example = "Kumar")]
    pub last_name: String,

    #[validate(custom = "validate_phone")]
    #[schema(example = "+91 98765 43210")]
    pub phone: Option<String>,

    #[validate(custom = "validate_registrable_role")]
    pub role: Option<Role>,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Authentication response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Canonical form used for storing and comparing emails
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
