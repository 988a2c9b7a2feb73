// Token verification and role guards for protected routes

use std::sync::Arc;

use axum::{
    async_trait,
    body::Body,
    extract::{FromRef, FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::auth::{error::AuthError, models::Role, token::TokenService};

/// Verified identity for the current request
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Read the bearer token from the headers and verify it
    pub fn from_headers(headers: &HeaderMap, tokens: &TokenService) -> Result<Self, AuthError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = tokens.validate_token(token)?;

        Ok(Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A guard further out may already have verified the token
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        let tokens = Arc::<TokenService>::from_ref(state);
        AuthenticatedUser::from_headers(&parts.headers, &tokens)
    }
}

/// Authorization guard restricting a route to an allow-list of roles
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    allowed: &'static [Role],
}

impl RequireRole {
    pub const fn new(allowed: &'static [Role]) -> Self {
        Self { allowed }
    }

    /// Admins only
    pub const fn admin() -> Self {
        Self::new(&[Role::Admin])
    }

    /// Admins and moderators
    pub const fn moderator() -> Self {
        Self::new(&[Role::Admin, Role::Moderator])
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// Decide access for an (optional) verified identity
    pub fn authorize(&self, user: Option<&AuthenticatedUser>) -> Result<(), AuthError> {
        let user = user.ok_or(AuthError::NotAuthenticated)?;
        if self.allows(user.role) {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions { actual: user.role })
        }
    }

    /// Verify the token, check the role, and attach the identity for the handler
    pub async fn middleware(
        self,
        tokens: &TokenService,
        mut request: Request<Body>,
        next: Next,
    ) -> Result<Response, AuthError> {
        let endpoint = request.uri().path().to_string();

        let user = match request.extensions().get::<AuthenticatedUser>() {
            Some(user) => user.clone(),
            None => AuthenticatedUser::from_headers(request.headers(), tokens).map_err(|e| {
                warn!("Guarded endpoint {} rejected token: {}", endpoint, e);
                e
            })?,
        };

        if let Err(e) = self.authorize(Some(&user)) {
            warn!(
                "Authorization failed: user_id={}, role={}, endpoint={}",
                user.user_id, user.role, endpoint
            );
            return Err(e);
        }

        debug!(
            "Authorization successful: user_id={}, role={}, endpoint={}",
            user.user_id, user.role, endpoint
        );
        request.extensions_mut().insert(user);
        Ok(next.run(request).await)
    }
}

/// Route layer admitting admins only
pub async fn require_admin(
    State(tokens): State<Arc<TokenService>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    RequireRole::admin().middleware(&tokens, request, next).await
}

/// Route layer admitting admins and moderators
pub async fn require_moderator(
    State(tokens): State<Arc<TokenService>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    RequireRole::moderator().middleware(&tokens, request, next).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes")
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn identity(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 7,
            email: "ravi@example.com".into(),
            role,
        }
    }

    #[test]
    fn test_valid_bearer_token() {
        let tokens = test_token_service();
        let token = tokens.generate_token(7, "ravi@example.com", Role::Expert).unwrap();

        let user = AuthenticatedUser::from_headers(&headers_with(&format!("Bearer {}", token)), &tokens)
            .unwrap();
        assert_eq!(user, identity(Role::Expert));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let tokens = test_token_service();

        let missing = AuthenticatedUser::from_headers(&HeaderMap::new(), &tokens);
        assert!(matches!(missing, Err(AuthError::MissingToken)));

        let no_scheme = AuthenticatedUser::from_headers(&headers_with("abc.def.ghi"), &tokens);
        assert!(matches!(no_scheme, Err(AuthError::MissingToken)));

        let empty = AuthenticatedUser::from_headers(&headers_with("Bearer "), &tokens);
        assert!(matches!(empty, Err(AuthError::MissingToken)));

        let garbage = AuthenticatedUser::from_headers(&headers_with("Bearer abc.def.ghi"), &tokens);
        assert!(matches!(garbage, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_guard_without_identity() {
        let result = RequireRole::admin().authorize(None);
        assert!(matches!(result, Err(AuthError::NotAuthenticated)));
    }

    #[test]
    fn test_moderator_guard() {
        let guard = RequireRole::moderator();
        assert!(guard.authorize(Some(&identity(Role::Moderator))).is_ok());
        assert!(guard.authorize(Some(&identity(Role::Admin))).is_ok());
        assert!(guard.authorize(Some(&identity(Role::Expert))).is_err());
    }

    proptest! {
        // Feature: role-guard, Property 1: Admin guard admits exactly admins
        #[test]
        fn prop_admin_guard(role in prop_oneof![
            Just(Role::Farmer),
            Just(Role::Expert),
            Just(Role::Admin),
            Just(Role::Moderator)
        ]) {
            let result = RequireRole::admin().authorize(Some(&identity(role)));
            if role == Role::Admin {
                prop_assert!(result.is_ok());
            } else {
                let is_forbidden = matches!(result, Err(AuthError::InsufficientPermissions { .. }));
                prop_assert!(is_forbidden);
            }
        }
    }
}
