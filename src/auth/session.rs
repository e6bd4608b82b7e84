// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token verification and the middleware that resolves sessions.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};

use super::{AuthError, AuthenticatedUser, SessionClaims};
use crate::csrf::cookie::read_cookie;
use crate::state::AppState;

/// Cookie the login flow stores the session token in.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Verifies HS256 session tokens.
pub struct SessionVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    pub fn new(secret: &SecretString) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Verify signature and expiry, returning the session's user.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<SessionClaims>(token, &self.key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            },
        )?;

        Ok(AuthenticatedUser::from_claims(token_data.claims))
    }
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionVerifier { .. }")
    }
}

/// Locate the session token: `session` cookie first, then a Bearer header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = read_cookie(headers, SESSION_COOKIE_NAME) {
        return Some(token);
    }

    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
}

/// Middleware resolving the session into an [`AuthenticatedUser`] extension.
///
/// Never rejects; see the module docs.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(request.headers()) {
        match state.sessions.verify(&token) {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                tracing::debug!(error_code = e.error_code(), "Ignoring unverified session token");
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "session-secret-for-tests";

    fn token(secret: &str, sub: &str, exp: i64) -> String {
        let claims = SessionClaims {
            sub: sub.to_string(),
            exp,
            iat: 0,
            sid: Some("sess_1".to_string()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    fn verifier() -> SessionVerifier {
        SessionVerifier::new(&SecretString::from(SECRET))
    }

    #[test]
    fn valid_token_resolves_user() {
        let user = verifier().verify(&token(SECRET, "user_1", far_future())).unwrap();
        assert_eq!(user.user_id, "user_1");
        assert_eq!(user.session_id.as_deref(), Some("sess_1"));
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let result = verifier().verify(&token("other-secret", "user_1", far_future()));
        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[test]
    fn expired_token_rejected() {
        let expired = chrono::Utc::now().timestamp() - 3600;
        let result = verifier().verify(&token(SECRET, "user_1", expired));
        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(verifier().verify("not-a-jwt"), Err(AuthError::MalformedToken));
    }

    #[test]
    fn token_read_from_cookie_or_bearer() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));

        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("session=from.cookie.jwt"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("from.cookie.jwt"));
    }

    #[test]
    fn non_bearer_authorization_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(session_token(&headers), None);
    }
}
