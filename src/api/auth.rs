// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session endpoints.

use axum::Json;

use crate::{
    auth::{Auth, AuthenticatedUser},
    models::MessageResponse,
};

/// Get the current authenticated user's identity.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = "Auth",
    security(("session" = [])),
    responses(
        (status = 200, description = "User information", body = AuthenticatedUser),
        (status = 401, description = "Unauthorized - invalid or missing session"),
    )
)]
pub async fn get_current_user(Auth(user): Auth) -> Json<AuthenticatedUser> {
    Json(user)
}

/// Make sure the caller holds a CSRF cookie.
///
/// The CSRF middleware sets the cookie on any authenticated request that
/// lacks one; the frontend calls this right after login to trigger that.
#[utoipa::path(
    get,
    path = "/api/auth/csrf",
    tag = "Auth",
    security(("session" = [])),
    responses(
        (status = 200, description = "CSRF cookie present or issued", body = MessageResponse),
        (status = 401, description = "Unauthorized - invalid or missing session"),
    )
)]
pub async fn csrf_token(Auth(_user): Auth) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "CSRF token set".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "user_123".to_string(),
            session_id: Some("sess_abc".to_string()),
            expires_at: 0,
        }
    }

    #[tokio::test]
    async fn current_user_echoes_session_identity() {
        let Json(response) = get_current_user(Auth(user())).await;
        assert_eq!(response, user());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user_id"], "user_123");
        assert_eq!(json["session_id"], "sess_abc");
        assert!(json.get("expires_at").is_none());
    }

    #[tokio::test]
    async fn csrf_endpoint_confirms() {
        let Json(response) = csrf_token(Auth(user())).await;
        assert_eq!(response.message, "CSRF token set");
    }
}
