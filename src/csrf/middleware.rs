// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum adapter for the CSRF guard.

use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::cookie::{csrf_set_cookie, read_cookie};
use super::{issue, verify, CsrfDecision, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
use crate::auth::AuthenticatedUser;
use crate::state::AppState;

/// Issue a token to sessions lacking one, then enforce the double-submit
/// check before the handler runs.
///
/// Must sit inside [`crate::auth::resolve_session`] so the authenticated
/// user is already in the request extensions.
pub async fn enforce_csrf(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let user_id = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.user_id.clone());
    let authenticated = user_id.is_some();

    let cookie = read_cookie(request.headers(), CSRF_COOKIE_NAME);
    let header = request
        .headers()
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let issued = issue(authenticated, cookie.as_deref());

    let mut response = match verify(
        request.method(),
        authenticated,
        cookie.as_deref(),
        header.as_deref(),
    ) {
        CsrfDecision::Allow => next.run(request).await,
        CsrfDecision::Reject(rejection) => {
            tracing::warn!(
                user_id = user_id.as_deref().unwrap_or_default(),
                method = %request.method(),
                path = %request.uri().path(),
                reason = rejection.reason(),
                "Rejected request with invalid CSRF token"
            );
            rejection.into_response()
        }
    };

    if let Some(token) = issued {
        match csrf_set_cookie(&token, &state.csrf_cookie) {
            Ok(cookie) => {
                tracing::debug!(
                    user_id = user_id.as_deref().unwrap_or_default(),
                    "Issued CSRF token"
                );
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render CSRF cookie");
            }
        }
    }

    response
}
