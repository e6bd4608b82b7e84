// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and verification decisions.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rand::{rngs::OsRng, RngCore};
use serde::Serialize;

const TOKEN_BYTES: usize = 32;

/// Anti-forgery token: 32 random bytes, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Generate a fresh token from the OS random source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decide whether this request needs a new token.
///
/// Returns `None` for unauthenticated sessions and when a cookie is already
/// present; the caller writes a returned token into the response cookie.
pub fn issue(authenticated: bool, existing_cookie: Option<&str>) -> Option<CsrfToken> {
    if !authenticated || existing_cookie.is_some_and(|v| !v.is_empty()) {
        return None;
    }
    Some(CsrfToken::generate())
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfDecision {
    Allow,
    Reject(CsrfRejection),
}

/// Why a state-changing request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfRejection {
    MissingCookie,
    MissingHeader,
    Mismatch,
}

/// Read-only methods never carry the token requirement.
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Double-submit check.
///
/// Unauthenticated requests pass: the auth gate rejects them downstream.
pub fn verify(
    method: &Method,
    authenticated: bool,
    cookie: Option<&str>,
    header: Option<&str>,
) -> CsrfDecision {
    if is_safe_method(method) || !authenticated {
        return CsrfDecision::Allow;
    }

    let cookie = cookie.filter(|v| !v.is_empty());
    let header = header.filter(|v| !v.is_empty());

    match (cookie, header) {
        (None, _) => CsrfDecision::Reject(CsrfRejection::MissingCookie),
        (Some(_), None) => CsrfDecision::Reject(CsrfRejection::MissingHeader),
        (Some(c), Some(h)) if c.as_bytes() == h.as_bytes() => CsrfDecision::Allow,
        (Some(_), Some(_)) => CsrfDecision::Reject(CsrfRejection::Mismatch),
    }
}

#[derive(Serialize)]
struct CsrfErrorBody {
    error: &'static str,
    error_code: &'static str,
}

impl CsrfRejection {
    /// Stable machine-readable code, identical for every reason.
    pub fn error_code(&self) -> &'static str {
        "invalid_csrf_token"
    }

    /// Reason for logs only; clients see the generic code.
    pub fn reason(&self) -> &'static str {
        match self {
            CsrfRejection::MissingCookie => "missing_cookie",
            CsrfRejection::MissingHeader => "missing_header",
            CsrfRejection::Mismatch => "mismatch",
        }
    }
}

impl IntoResponse for CsrfRejection {
    fn into_response(self) -> Response {
        let body = Json(CsrfErrorBody {
            error: "Invalid CSRF token",
            error_code: self.error_code(),
        });
        (StatusCode::FORBIDDEN, body).into_response()
    }
}
