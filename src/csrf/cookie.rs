// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Minimal cookie reading and `Set-Cookie` rendering.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

use super::{CsrfToken, CSRF_COOKIE_NAME, CSRF_TOKEN_MAX_AGE_SECS};
use crate::config::CsrfCookieConfig;

/// Find a cookie by name across all `Cookie` headers.
///
/// Headers that are not visible ASCII are skipped. The first match wins.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
}

/// Render the `Set-Cookie` value for a freshly issued token.
///
/// Deliberately not `HttpOnly`: the frontend reads the cookie to echo it.
pub fn csrf_set_cookie(
    token: &CsrfToken,
    config: &CsrfCookieConfig,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{CSRF_COOKIE_NAME}={}; Path=/; Max-Age={CSRF_TOKEN_MAX_AGE_SECS}; SameSite=Strict",
        token.as_str()
    );
    if config.secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}
