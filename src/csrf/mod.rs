// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # CSRF Protection
//!
//! Double-submit cookie defense for session-authenticated requests.
//!
//! ## Flow
//!
//! 1. The first request from an authenticated session without a `csrf-token`
//!    cookie gets one (`Set-Cookie`, readable by client script)
//! 2. The frontend echoes the cookie value in the `x-csrf-token` header
//! 3. Non-safe methods from authenticated sessions are rejected with 403
//!    unless cookie and header are both present and equal
//!
//! The decision logic lives in [`guard`] as pure functions; [`middleware`]
//! adapts it to axum requests and responses.

pub mod cookie;
pub mod guard;
pub mod middleware;

pub use guard::{issue, verify, CsrfDecision, CsrfRejection, CsrfToken};
pub use middleware::enforce_csrf;

/// Cookie carrying the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrf-token";

/// Header the client echoes the token back in.
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

/// Token lifetime (24 hours).
pub const CSRF_TOKEN_MAX_AGE_SECS: u64 = 24 * 60 * 60;
