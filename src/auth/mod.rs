// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Session verification for the journal API. Login itself happens elsewhere;
//! this service only checks the session token the login flow issued.
//!
//! ## Auth Flow
//!
//! 1. The login service sets a `session` cookie holding an HS256 JWT signed
//!    with `SESSION_SECRET` (API clients may send it as `Authorization: Bearer`)
//! 2. [`resolve_session`] verifies it on every request and, when valid, puts an
//!    [`AuthenticatedUser`] into the request extensions
//! 3. Handlers that need a user take the [`Auth`] extractor, which answers 401
//!    when no user was resolved
//!
//! Requests with a bad or missing token are not rejected by the middleware;
//! they simply stay unauthenticated. The CSRF guard relies on that.
//!
//! ## Security
//!
//! - Signature and expiry are always verified
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod session;

pub use claims::{AuthenticatedUser, SessionClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use session::{resolve_session, SessionVerifier, SESSION_COOKIE_NAME};
