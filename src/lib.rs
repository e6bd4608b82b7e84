// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recovery Journal - Private Journal Service
//!
//! This crate provides a session-authenticated journal API. Entry text is
//! encrypted at rest with AES-256-GCM and state-changing requests are guarded
//! by a double-submit CSRF token.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session verification
//! - `crypto` - Journal content cipher
//! - `csrf` - Request authenticity guard
//! - `journal` - Journal service (encrypt on write, decrypt on read)
//! - `storage` - File-backed journal storage

pub mod api;
pub mod auth;
pub mod config;
pub mod crypto;
pub mod csrf;
pub mod error;
pub mod journal;
pub mod models;
pub mod state;
pub mod storage;
