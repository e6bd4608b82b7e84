// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Journal Encryption at Rest
//!
//! Journal content is encrypted with AES-256-GCM before it reaches storage.
//!
//! ## Key Handling
//!
//! 1. The operator supplies `JOURNAL_ENCRYPTION_KEY` at startup
//! 2. [`DerivedKey::derive`] stretches it with scrypt (fixed salt, 32 bytes)
//! 3. [`JournalCipher`] is built from the key once and shared read-only
//!
//! The derived key bytes are zeroized once the cipher is built. The cipher
//! keeps the expanded AES round keys for the process lifetime and wipes them
//! on drop. Neither is ever logged or persisted.
//!
//! ## Stored Format
//!
//! Each entry is an [`Envelope`] serialized as JSON:
//!
//! ```text
//! {"iv":"<24 hex>","authTag":"<32 hex>","data":"<hex ciphertext>"}
//! ```
//!
//! The constant AAD `journal-entry` is bound into every tag.

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod key;

pub use cipher::JournalCipher;
pub use envelope::Envelope;
pub use error::{CipherError, DecryptFailure};
pub use key::DerivedKey;
