// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Cipher errors.
//!
//! Messages describe what went wrong structurally. They never carry key
//! material, plaintext or ciphertext bytes, so they are safe to log.

/// Error raised by key derivation, encryption or decryption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The KDF rejected its parameters. Startup only.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
    /// The AEAD primitive refused to encrypt.
    #[error("unable to encrypt journal entry")]
    EncryptionFailure,
    /// The envelope could not be opened.
    #[error("unable to decrypt journal entry: {0}")]
    DecryptionFailure(DecryptFailure),
}

/// Why an envelope failed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecryptFailure {
    #[error("envelope is not valid JSON with iv, authTag and data")]
    MalformedEnvelope,
    #[error("envelope field is not valid hex")]
    InvalidHex,
    #[error("iv must be 12 bytes, got {0}")]
    InvalidIvLength(usize),
    #[error("auth tag must be 16 bytes, got {0}")]
    InvalidTagLength(usize),
    /// Tampered data, wrong key or corruption. GCM cannot tell these apart.
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("plaintext is not valid UTF-8")]
    InvalidUtf8,
}

impl From<DecryptFailure> for CipherError {
    fn from(failure: DecryptFailure) -> Self {
        CipherError::DecryptionFailure(failure)
    }
}
