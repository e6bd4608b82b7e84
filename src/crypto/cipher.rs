// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AES-256-GCM encryption of journal content.

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::envelope::TAG_LEN;
use super::{CipherError, DecryptFailure, DerivedKey, Envelope};

/// Additional authenticated data bound into every journal tag.
pub const JOURNAL_AAD: &[u8] = b"journal-entry";

/// Encrypts and decrypts journal content with the process-wide derived key.
///
/// Holds only the expanded AES key schedule. Immutable and `Sync`; share it
/// through an `Arc`.
pub struct JournalCipher {
    aead: Aes256Gcm,
}

impl JournalCipher {
    pub fn new(key: &DerivedKey) -> Self {
        Self {
            aead: Aes256Gcm::new(key.as_bytes().into()),
        }
    }

    /// Encrypt `plaintext` into an envelope under a fresh random IV.
    pub fn seal(&self, plaintext: &str) -> Result<Envelope, CipherError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let mut ciphertext = self
            .aead
            .encrypt(
                &nonce,
                Payload {
                    msg: plaintext.as_bytes(),
                    aad: JOURNAL_AAD,
                },
            )
            .map_err(|_| CipherError::EncryptionFailure)?;

        // aes-gcm appends the tag to the ciphertext.
        let tag = ciphertext.split_off(ciphertext.len() - TAG_LEN);
        Ok(Envelope::from_parts(&nonce, &tag, &ciphertext))
    }

    /// Verify and decrypt an envelope.
    ///
    /// The tag is checked before any plaintext is produced; on failure
    /// nothing of the content is returned.
    pub fn open(&self, envelope: &Envelope) -> Result<String, CipherError> {
        let decoded = envelope.decode()?;

        let mut sealed = decoded.data;
        sealed.extend_from_slice(&decoded.tag);

        let plaintext = self
            .aead
            .decrypt(
                Nonce::from_slice(&decoded.iv),
                Payload {
                    msg: &sealed,
                    aad: JOURNAL_AAD,
                },
            )
            .map_err(|_| DecryptFailure::AuthenticationFailed)?;

        String::from_utf8(plaintext).map_err(|_| DecryptFailure::InvalidUtf8.into())
    }

    /// Encrypt `plaintext` into its stored string form.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.seal(plaintext)?.to_json()
    }

    /// Decrypt a stored envelope string.
    pub fn decrypt(&self, serialized: &str) -> Result<String, CipherError> {
        let envelope = Envelope::parse(serialized)?;
        self.open(&envelope)
    }
}

impl std::fmt::Debug for JournalCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JournalCipher { .. }")
    }
}
