// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Key derivation from the operator secret.

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use super::CipherError;

/// Salt for journal key derivation.
///
/// Fixed so that every process start derives the same key from the same
/// secret; existing envelopes depend on it.
pub const KDF_SALT: &[u8] = b"journal-salt-2024";

/// Length of the derived AES-256 key.
pub const KEY_LEN: usize = 32;

/// scrypt cost parameters (N = 2^14, r = 8, p = 1).
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// 32-byte key derived from the operator secret.
///
/// Wiped from memory on drop. `Debug` prints nothing of the key.
pub struct DerivedKey {
    bytes: Zeroizing<[u8; KEY_LEN]>,
}

impl DerivedKey {
    /// Derive the journal key with scrypt.
    ///
    /// CPU- and memory-bound (tens of milliseconds, 16 MiB). Run it once at
    /// startup, off the async executor.
    pub fn derive(secret: &SecretString) -> Result<Self, CipherError> {
        let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
            .map_err(|e| CipherError::KeyDerivation(e.to_string()))?;

        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        scrypt::scrypt(
            secret.expose_secret().as_bytes(),
            KDF_SALT,
            &params,
            bytes.as_mut_slice(),
        )
        .map_err(|e| CipherError::KeyDerivation(e.to_string()))?;

        Ok(Self { bytes })
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}
