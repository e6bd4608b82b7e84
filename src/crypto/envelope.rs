// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Persisted form of an encrypted journal entry.

use serde::{Deserialize, Serialize};

use super::{CipherError, DecryptFailure};

pub const IV_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Hex-encoded IV, GCM tag and ciphertext.
///
/// Field names are part of the stored format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub iv: String,
    #[serde(rename = "authTag")]
    pub auth_tag: String,
    pub data: String,
}

/// Envelope fields decoded back to bytes, with lengths checked.
pub(crate) struct DecodedEnvelope {
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub data: Vec<u8>,
}

impl Envelope {
    pub(crate) fn from_parts(iv: &[u8], tag: &[u8], data: &[u8]) -> Self {
        Self {
            iv: hex::encode(iv),
            auth_tag: hex::encode(tag),
            data: hex::encode(data),
        }
    }

    /// Parse the stored JSON string.
    pub fn parse(serialized: &str) -> Result<Self, DecryptFailure> {
        serde_json::from_str(serialized).map_err(|_| DecryptFailure::MalformedEnvelope)
    }

    /// Serialize to the stored JSON string.
    pub fn to_json(&self) -> Result<String, CipherError> {
        serde_json::to_string(self).map_err(|_| CipherError::EncryptionFailure)
    }

    pub(crate) fn decode(&self) -> Result<DecodedEnvelope, DecryptFailure> {
        let iv = hex::decode(&self.iv).map_err(|_| DecryptFailure::InvalidHex)?;
        let tag = hex::decode(&self.auth_tag).map_err(|_| DecryptFailure::InvalidHex)?;
        let data = hex::decode(&self.data).map_err(|_| DecryptFailure::InvalidHex)?;

        let iv: [u8; IV_LEN] = iv
            .as_slice()
            .try_into()
            .map_err(|_| DecryptFailure::InvalidIvLength(iv.len()))?;
        let tag: [u8; TAG_LEN] = tag
            .as_slice()
            .try_into()
            .map_err(|_| DecryptFailure::InvalidTagLength(tag.len()))?;

        Ok(DecodedEnvelope { iv, tag, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stored_field_names() {
        let envelope = Envelope::from_parts(&[0u8; IV_LEN], &[0xffu8; TAG_LEN], b"hi");
        let json: serde_json::Value =
            serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

        assert_eq!(json["iv"], "000000000000000000000000");
        assert_eq!(json["authTag"], "ffffffffffffffffffffffffffffffff");
        assert_eq!(json["data"], "6869");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn to_json_output_parses_back() {
        let envelope = Envelope::from_parts(&[7u8; IV_LEN], &[9u8; TAG_LEN], b"entry");
        let serialized = envelope.to_json().expect("envelope serializes");
        assert!(!serialized.is_empty());
        assert_eq!(Envelope::parse(&serialized), Ok(envelope));
    }

    #[test]
    fn parse_rejects_non_json() {
        assert_eq!(
            Envelope::parse("not json at all"),
            Err(DecryptFailure::MalformedEnvelope)
        );
    }

    #[test]
    fn parse_rejects_missing_field() {
        let missing_tag = r#"{"iv":"000000000000000000000000","data":"00"}"#;
        assert_eq!(
            Envelope::parse(missing_tag),
            Err(DecryptFailure::MalformedEnvelope)
        );
    }

    #[test]
    fn decode_checks_lengths() {
        let short_iv = Envelope {
            iv: "0011".into(),
            auth_tag: "00".repeat(TAG_LEN),
            data: String::new(),
        };
        assert!(matches!(
            short_iv.decode(),
            Err(DecryptFailure::InvalidIvLength(2))
        ));

        let short_tag = Envelope {
            iv: "00".repeat(IV_LEN),
            auth_tag: "00".repeat(12),
            data: String::new(),
        };
        assert!(matches!(
            short_tag.decode(),
            Err(DecryptFailure::InvalidTagLength(12))
        ));
    }

    #[test]
    fn decode_rejects_bad_hex() {
        let envelope = Envelope {
            iv: "zz".repeat(IV_LEN),
            auth_tag: "00".repeat(TAG_LEN),
            data: String::new(),
        };
        assert!(matches!(envelope.decode(), Err(DecryptFailure::InvalidHex)));
    }
}
