// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Journal service: encryption on write, per-entry decryption on read.
//!
//! A listing never fails because one entry is unreadable. Each entry carries
//! its own [`EntryContent`] outcome and failed entries are shown with
//! [`DECRYPTION_FAILED_PLACEHOLDER`].

use chrono::Utc;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::crypto::{CipherError, JournalCipher};
use crate::models::{CreateJournalEntryRequest, JournalEntry};
use crate::storage::{
    FileStorage, JournalRepository, OwnershipCheck, StorageError, StoredJournalEntry,
};

/// Text shown in place of an entry that failed to decrypt.
pub const DECRYPTION_FAILED_PLACEHOLDER: &str = "[ENCRYPTED DATA - DECRYPTION FAILED]";

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("failed to securely store journal entry: {0}")]
    Encryption(#[source] CipherError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Decryption outcome of one stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Decrypted(String),
    Failed,
}

impl EntryContent {
    /// Text to show the author.
    pub fn into_display(self) -> String {
        match self {
            EntryContent::Decrypted(text) => text,
            EntryContent::Failed => DECRYPTION_FAILED_PLACEHOLDER.to_string(),
        }
    }
}

/// A stored entry paired with its decryption outcome.
#[derive(Debug, Clone)]
pub struct DecryptedEntry {
    pub stored: StoredJournalEntry,
    pub content: EntryContent,
}

impl From<DecryptedEntry> for JournalEntry {
    fn from(entry: DecryptedEntry) -> Self {
        let stored = entry.stored;
        Self {
            id: stored.id,
            user_id: stored.user_id,
            content: entry.content.into_display(),
            mood: stored.mood,
            entry_date: stored.entry_date,
            is_private: stored.is_private,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

pub struct JournalService<'a> {
    repo: JournalRepository<'a>,
    cipher: &'a JournalCipher,
}

impl<'a> JournalService<'a> {
    pub fn new(storage: &'a FileStorage, cipher: &'a JournalCipher) -> Self {
        Self {
            repo: JournalRepository::new(storage),
            cipher,
        }
    }

    /// Encrypt and persist a new entry, returning it with its plaintext.
    ///
    /// Nothing is written if encryption fails.
    pub fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateJournalEntryRequest,
    ) -> Result<JournalEntry, JournalError> {
        let envelope = self.cipher.encrypt(&request.content).map_err(|e| {
            tracing::error!(user_id = %user.user_id, error = %e, "Failed to encrypt journal entry");
            JournalError::Encryption(e)
        })?;

        let now = Utc::now();
        let stored = StoredJournalEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user.user_id.clone(),
            content: envelope,
            mood: request.mood,
            entry_date: request.entry_date,
            is_private: true,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&stored)?;

        tracing::info!(entry_id = %stored.id, user_id = %user.user_id, "Created journal entry");

        Ok(DecryptedEntry {
            stored,
            content: EntryContent::Decrypted(request.content),
        }
        .into())
    }

    /// All of the user's entries, newest first, each decrypted independently.
    pub fn list(&self, user: &AuthenticatedUser) -> Result<Vec<DecryptedEntry>, JournalError> {
        let stored = self.repo.list_by_owner(&user.user_id)?;
        Ok(stored.into_iter().map(|entry| self.decrypt_entry(entry)).collect())
    }

    /// One entry owned by the user. Foreign entries read as not found.
    pub fn get(
        &self,
        user: &AuthenticatedUser,
        entry_id: &str,
    ) -> Result<DecryptedEntry, JournalError> {
        let stored = self.repo.get(entry_id).verify_owner(user)?;
        Ok(self.decrypt_entry(stored))
    }

    fn decrypt_entry(&self, stored: StoredJournalEntry) -> DecryptedEntry {
        let content = match self.cipher.decrypt(&stored.content) {
            Ok(text) => EntryContent::Decrypted(text),
            Err(e) => {
                tracing::error!(entry_id = %stored.id, error = %e, "Failed to decrypt journal entry");
                EntryContent::Failed
            }
        };
        DecryptedEntry { stored, content }
    }
}
