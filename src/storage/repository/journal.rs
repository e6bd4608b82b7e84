// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Journal entry repository.
//!
//! Each entry is stored as a separate JSON file under `journal/`. The
//! `content` field holds the encrypted envelope string and is never
//! interpreted here. Entries are create-only: there is no update path, so a
//! stored envelope is never rewritten.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::{FileStorage, OwnedResource, StorageError, StorageResult};
use crate::models::Mood;

/// Journal entry as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredJournalEntry {
    /// Unique entry identifier (UUID)
    pub id: String,
    /// Author's user ID
    pub user_id: String,
    /// Encrypted envelope (JSON string)
    pub content: String,
    pub mood: Mood,
    pub entry_date: NaiveDate,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for StoredJournalEntry {
    fn owner_user_id(&self) -> &str {
        &self.user_id
    }

    fn resource_id(&self) -> &str {
        &self.id
    }
}

/// Repository for journal entries.
pub struct JournalRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> JournalRepository<'a> {
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    /// Entry IDs become file names; anything that isn't a UUID is refused.
    fn checked_id(entry_id: &str) -> StorageResult<&str> {
        Uuid::parse_str(entry_id)
            .map(|_| entry_id)
            .map_err(|_| StorageError::NotFound(format!("Journal entry {entry_id}")))
    }

    /// Check if an entry exists.
    pub fn exists(&self, entry_id: &str) -> bool {
        Self::checked_id(entry_id)
            .map(|id| self.storage.exists(self.storage.paths().journal_entry(id)))
            .unwrap_or(false)
    }

    /// Get an entry by ID, regardless of owner.
    pub fn get(&self, entry_id: &str) -> StorageResult<StoredJournalEntry> {
        let id = Self::checked_id(entry_id)?;
        let path = self.storage.paths().journal_entry(id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Journal entry {entry_id}")));
        }
        self.storage.read_json(path)
    }

    /// Persist a new entry. Fails if the ID is already taken.
    pub fn create(&self, entry: &StoredJournalEntry) -> StorageResult<()> {
        let id = Self::checked_id(&entry.id)?;

        if self.exists(id) {
            return Err(StorageError::AlreadyExists(format!("Journal entry {id}")));
        }

        self.storage
            .write_json(self.storage.paths().journal_entry(id), entry)
    }

    /// All entries written by a user, newest first.
    pub fn list_by_owner(&self, user_id: &str) -> StorageResult<Vec<StoredJournalEntry>> {
        let entry_ids = self
            .storage
            .list_files(self.storage.paths().journal_dir(), "json")?;

        let mut entries = Vec::new();
        for id in entry_ids {
            match self.get(&id) {
                Ok(entry) if entry.user_id == user_id => entries.push(entry),
                Ok(_) => {}
                Err(e) => tracing::warn!(entry_id = %id, error = %e, "Skipping unreadable journal entry"),
            }
        }

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(temp_dir.path()));
        storage.initialize().expect("Failed to initialize");
        (storage, temp_dir)
    }

    fn test_entry(user_id: &str, created_at: DateTime<Utc>) -> StoredJournalEntry {
        StoredJournalEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: r#"{"iv":"00","authTag":"00","data":"00"}"#.to_string(),
            mood: Mood::Neutral,
            entry_date: created_at.date_naive(),
            is_private: true,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn create_and_get_entry() {
        let (storage, _dir) = test_storage();
        let repo = JournalRepository::new(&storage);

        let entry = test_entry("user-1", Utc::now());
        repo.create(&entry).unwrap();

        let loaded = repo.get(&entry.id).unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let (storage, _dir) = test_storage();
        let repo = JournalRepository::new(&storage);

        let entry = test_entry("user-1", Utc::now());
        repo.create(&entry).unwrap();

        let mut replacement = entry.clone();
        replacement.content = "rewritten".to_string();
        assert!(matches!(
            repo.create(&replacement),
            Err(StorageError::AlreadyExists(_))
        ));
        assert_eq!(repo.get(&entry.id).unwrap().content, entry.content);
    }

    #[test]
    fn non_uuid_ids_are_refused() {
        let (storage, _dir) = test_storage();
        let repo = JournalRepository::new(&storage);

        assert!(matches!(
            repo.get("../../etc/passwd"),
            Err(StorageError::NotFound(_))
        ));
        assert!(!repo.exists("../secrets"));

        let mut entry = test_entry("user-1", Utc::now());
        entry.id = "../escape".to_string();
        assert!(repo.create(&entry).is_err());
    }

    #[test]
    fn list_by_owner_filters_and_sorts_newest_first() {
        let (storage, _dir) = test_storage();
        let repo = JournalRepository::new(&storage);

        let now = Utc::now();
        let oldest = test_entry("user-1", now - Duration::days(2));
        let newest = test_entry("user-1", now);
        let middle = test_entry("user-1", now - Duration::days(1));
        let foreign = test_entry("user-2", now);
        for entry in [&oldest, &newest, &middle, &foreign] {
            repo.create(entry).unwrap();
        }

        let listed = repo.list_by_owner("user-1").unwrap();
        let ids: Vec<&str> = listed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![newest.id.as_str(), middle.id.as_str(), oldest.id.as_str()]);

        assert_eq!(repo.list_by_owner("user-2").unwrap(), vec![foreign]);
        assert!(repo.list_by_owner("user-3").unwrap().is_empty());
    }
}
