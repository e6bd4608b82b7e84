// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the storage layout.

use std::path::{Path, PathBuf};

/// Storage path utilities.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all persisted data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== Journal Paths ==========

    /// Directory containing all journal entries.
    pub fn journal_dir(&self) -> PathBuf {
        self.root.join("journal")
    }

    /// Path to a specific journal entry file.
    ///
    /// Callers must pass a validated entry ID; it becomes a file name.
    pub fn journal_entry(&self, entry_id: &str) -> PathBuf {
        self.journal_dir().join(format!("{entry_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_paths_nest_under_root() {
        let paths = StoragePaths::new("/srv/journal-data");
        assert_eq!(paths.journal_dir(), PathBuf::from("/srv/journal-data/journal"));
        assert_eq!(
            paths.journal_entry("abc"),
            PathBuf::from("/srv/journal-data/journal/abc.json")
        );
    }
}
