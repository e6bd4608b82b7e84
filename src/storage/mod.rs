// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Storage Module
//!
//! Persistent storage for journal entries as JSON files under `DATA_DIR`.
//!
//! ## Storage Layout
//!
//! ```text
//! {DATA_DIR}/
//!   journal/
//!     {entry_id}.json   # owner, mood, dates, encrypted content envelope
//! ```
//!
//! ## Important Notes
//!
//! - Journal text arrives here already encrypted (see [`crate::crypto`]);
//!   storage never sees plaintext or keys
//! - Writes are atomic (temp file + rename) and entries are never rewritten
//! - Reads are filtered by owner through [`ownership`]

pub mod file_store;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use file_store::{FileStorage, StorageError, StorageResult};
pub use ownership::{OwnedResource, OwnershipCheck, OwnershipEnforcer};
pub use paths::StoragePaths;
pub use repository::{JournalRepository, StoredJournalEntry};
