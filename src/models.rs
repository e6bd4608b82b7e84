// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the journal API. Field names are camelCase
//! on the wire to match the web frontend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Journal Models
// =============================================================================

/// How the day went, as picked by the author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Good,
    Neutral,
    Difficult,
}

/// Request to create a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalEntryRequest {
    /// Entry text. Encrypted before it is stored.
    pub content: String,
    pub mood: Mood,
    /// Day the entry is about (`YYYY-MM-DD`).
    pub entry_date: NaiveDate,
}

/// A journal entry as returned to its author.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    /// Decrypted text, or a fixed placeholder if the entry could not be
    /// decrypted.
    pub content: String,
    pub mood: Mood,
    pub entry_date: NaiveDate,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Misc
// =============================================================================

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
