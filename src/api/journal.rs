// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Journal API endpoints.
//!
//! All operations require authentication and only ever touch the caller's
//! own entries. Creating an entry additionally passes the CSRF guard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateJournalEntryRequest, JournalEntry},
    state::AppState,
};

/// List the caller's journal entries, newest first.
///
/// Entries that cannot be decrypted are still listed, with their content
/// replaced by a fixed placeholder.
#[utoipa::path(
    get,
    path = "/api/journal",
    tag = "Journal",
    security(("session" = [])),
    responses(
        (status = 200, description = "Journal entries", body = [JournalEntry]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn list_entries(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let entries = state.journal().list(&user)?;
    Ok(Json(entries.into_iter().map(JournalEntry::from).collect()))
}

/// Write a new journal entry. The content is encrypted before it is stored.
#[utoipa::path(
    post,
    path = "/api/journal",
    tag = "Journal",
    request_body = CreateJournalEntryRequest,
    security(("session" = [])),
    responses(
        (status = 201, description = "Entry created", body = JournalEntry),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Invalid CSRF token"),
        (status = 500, description = "Failed to securely store journal entry")
    )
)]
pub async fn create_entry(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateJournalEntryRequest>,
) -> Result<(StatusCode, Json<JournalEntry>), ApiError> {
    let entry = state.journal().create(&user, request)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/journal/{entry_id}",
    tag = "Journal",
    params(
        ("entry_id" = String, Path, description = "Journal entry ID")
    ),
    security(("session" = [])),
    responses(
        (status = 200, description = "Journal entry", body = JournalEntry),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_entry(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> Result<Json<JournalEntry>, ApiError> {
    let entry = state.journal().get(&user, &entry_id)?;
    Ok(Json(entry.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, SessionVerifier};
    use crate::config::CsrfCookieConfig;
    use crate::crypto::{DerivedKey, JournalCipher};
    use crate::journal::DECRYPTION_FAILED_PLACEHOLDER;
    use crate::models::Mood;
    use crate::storage::{FileStorage, JournalRepository, StoragePaths, StoredJournalEntry};
    use chrono::{NaiveDate, Utc};
    use secrecy::SecretString;
    use std::sync::LazyLock;
    use tempfile::TempDir;

    static KEY: LazyLock<DerivedKey> = LazyLock::new(|| {
        DerivedKey::derive(&SecretString::from("test-secret-32bytes!!")).unwrap()
    });

    fn test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(temp_dir.path()));
        storage.initialize().expect("Failed to initialize");
        let state = AppState::new(
            storage,
            JournalCipher::new(&KEY),
            SessionVerifier::new(&SecretString::from("session-secret")),
            CsrfCookieConfig { secure: false },
        );
        (state, temp_dir)
    }

    fn user(user_id: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user_id.to_string(),
            session_id: None,
            expires_at: 0,
        }
    }

    fn request(content: &str) -> CreateJournalEntryRequest {
        CreateJournalEntryRequest {
            content: content.to_string(),
            mood: Mood::Neutral,
            entry_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_then_get_entry() {
        let (state, _dir) = test_state();

        let (status, Json(created)) = create_entry(
            Auth(user("user-1")),
            State(state.clone()),
            Json(request("Ninety days.")),
        )
        .await
        .expect("entry creation succeeds");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.content, "Ninety days.");
        assert_eq!(created.user_id, "user-1");

        let Json(fetched) = get_entry(
            Auth(user("user-1")),
            State(state.clone()),
            Path(created.id.clone()),
        )
        .await
        .expect("entry lookup succeeds");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_entry_of_another_user_is_not_found() {
        let (state, _dir) = test_state();

        let (_, Json(created)) = create_entry(
            Auth(user("user-1")),
            State(state.clone()),
            Json(request("private")),
        )
        .await
        .unwrap();

        let err = get_entry(Auth(user("user-2")), State(state), Path(created.id))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_substitutes_placeholder_for_unreadable_entries() {
        let (state, _dir) = test_state();

        let (status, _) = create_entry(
            Auth(user("user-1")),
            State(state.clone()),
            Json(request("readable")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let now = Utc::now();
        JournalRepository::new(&state.storage)
            .create(&StoredJournalEntry {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: "user-1".to_string(),
                content: r#"{"iv":"zz","authTag":"00","data":"00"}"#.to_string(),
                mood: Mood::Good,
                entry_date: now.date_naive(),
                is_private: true,
                created_at: now,
                updated_at: now,
            })
            .unwrap();

        let Json(entries) = list_entries(Auth(user("user-1")), State(state))
            .await
            .expect("listing succeeds");
        assert_eq!(entries.len(), 2);

        let contents: Vec<&str> = entries.iter().map(|e| e.content.as_str()).collect();
        assert!(contents.contains(&"readable"));
        assert!(contents.contains(&DECRYPTION_FAILED_PLACEHOLDER));
    }
}
