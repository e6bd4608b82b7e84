// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::SessionVerifier;
use crate::config::CsrfCookieConfig;
use crate::crypto::JournalCipher;
use crate::journal::JournalService;
use crate::storage::FileStorage;

/// Shared handler state. Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<FileStorage>,
    pub cipher: Arc<JournalCipher>,
    pub sessions: Arc<SessionVerifier>,
    pub csrf_cookie: CsrfCookieConfig,
}

impl AppState {
    pub fn new(
        storage: FileStorage,
        cipher: JournalCipher,
        sessions: SessionVerifier,
        csrf_cookie: CsrfCookieConfig,
    ) -> Self {
        Self {
            storage: Arc::new(storage),
            cipher: Arc::new(cipher),
            sessions: Arc::new(sessions),
            csrf_cookie,
        }
    }

    pub fn journal(&self) -> JournalService<'_> {
        JournalService::new(&self.storage, &self.cipher)
    }
}
