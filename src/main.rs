// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recovery_journal_server::{
    api::router,
    auth::SessionVerifier,
    config::{AppConfig, ConfigError, LogFormat, DEFAULT_LOG_FILTER},
    crypto::{CipherError, DerivedKey, JournalCipher},
    state::AppState,
    storage::{FileStorage, StorageError, StoragePaths},
};

/// Grace period for in-flight requests after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("key derivation failed: {0}")]
    Key(#[from] CipherError),
    #[error("storage initialization failed: {0}")]
    Storage(#[from] StorageError),
    #[error("key derivation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Recovery journal server stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    // scrypt blocks for a while; run it off the async workers.
    let encryption_secret = config.encryption_secret;
    let key = tokio::task::spawn_blocking(move || DerivedKey::derive(&encryption_secret)).await??;
    let cipher = JournalCipher::new(&key);
    drop(key);

    let mut storage = FileStorage::new(StoragePaths::new(&config.data_dir));
    storage.initialize()?;

    let state = AppState::new(
        storage,
        cipher,
        SessionVerifier::new(&config.session_secret),
        config.csrf_cookie,
    );
    let app = router(state);

    let handle: Handle<SocketAddr> = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        environment = ?config.environment,
        secure_cookies = config.csrf_cookie.secure,
        tls = config.tls.is_some(),
        "Recovery journal server listening (docs at /docs)"
    );

    match config.tls {
        Some(tls) => {
            if rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
            {
                tracing::debug!("rustls crypto provider already installed");
            }
            let tls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            axum_server::bind_rustls(config.bind_addr, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            axum_server::bind(config.bind_addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
    }

    tracing::info!("Recovery journal server shut down");
    Ok(())
}

async fn shutdown_signal(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
