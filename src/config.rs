// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`AppConfig`] loaded from them once at startup. Anything missing or invalid
//! is a [`ConfigError`] and the process refuses to serve traffic.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JOURNAL_ENCRYPTION_KEY` | Secret the journal encryption key is derived from | Required |
//! | `SESSION_SECRET` | HMAC secret for verifying session tokens | Required |
//! | `DATA_DIR` | Root directory for journal storage | `./data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `APP_ENV` | `production` turns on secure cookies | `development` |
//! | `CSRF_COOKIE_SECURE` | Overrides the `Secure` flag on the CSRF cookie | Derived from `APP_ENV` |
//! | `TLS_CERT_PATH` | PEM certificate chain (HTTPS when set with key) | Unset |
//! | `TLS_KEY_PATH` | PEM private key | Unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::path::PathBuf;

use secrecy::SecretString;

/// Environment variable holding the journal encryption secret.
///
/// The value is never used as a key directly; it is stretched with scrypt
/// into the 32-byte AES key at startup.
pub const ENCRYPTION_SECRET_ENV: &str = "JOURNAL_ENCRYPTION_KEY";

/// Environment variable holding the session token verification secret.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Environment variable name for the journal data directory path.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const APP_ENV_ENV: &str = "APP_ENV";
pub const CSRF_COOKIE_SECURE_ENV: &str = "CSRF_COOKIE_SECURE";
pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Configuration error. Always fatal: raised before the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
    #[error("TLS_CERT_PATH and TLS_KEY_PATH must be set together")]
    IncompleteTls,
}

/// Deployment environment, as named by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<String>) -> Self {
        match value.as_deref() {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Log output format, as named by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok())
    }

    fn parse(value: Option<String>) -> Self {
        match value.as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// PEM file locations for serving HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Settings for the CSRF cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsrfCookieConfig {
    /// Emit the `Secure` attribute. Browsers drop secure cookies on plain
    /// HTTP, so development setups without TLS need this off.
    pub secure: bool,
}

/// Startup configuration. Secrets are wrapped so `Debug` never prints them.
#[derive(Debug)]
pub struct AppConfig {
    pub encryption_secret: SecretString,
    pub session_secret: SecretString,
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    pub csrf_cookie: CsrfCookieConfig,
    pub tls: Option<TlsPaths>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let encryption_secret = get(ENCRYPTION_SECRET_ENV)
            .map(SecretString::from)
            .ok_or(ConfigError::MissingVar(ENCRYPTION_SECRET_ENV))?;
        let session_secret = get(SESSION_SECRET_ENV)
            .map(SecretString::from)
            .ok_or(ConfigError::MissingVar(SESSION_SECRET_ENV))?;

        let data_dir = get(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                var: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr =
            format!("{host}:{port}")
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    var: HOST_ENV,
                    reason: e.to_string(),
                })?;

        let environment = Environment::parse(get(APP_ENV_ENV));
        let secure = match get(CSRF_COOKIE_SECURE_ENV) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: CSRF_COOKIE_SECURE_ENV,
                reason: format!("expected true or false, got {raw:?}"),
            })?,
            None => environment == Environment::Production,
        };

        let tls = match (get(TLS_CERT_PATH_ENV), get(TLS_KEY_PATH_ENV)) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteTls),
        };

        Ok(Self {
            encryption_secret,
            session_secret,
            data_dir,
            bind_addr,
            environment,
            csrf_cookie: CsrfCookieConfig { secure },
            tls,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
