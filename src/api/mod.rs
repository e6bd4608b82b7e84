// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::Request, middleware, routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{resolve_session, AuthenticatedUser},
    csrf::enforce_csrf,
    models::{CreateJournalEntryRequest, JournalEntry, MessageResponse, Mood},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod journal;

/// Build the application router.
///
/// Layers, outermost first: request id, tracing, session resolution, CSRF
/// guard. The API docs sit outside the session and CSRF layers.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/user", get(auth::get_current_user))
        .route("/auth/csrf", get(auth::csrf_token))
        .route(
            "/journal",
            get(journal::list_entries).post(journal::create_entry),
        )
        .route("/journal/{entry_id}", get(journal::get_entry));

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/health/live", get(health::liveness));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(middleware::from_fn_with_state(state.clone(), enforce_csrf))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_session))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

struct SessionSecurity;

impl Modify for SessionSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::auth::SESSION_COOKIE_NAME,
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::readiness,
        health::liveness,
        auth::get_current_user,
        auth::csrf_token,
        journal::list_entries,
        journal::create_entry,
        journal::get_entry
    ),
    components(
        schemas(
            AuthenticatedUser,
            CreateJournalEntryRequest,
            JournalEntry,
            MessageResponse,
            Mood,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    modifiers(&SessionSecurity),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Auth", description = "Session identity and CSRF bootstrap"),
        (name = "Journal", description = "Encrypted recovery journal")
    )
)]
struct ApiDoc;
