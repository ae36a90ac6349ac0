// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use vegan_recipes_server::{
    api::router,
    auth::{TokenService, DEFAULT_TOKEN_TTL_SECS},
    config::{
        ADMIN_EMAIL_ENV, HOST_ENV, JWT_SECRET_ENV, LOG_FORMAT_ENV, PORT_ENV, TOKEN_TTL_SECS_ENV,
    },
    state::AppState,
    store::InMemoryStore,
};

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
    );
    if env::var(LOG_FORMAT_ENV).as_deref() == Ok("json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let secret = env::var(JWT_SECRET_ENV).unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET is not set, using the development default");
        "dev-secret".to_string()
    });
    let ttl_secs: i64 = env::var(TOKEN_TTL_SECS_ENV)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

    let tokens = TokenService::new(&secret, ttl_secs);
    let mut state = AppState::new(InMemoryStore::new(), tokens);
    if let Ok(admin_email) = env::var(ADMIN_EMAIL_ENV) {
        state = state.with_admin_email(admin_email);
    }

    let app = router(state);

    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Recipe server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    tracing::info!("Shutting down");
}
