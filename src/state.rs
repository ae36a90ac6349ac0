// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{RandomCodeSource, ResetCodeSource, TokenService, DEFAULT_TOKEN_TTL_SECS};
use crate::email::{LogMailer, Mailer};
use crate::store::InMemoryStore;

/// Shared application state.
///
/// All collaborators are constructed once at startup and injected here;
/// nothing in the crate reaches for process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: TokenService,
    pub mailer: Arc<dyn Mailer>,
    pub reset_codes: Arc<dyn ResetCodeSource>,
    /// Address suggestions and contact-form messages are forwarded to.
    pub admin_email: String,
}

impl AppState {
    pub fn new(store: InMemoryStore, tokens: TokenService) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens,
            mailer: Arc::new(LogMailer),
            reset_codes: Arc::new(RandomCodeSource),
            admin_email: "admin@turinconvegano.example".to_string(),
        }
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_reset_codes(mut self, reset_codes: Arc<dyn ResetCodeSource>) -> Self {
        self.reset_codes = reset_codes;
        self
    }

    pub fn with_admin_email(mut self, admin_email: impl Into<String>) -> Self {
        self.admin_email = admin_email.into();
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            InMemoryStore::new(),
            TokenService::new("dev-secret", DEFAULT_TOKEN_TTL_SECS),
        )
    }
}
