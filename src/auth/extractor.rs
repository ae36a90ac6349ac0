// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Axum extractors for authenticated callers.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is CurrentUser
//! }
//! ```
//!
//! `AdminOnly` layers the role gate on top and must therefore be the
//! extractor on admin endpoints; there is no separate middleware to
//! order correctly.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::state::AppState;

use super::{claims::CurrentUser, error::AuthError};

/// Extractor resolving the caller's identity.
///
/// Per-request flow: extract the bearer token, verify it, resolve the
/// full user record from the store and attach a redacted `CurrentUser`.
/// The store lookup is what rejects tokens for deleted accounts; the
/// token itself still verifies after a deletion.
pub struct Auth(pub CurrentUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?
            .trim();

        let user_id = state.tokens.verify(token)?;

        let store = state.store.read().await;
        let user = store.user_by_id(&user_id).ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "token subject no longer exists");
            AuthError::UserNotFound
        })?;

        Ok(Auth(CurrentUser::from(user)))
    }
}

/// Extractor that additionally requires the admin role.
pub struct AdminOnly(pub CurrentUser);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Auth(user) = Auth::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AuthError::NotAuthorized);
        }

        Ok(AdminOnly(user))
    }
}
