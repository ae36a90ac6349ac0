// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! JWT claims and the resolved request identity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{User, UserId};

use super::roles::Role;

/// Claims carried by a session token.
///
/// The token is a pure assertion of identity and validity window; it is
/// never persisted server-side and there is no revocation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user id the token was issued for
    pub sub: UserId,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// The caller's identity as resolved by the auth extractor.
///
/// This is the only sanctioned way handlers obtain the caller: the full
/// user record is looked up from the store on every request and the
/// password hash is redacted before it reaches a handler.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CurrentUser {
    /// Unique user id
    pub id: UserId,
    /// Unique username
    pub username: String,
    /// Unique email address
    pub email: String,
    /// The caller's role
    pub role: Role,
    /// Optional avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            avatar: user.avatar.clone(),
        }
    }
}
