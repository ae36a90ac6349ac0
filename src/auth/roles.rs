// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User roles for authorization.
///
/// - `Admin` - manages recipe content and other users
/// - `User` - normal account, owns its comments and favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Normal registered user
    User,
}

impl Role {
    /// Coerce a client-supplied role string at registration.
    ///
    /// Exactly the literal `"admin"` is honored; anything else (including
    /// `None`) becomes `User`. Trusting this input is a known weakness of
    /// the existing contract and is preserved here on purpose.
    pub fn from_registration_input(input: Option<&str>) -> Role {
        match input {
            Some("admin") => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}
