// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! # API Data Models
//!
//! Domain records and the request/response structures used by the REST
//! API. DTOs derive `Serialize`/`Deserialize` and `ToSchema` for JSON
//! handling and OpenAPI documentation; internal records (notably
//! [`User`]) are never serialized directly, so the password hash cannot
//! leak through a response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

// =============================================================================
// Id newtypes
// =============================================================================

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        pub struct $name(pub String);

        impl $name {
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_type!(
    /// Unique user identifier.
    UserId
);
id_type!(
    /// Unique recipe identifier.
    RecipeId
);
id_type!(
    /// Unique comment identifier.
    CommentId
);

// =============================================================================
// Users
// =============================================================================

/// An active password-reset code embedded in the user record.
///
/// Code and expiry are always set and cleared together; the pair is never
/// partially present. The code is stored in plaintext: it is a low-value,
/// short-lived, single-use credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetCode {
    /// 6-digit numeric code, range [100000, 999999]
    pub code: String,
    /// Instant after which the code is rejected
    pub expires_at: DateTime<Utc>,
}

/// A persisted user record.
///
/// Not serializable: everything that leaves the server goes through
/// [`PublicUser`] or the auth layer's `CurrentUser`, both of which omit
/// the password hash and reset-code state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub reset_code: Option<ResetCode>,
    /// Favorite recipes; membership is unique, order is irrelevant.
    pub favorites: Vec<RecipeId>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
impl User {
    pub fn new_for_tests(
        id: &str,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::from(id),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
            avatar: None,
            reset_code: None,
            favorites: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Redacted user representation returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Only the literal `"admin"` is honored; anything else becomes `user`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: session token plus the redacted user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Request to change the password while logged in.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Request a password-reset code by email.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Consume a password-reset code.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub reset_code: String,
    pub new_password: String,
}

// =============================================================================
// Recipes
// =============================================================================

/// Recipe categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

/// A published recipe.
///
/// The image is a URL; upload and storage are handled by an external
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Category,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Request to create a recipe (admin only).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
}

/// Partial recipe update (admin only); absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Suggestion forwarded to the site administrators.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestionRequest {
    pub subject: String,
    pub message: String,
}

// =============================================================================
// Comments
// =============================================================================

/// A comment on a recipe.
///
/// `parent` is `None` for top-level comments. Threads are two levels
/// deep: a reply's parent is always a top-level comment on the same
/// recipe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_by: UserId,
    pub recipe: RecipeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

/// Request to add a comment or a reply.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub recipe_id: RecipeId,
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

// =============================================================================
// Favorites & misc
// =============================================================================

/// Request naming a recipe to add to or remove from favorites.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    pub recipe_id: RecipeId,
}

/// Public contact-form submission.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Generic message-only response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
