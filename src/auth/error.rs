// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Authentication and authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors produced while resolving or authorizing the caller.
///
/// Every variant maps to 401: both "not authenticated" and "not
/// authorized" are reported with the same status by this API, only the
/// message distinguishes them.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No authorization header present
    MissingAuthHeader,
    /// Authorization header is not `Bearer <token>`
    InvalidAuthHeader,
    /// Token signature, structure or expiry check failed
    InvalidToken,
    /// Token verified but the subject no longer exists
    UserNotFound,
    /// Authenticated but lacking the admin role
    NotAuthorized,
}

#[derive(Serialize)]
struct AuthErrorBody {
    message: String,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthHeader => {
                write!(f, "You are not authorized to perform this action")
            }
            AuthError::InvalidAuthHeader => {
                write!(f, "Invalid authorization header (expected 'Bearer <token>')")
            }
            AuthError::InvalidToken => write!(f, "Invalid or expired token"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::NotAuthorized => {
                write!(f, "Only administrators can perform this action")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
