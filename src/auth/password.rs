// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Password hashing and the strength policy.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Symbols accepted by the strength policy.
const ALLOWED_SYMBOLS: &str = "@$!%*?&.";

/// Hash a plaintext password with bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    hash(password, DEFAULT_COST).map_err(|err| {
        tracing::error!(error = %err, "password hashing failed");
        ApiError::upstream("Internal error while processing password")
    })
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch rather than an error, so
/// login failures never leak storage details.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    verify(password, stored_hash).unwrap_or(false)
}

/// Check the password strength policy.
///
/// Minimum length 8, at least one uppercase letter, one digit and one
/// symbol from `@$!%*?&.`.
pub fn validate_strength(password: &str) -> Result<(), ApiError> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| ALLOWED_SYMBOLS.contains(c));

    if long_enough && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "Password must be at least 8 characters and include an uppercase letter, a digit and a symbol (@$!%*?&.)",
        ))
    }
}
