// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Authentication and authorization.
//!
//! - [`token`] - session token issuance/verification (HS256, shared secret)
//! - [`extractor`] - the `Auth` / `AdminOnly` request extractors
//! - [`password`] - bcrypt hashing and the strength policy
//! - [`reset`] - one-time password-reset codes
//! - [`ownership`] - the owner-or-admin predicate used by every mutating
//!   endpoint

pub mod claims;
pub mod error;
pub mod extractor;
pub mod ownership;
pub mod password;
pub mod reset;
pub mod roles;
pub mod token;

pub use claims::{Claims, CurrentUser};
pub use error::AuthError;
pub use extractor::{AdminOnly, Auth};
pub use ownership::{authorize_modify, can_modify, Owned};
pub use reset::{RandomCodeSource, ResetCodeSource};
pub use roles::Role;
pub use token::{TokenService, DEFAULT_TOKEN_TTL_SECS};
