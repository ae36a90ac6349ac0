// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a single shared secret. Validity is
//! re-derived from the signature and expiry on every request; nothing is
//! stored server-side, so a leaked token stays valid until it expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::UserId;

use super::{claims::Claims, error::AuthError};

/// Default session lifetime (24 hours).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given subject.
    pub fn issue(&self, subject: &UserId) -> Result<String, AuthError> {
        self.issue_with_ttl(subject, self.ttl_secs)
    }

    /// Issue a token with an explicit lifetime in seconds.
    ///
    /// A non-positive lifetime produces an already-expired token, which
    /// the expiry tests rely on.
    pub fn issue_with_ttl(&self, subject: &UserId, ttl_secs: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token and return the subject it was issued for.
    ///
    /// Fails with `InvalidToken` on bad signature, malformed structure or
    /// expiry. There is no revocation check.
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims.sub)
    }
}
