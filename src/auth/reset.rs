// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Password-reset codes.
//!
//! A reset code is a short-lived, single-use numeric credential proving
//! control of an email address. At most one code is active per user;
//! issuing a new one overwrites the previous one, and consumption clears
//! the code together with the password replacement in a single store
//! mutation.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::error::ApiError;
use crate::models::{ResetCode, User};
use crate::store::{InMemoryStore, RESET_CODE_TTL_SECS};

use super::password;

/// Source of fresh reset codes.
///
/// Injected so tests can pin the generated code; the production source
/// draws uniformly from [100000, 999999].
pub trait ResetCodeSource: Send + Sync {
    fn next_code(&self) -> String;
}

/// Production code source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomCodeSource;

impl ResetCodeSource for RandomCodeSource {
    fn next_code(&self) -> String {
        rand::thread_rng().gen_range(100_000..=999_999).to_string()
    }
}

/// Issue a reset code for the given email.
///
/// Overwrites any previously issued code and stamps a fresh one-hour
/// expiry. The caller is responsible for notifying the user; the code is
/// already persisted by the time this returns, so a failed notification
/// leaves it active.
pub fn issue(
    store: &mut InMemoryStore,
    source: &dyn ResetCodeSource,
    email: &str,
) -> Result<(User, String), ApiError> {
    let code = source.next_code();
    debug_assert!(code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()));

    let reset_code = ResetCode {
        code: code.clone(),
        expires_at: Utc::now() + Duration::seconds(RESET_CODE_TTL_SECS),
    };

    let user = store.set_reset_code(email, reset_code)?;
    tracing::info!(user_id = %user.id, "password reset code issued");
    Ok((user, code))
}

/// Consume a reset code and install the new password.
///
/// The new password is checked against the strength policy before the
/// code is examined. A matching, unexpired code replaces the password
/// hash and clears the code atomically; any mismatch, expiry or unknown
/// email reports the same "invalid or expired" failure.
pub fn consume(
    store: &mut InMemoryStore,
    email: &str,
    code: &str,
    new_password: &str,
) -> Result<User, ApiError> {
    password::validate_strength(new_password)?;
    let new_hash = password::hash_password(new_password)?;

    let user = store.consume_reset_code(email, code, new_hash, Utc::now())?;
    tracing::info!(user_id = %user.id, "password reset completed");
    Ok(user)
}

#[cfg(test)]
pub mod testing {
    use super::ResetCodeSource;

    /// Code source returning a fixed sequence, then repeating the last.
    pub struct FixedCodeSource {
        codes: Vec<String>,
        cursor: std::sync::atomic::AtomicUsize,
    }

    impl FixedCodeSource {
        pub fn new<const N: usize>(codes: [&str; N]) -> Self {
            Self {
                codes: codes.iter().map(|code| code.to_string()).collect(),
                cursor: std::sync::atomic::AtomicUsize::new(0),
            }
        }
    }

    impl ResetCodeSource for FixedCodeSource {
        fn next_code(&self) -> String {
            let index = self
                .cursor
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
                .min(self.codes.len() - 1);
            self.codes[index].clone()
        }
    }
}
