// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Outbound mail collaborator.
//!
//! Delivery itself is an external concern; the server only needs a seam
//! it can hand a message to. The collaborator is constructed at startup
//! and injected through [`crate::state::AppState`], never reached through
//! process-wide globals.
//!
//! Notifications are best-effort: credential mutations are persisted
//! before any send is attempted, and a failed send never rolls them back.

use thiserror::Error;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider rejected the message: {0}")]
    Provider(String),
}

/// Send a notification whose failure the caller reports as a 500.
///
/// The provider error is logged server-side; the client only sees the
/// fixed message. Any state change made before this call stays in place.
pub fn send_or_upstream(mailer: &dyn Mailer, mail: OutboundMail) -> Result<(), ApiError> {
    mailer.send(mail).map_err(|err| {
        tracing::error!(error = %err, "outbound mail failed");
        ApiError::upstream("Failed to send notification email")
    })
}

/// An outbound message, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Seam for the external mail provider.
pub trait Mailer: Send + Sync {
    fn send(&self, mail: OutboundMail) -> Result<(), MailError>;
}

/// Default mailer: records the send as a structured log event.
///
/// Stands in for the real provider in development and tests; the
/// production binary swaps in a provider-backed implementation without
/// touching any handler.
#[derive(Debug, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, mail: OutboundMail) -> Result<(), MailError> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "outbound mail");
        Ok(())
    }
}
