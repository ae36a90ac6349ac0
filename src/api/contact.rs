// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Public contact form.

use axum::extract::State;

use crate::{
    api::extract::Json,
    email::{send_or_upstream, OutboundMail},
    error::ApiError,
    models::{ContactRequest, MessageResponse},
    state::AppState,
};

/// Submit a contact-form message. All fields are required.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    tag = "Contact",
    responses(
        (status = 200, description = "Message forwarded", body = MessageResponse),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Message could not be sent"),
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let all_present = [
        &request.name,
        &request.email,
        &request.subject,
        &request.message,
    ]
    .iter()
    .all(|field| !field.trim().is_empty());
    if !all_present {
        return Err(ApiError::bad_request("All fields are required"));
    }

    send_or_upstream(
        state.mailer.as_ref(),
        OutboundMail {
            to: state.admin_email.clone(),
            subject: format!("New contact message: {}", request.subject),
            body: format!(
                "From: {} ({})\n\n{}",
                request.name, request.email, request.message
            ),
        },
    )?;

    Ok(Json(MessageResponse::new("Message sent successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::testing::RecordingMailer;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ana".into(),
            email: "a@x.com".into(),
            subject: "Hi".into(),
            message: "Love the site".into(),
        }
    }

    #[tokio::test]
    async fn forwards_to_admin_address() {
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::default()
            .with_mailer(mailer.clone())
            .with_admin_email("staff@x.com");

        submit_contact(State(state), Json(request())).await.unwrap();

        assert_eq!(mailer.sent_to(), vec!["staff@x.com".to_string()]);
        assert!(mailer.last_body().unwrap().contains("Ana"));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let state = AppState::default();
        let mut bad = request();
        bad.message = "   ".into();

        let result = submit_contact(State(state), Json(bad)).await;
        assert_eq!(result.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mailer_failure_is_500() {
        let state = AppState::default().with_mailer(Arc::new(RecordingMailer::failing()));

        let result = submit_contact(State(state), Json(request())).await;
        assert_eq!(
            result.unwrap_err().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
