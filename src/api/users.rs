// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! User endpoints: registration, login, profile and the password
//! lifecycle, plus the admin user-management surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::extract::Json,
    auth::{password, reset, AdminOnly, Auth, CurrentUser, Role},
    email::{send_or_upstream, OutboundMail},
    error::ApiError,
    models::{
        ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
        MessageResponse, PublicUser, RegisterRequest, ResetPasswordRequest, UpdateProfileRequest,
        UserId,
    },
    state::AppState,
};

/// Register a new account.
///
/// The user record is persisted before the welcome mail is attempted; a
/// mail failure reports 500 but the account already exists.
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    request_body = RegisterRequest,
    tag = "Users",
    responses(
        (status = 201, description = "Account created", body = PublicUser),
        (status = 400, description = "Weak password or duplicate email/username"),
        (status = 500, description = "Welcome email could not be sent"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    password::validate_strength(&request.password)?;
    let password_hash = password::hash_password(&request.password)?;
    let role = Role::from_registration_input(request.role.as_deref());

    let user = {
        let mut store = state.store.write().await;
        store.create_user(request.username, request.email, password_hash, role)?
    };

    tracing::info!(user_id = %user.id, role = %user.role, "user registered");

    send_or_upstream(
        state.mailer.as_ref(),
        OutboundMail {
            to: user.email.clone(),
            subject: "Welcome to Tu Rincón Vegano".to_string(),
            body: format!(
                "Hi {}, welcome to Tu Rincón Vegano! Explore and enjoy our vegan recipes.",
                user.username
            ),
        },
    )?;

    Ok((StatusCode::CREATED, Json(PublicUser::from(&user))))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    request_body = LoginRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Session token and user", body = LoginResponse),
        (status = 400, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let store = state.store.read().await;

    let user = store
        .user_by_email(&request.email)
        .filter(|user| password::verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| ApiError::bad_request("Invalid credentials"))?;

    let token = state.tokens.issue(&user.id).map_err(|err| {
        tracing::error!(error = %err, "token issuance failed");
        ApiError::upstream("Failed to create session")
    })?;

    Ok(Json(LoginResponse {
        token,
        user: PublicUser::from(user),
    }))
}

/// The caller's own profile.
#[utoipa::path(
    get,
    path = "/api/v1/users/profile",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = CurrentUser),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn get_profile(Auth(user): Auth) -> Json<CurrentUser> {
    Json(user)
}

/// Update username, email or avatar.
#[utoipa::path(
    put,
    path = "/api/v1/users/profile",
    request_body = UpdateProfileRequest,
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated profile", body = PublicUser),
        (status = 400, description = "Duplicate email or username"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn update_profile(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.update_profile(&user.id, request.username, request.email, request.avatar)?;
    Ok(Json(PublicUser::from(&updated)))
}

/// Change the password while logged in.
#[utoipa::path(
    put,
    path = "/api/v1/users/change-password",
    request_body = ChangePasswordRequest,
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Wrong old password or weak new password"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn change_password(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    password::validate_strength(&request.new_password)?;
    let new_hash = password::hash_password(&request.new_password)?;

    let mut store = state.store.write().await;

    let stored = store
        .user_by_id(&user.id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    if !password::verify_password(&request.old_password, &stored.password_hash) {
        return Err(ApiError::bad_request("The old password is not correct"));
    }

    store.set_password_hash(&user.id, new_hash)?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// Request a password-reset code by email.
///
/// The code is persisted before the mail is attempted; a mail failure
/// reports 500 but the code stays active.
#[utoipa::path(
    post,
    path = "/api/v1/users/forgot-password",
    request_body = ForgotPasswordRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Recovery email sent", body = MessageResponse),
        (status = 404, description = "No account with that email"),
        (status = 500, description = "Recovery email could not be sent"),
    )
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (user, code) = {
        let mut store = state.store.write().await;
        reset::issue(&mut store, state.reset_codes.as_ref(), &request.email)?
    };

    send_or_upstream(
        state.mailer.as_ref(),
        OutboundMail {
            to: user.email,
            subject: "Password recovery".to_string(),
            body: format!("Your recovery code is {code}. It expires in 1 hour."),
        },
    )?;

    Ok(Json(MessageResponse::new("Recovery email sent")))
}

/// Consume a reset code and install a new password.
#[utoipa::path(
    post,
    path = "/api/v1/users/reset-password",
    request_body = ResetPasswordRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Password reset", body = MessageResponse),
        (status = 400, description = "Invalid or expired code, or weak password"),
        (status = 500, description = "Confirmation email could not be sent"),
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = {
        let mut store = state.store.write().await;
        reset::consume(
            &mut store,
            &request.email,
            &request.reset_code,
            &request.new_password,
        )?
    };

    send_or_upstream(
        state.mailer.as_ref(),
        OutboundMail {
            to: user.email,
            subject: "Your password has been changed".to_string(),
            body: "If you did not make this change, please contact support.".to_string(),
        },
    )?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}

/// Delete the caller's own account.
///
/// Authored recipes and comments are not cleaned up.
#[utoipa::path(
    delete,
    path = "/api/v1/users/delete",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn delete_account(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_user(&user.id)?;
    tracing::info!(user_id = %user.id, "account deleted");
    Ok(Json(MessageResponse::new("Account deleted")))
}

/// List all users (admin).
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = [PublicUser]),
        (status = 401, description = "Not an administrator"),
    )
)]
pub async fn list_users(
    AdminOnly(_admin): AdminOnly,
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.list_users().into_iter().map(PublicUser::from).collect()))
}

/// Delete any user by id (admin).
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "Id of the user to delete")),
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Unknown user id"),
    )
)]
pub async fn delete_user_by_admin(
    AdminOnly(admin): AdminOnly,
    Path(user_id): Path<UserId>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_user(&user_id)?;
    tracing::info!(admin_id = %admin.id, user_id = %user_id, "user deleted by admin");
    Ok(Json(MessageResponse::new("User deleted by admin")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::reset::testing::FixedCodeSource;
    use crate::email::testing::RecordingMailer;
    use std::sync::Arc;

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    fn test_state() -> (AppState, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::default().with_mailer(mailer.clone());
        (state, mailer)
    }

    #[tokio::test]
    async fn register_creates_user_and_sends_welcome_mail() {
        let (state, mailer) = test_state();

        let (status, Json(user)) = register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.username, "ana");
        assert_eq!(user.role, Role::User);
        assert_eq!(mailer.sent_to(), vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn register_honors_literal_admin_role_only() {
        let (state, _mailer) = test_state();

        let mut request = register_request("root", "root@x.com", "Abc12345!");
        request.role = Some("admin".into());
        let (_, Json(admin)) = register(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(admin.role, Role::Admin);

        let mut request = register_request("mod", "mod@x.com", "Abc12345!");
        request.role = Some("moderator".into());
        let (_, Json(user)) = register(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn register_rejects_weak_password_and_duplicates() {
        let (state, _mailer) = test_state();

        let weak = register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "weak")),
        )
        .await;
        assert_eq!(weak.unwrap_err().status, StatusCode::BAD_REQUEST);

        register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await
        .unwrap();

        let dup = register(
            State(state.clone()),
            Json(register_request("ana2", "a@x.com", "Abc12345!")),
        )
        .await;
        assert_eq!(dup.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_keeps_user_when_welcome_mail_fails() {
        let mailer = Arc::new(RecordingMailer::failing());
        let state = AppState::default().with_mailer(mailer);

        let result = register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await;
        assert_eq!(
            result.unwrap_err().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );

        // the record was persisted before the notification attempt
        let store = state.store.read().await;
        assert!(store.user_by_email("a@x.com").is_some());
    }

    #[tokio::test]
    async fn login_round_trip_and_bad_credentials() {
        let (state, _mailer) = test_state();
        register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await
        .unwrap();

        let Json(response) = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "Abc12345!".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.user.email, "a@x.com");
        assert!(state.tokens.verify(&response.token).is_ok());

        let wrong = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "Nope12345!".into(),
            }),
        )
        .await;
        assert_eq!(wrong.unwrap_err().status, StatusCode::BAD_REQUEST);

        let unknown = login(
            State(state),
            Json(LoginRequest {
                email: "ghost@x.com".into(),
                password: "Abc12345!".into(),
            }),
        )
        .await;
        assert_eq!(unknown.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn change_password_verifies_old_one() {
        let (state, _mailer) = test_state();
        let (_, Json(user)) = register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await
        .unwrap();
        let current = {
            let store = state.store.read().await;
            CurrentUser::from(store.user_by_id(&user.id).unwrap())
        };

        let wrong_old = change_password(
            Auth(current.clone()),
            State(state.clone()),
            Json(ChangePasswordRequest {
                old_password: "Wrong123!".into(),
                new_password: "Xyz98765!".into(),
            }),
        )
        .await;
        assert_eq!(wrong_old.unwrap_err().status, StatusCode::BAD_REQUEST);

        change_password(
            Auth(current),
            State(state.clone()),
            Json(ChangePasswordRequest {
                old_password: "Abc12345!".into(),
                new_password: "Xyz98765!".into(),
            }),
        )
        .await
        .unwrap();

        let Json(response) = login(
            State(state),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "Xyz98765!".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.user.id, user.id);
    }

    /// Full recovery scenario: register, request a code, fail with the
    /// wrong code, reset with the right one, log in with the new
    /// password, and confirm the old one no longer works.
    #[tokio::test]
    async fn password_recovery_scenario() {
        let mailer = Arc::new(RecordingMailer::default());
        let state = AppState::default()
            .with_mailer(mailer.clone())
            .with_reset_codes(Arc::new(FixedCodeSource::new(["483920"])));

        register(
            State(state.clone()),
            Json(register_request("ana", "a@x.com", "Abc12345!")),
        )
        .await
        .unwrap();

        forgot_password(
            State(state.clone()),
            Json(ForgotPasswordRequest {
                email: "a@x.com".into(),
            }),
        )
        .await
        .unwrap();
        assert!(mailer.last_body().unwrap().contains("483920"));

        let wrong = reset_password(
            State(state.clone()),
            Json(ResetPasswordRequest {
                email: "a@x.com".into(),
                reset_code: "000000".into(),
                new_password: "Xyz98765!".into(),
            }),
        )
        .await;
        let err = wrong.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid or expired code");

        reset_password(
            State(state.clone()),
            Json(ResetPasswordRequest {
                email: "a@x.com".into(),
                reset_code: "483920".into(),
                new_password: "Xyz98765!".into(),
            }),
        )
        .await
        .unwrap();

        // new password works
        assert!(login(
            State(state.clone()),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "Xyz98765!".into(),
            }),
        )
        .await
        .is_ok());

        // old password no longer does
        let old = login(
            State(state),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "Abc12345!".into(),
            }),
        )
        .await;
        assert_eq!(old.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn forgot_password_unknown_email_is_404() {
        let (state, _mailer) = test_state();
        let result = forgot_password(
            State(state),
            Json(ForgotPasswordRequest {
                email: "ghost@x.com".into(),
            }),
        )
        .await;
        assert_eq!(result.unwrap_err().status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn forgot_password_keeps_code_when_mail_fails() {
        let state = AppState::default()
            .with_mailer(Arc::new(RecordingMailer::failing()))
            .with_reset_codes(Arc::new(FixedCodeSource::new(["483920"])));

        register_directly(&state, "ana", "a@x.com").await;

        let result = forgot_password(
            State(state.clone()),
            Json(ForgotPasswordRequest {
                email: "a@x.com".into(),
            }),
        )
        .await;
        assert_eq!(
            result.unwrap_err().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );

        // the code was persisted before the notification attempt
        let store = state.store.read().await;
        let user = store.user_by_email("a@x.com").unwrap();
        assert_eq!(user.reset_code.as_ref().unwrap().code, "483920");
    }

    async fn register_directly(state: &AppState, username: &str, email: &str) {
        let mut store = state.store.write().await;
        store
            .create_user(
                username.into(),
                email.into(),
                password::hash_password("Abc12345!").unwrap(),
                Role::User,
            )
            .unwrap();
    }

    #[tokio::test]
    async fn admin_can_delete_any_user() {
        let (state, _mailer) = test_state();
        register_directly(&state, "ana", "a@x.com").await;
        let target_id = {
            let store = state.store.read().await;
            store.user_by_email("a@x.com").unwrap().id.clone()
        };
        let admin = CurrentUser {
            id: UserId::from("admin-1"),
            username: "root".into(),
            email: "root@x.com".into(),
            role: Role::Admin,
            avatar: None,
        };

        delete_user_by_admin(
            AdminOnly(admin.clone()),
            Path(target_id.clone()),
            State(state.clone()),
        )
        .await
        .unwrap();

        let missing = delete_user_by_admin(AdminOnly(admin), Path(target_id), State(state)).await;
        assert_eq!(missing.unwrap_err().status, StatusCode::NOT_FOUND);
    }
}
