// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::CurrentUser,
    models::{
        Category, ChangePasswordRequest, Comment, CommentId, ContactRequest, CreateCommentRequest,
        CreateRecipeRequest, FavoriteRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
        MessageResponse, PublicUser, Recipe, RecipeId, RegisterRequest, ResetPasswordRequest,
        SuggestionRequest, UpdateProfileRequest, UpdateRecipeRequest, UserId,
    },
    state::AppState,
};

pub mod comments;
pub mod contact;
pub mod extract;
pub mod favorites;
pub mod health;
pub mod recipes;
pub mod users;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route(
            "/users/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/users/change-password", put(users::change_password))
        .route("/users/forgot-password", post(users::forgot_password))
        .route("/users/reset-password", post(users::reset_password))
        .route("/users/delete", delete(users::delete_account))
        .route("/users", get(users::list_users))
        .route("/users/{user_id}", delete(users::delete_user_by_admin))
        .route(
            "/users/favorites",
            get(favorites::list_favorites)
                .post(favorites::add_favorite)
                .delete(favorites::remove_favorite),
        )
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/recipes/suggestion", post(recipes::send_suggestion))
        .route(
            "/recipes/{recipe_id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route("/comments", post(comments::add_comment))
        .route(
            "/comments/{id}",
            get(comments::comments_by_recipe).delete(comments::delete_comment),
        );

    Router::new()
        .nest("/api/v1", v1_routes)
        .route("/api/contact", post(contact::submit_contact))
        .route("/health", get(health::health))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::register,
        users::login,
        users::get_profile,
        users::update_profile,
        users::change_password,
        users::forgot_password,
        users::reset_password,
        users::delete_account,
        users::list_users,
        users::delete_user_by_admin,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        recipes::list_recipes,
        recipes::get_recipe,
        recipes::create_recipe,
        recipes::update_recipe,
        recipes::delete_recipe,
        recipes::send_suggestion,
        comments::add_comment,
        comments::comments_by_recipe,
        comments::delete_comment,
        contact::submit_contact,
        health::health
    ),
    components(
        schemas(
            PublicUser,
            CurrentUser,
            Recipe,
            Comment,
            Category,
            UserId,
            RecipeId,
            CommentId,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UpdateProfileRequest,
            ChangePasswordRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            CreateRecipeRequest,
            UpdateRecipeRequest,
            SuggestionRequest,
            CreateCommentRequest,
            FavoriteRequest,
            ContactRequest,
            MessageResponse,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login and account management"),
        (name = "Favorites", description = "Per-user favorite recipes"),
        (name = "Recipes", description = "Recipe catalogue"),
        (name = "Comments", description = "Recipe comment threads"),
        (name = "Contact", description = "Public contact form"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;
