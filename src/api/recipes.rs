// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Recipe endpoints. Browsing is public; every mutation is gated on the
//! admin role.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::extract::{Json, Query},
    auth::{AdminOnly, Auth},
    email::{send_or_upstream, OutboundMail},
    error::ApiError,
    models::{
        Category, CreateRecipeRequest, MessageResponse, Recipe, RecipeId, SuggestionRequest,
        UpdateRecipeRequest,
    },
    state::AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct RecipeFilter {
    /// Optional category filter; an unknown value is rejected with 400.
    pub category: Option<Category>,
}

/// List recipes, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    params(RecipeFilter),
    tag = "Recipes",
    responses(
        (status = 200, description = "Recipes", body = [Recipe]),
        (status = 400, description = "Unknown category value"),
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(filter): Query<RecipeFilter>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.list_recipes(filter.category)))
}

/// Fetch a single recipe.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{recipe_id}",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    tag = "Recipes",
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "Unknown recipe id"),
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<RecipeId>,
    State(state): State<AppState>,
) -> Result<Json<Recipe>, ApiError> {
    let store = state.store.read().await;
    let recipe = store
        .recipe_by_id(&recipe_id)
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;
    Ok(Json(recipe.clone()))
}

/// Create a recipe (admin).
///
/// The image field is a URL; upload and storage happen in an external
/// service before this call.
#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    request_body = CreateRecipeRequest,
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 401, description = "Not an administrator"),
    )
)]
pub async fn create_recipe(
    AdminOnly(admin): AdminOnly,
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let mut store = state.store.write().await;
    let recipe = store.create_recipe(request, admin.id);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Update a recipe (admin). Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{recipe_id}",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    request_body = UpdateRecipeRequest,
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated recipe", body = Recipe),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Unknown recipe id"),
    )
)]
pub async fn update_recipe(
    AdminOnly(_admin): AdminOnly,
    Path(recipe_id): Path<RecipeId>,
    State(state): State<AppState>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<Recipe>, ApiError> {
    let mut store = state.store.write().await;
    let recipe = store.update_recipe(&recipe_id, request)?;
    Ok(Json(recipe))
}

/// Delete a recipe (admin).
#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{recipe_id}",
    params(("recipe_id" = String, Path, description = "Recipe id")),
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 401, description = "Not an administrator"),
        (status = 404, description = "Unknown recipe id"),
    )
)]
pub async fn delete_recipe(
    AdminOnly(_admin): AdminOnly,
    Path(recipe_id): Path<RecipeId>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete_recipe(&recipe_id)?;
    Ok(Json(MessageResponse::new("Recipe deleted")))
}

/// Forward a suggestion from a logged-in user to the administrators.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/suggestion",
    request_body = SuggestionRequest,
    tag = "Recipes",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Suggestion forwarded", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Suggestion email could not be sent"),
    )
)]
pub async fn send_suggestion(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    send_or_upstream(
        state.mailer.as_ref(),
        OutboundMail {
            to: state.admin_email.clone(),
            subject: format!("Suggestion from {}: {}", user.username, request.subject),
            body: request.message,
        },
    )?;

    Ok(Json(MessageResponse::new("Suggestion sent to the administrators")))
}
