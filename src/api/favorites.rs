// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Favorites endpoints. Favorites live on the caller's own user record,
//! so no ownership check beyond authentication is needed.

use axum::extract::State;

use crate::{
    api::extract::Json,
    auth::Auth,
    error::ApiError,
    models::{FavoriteRequest, Recipe, RecipeId},
    state::AppState,
};

/// The caller's favorite recipes.
#[utoipa::path(
    get,
    path = "/api/v1/users/favorites",
    tag = "Favorites",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Favorite recipes", body = [Recipe]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn list_favorites(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.favorites(&user.id)?))
}

/// Add a recipe to the caller's favorites.
#[utoipa::path(
    post,
    path = "/api/v1/users/favorites",
    request_body = FavoriteRequest,
    tag = "Favorites",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated favorite ids", body = [RecipeId]),
        (status = 400, description = "Recipe already in favorites"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown recipe id"),
    )
)]
pub async fn add_favorite(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<Vec<RecipeId>>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.add_favorite(&user.id, &request.recipe_id)?))
}

/// Remove a recipe from the caller's favorites.
#[utoipa::path(
    delete,
    path = "/api/v1/users/favorites",
    request_body = FavoriteRequest,
    tag = "Favorites",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated favorite ids", body = [RecipeId]),
        (status = 400, description = "Recipe not in favorites"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn remove_favorite(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<Vec<RecipeId>>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.remove_favorite(&user.id, &request.recipe_id)?))
}
