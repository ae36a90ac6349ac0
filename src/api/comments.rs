// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Comment endpoints: two-level threads on recipes with ownership-gated
//! deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::extract::Json,
    auth::{authorize_modify, Auth},
    error::ApiError,
    models::{Comment, CommentId, CreateCommentRequest, MessageResponse, RecipeId},
    state::AppState,
};

/// Add a comment or a reply to a recipe.
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    tag = "Comments",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Comment added", body = Comment),
        (status = 400, description = "Invalid reply nesting"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown recipe or parent comment"),
    )
)]
pub async fn add_comment(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let mut store = state.store.write().await;
    let comment = store.add_comment(request, user.id)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// All comments on a recipe (top-level and replies).
#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    tag = "Comments",
    responses((status = 200, description = "Comments", body = [Comment]))
)]
pub async fn comments_by_recipe(
    Path(recipe_id): Path<RecipeId>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.comments_by_recipe(&recipe_id)))
}

/// Delete a comment (author or admin).
///
/// Deleting a top-level comment also removes its direct replies.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    tag = "Comments",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 401, description = "Not the author or an admin"),
        (status = 404, description = "Unknown comment id"),
    )
)]
pub async fn delete_comment(
    Auth(user): Auth,
    Path(comment_id): Path<CommentId>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;

    let comment = store
        .comment_by_id(&comment_id)
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;
    authorize_modify(&user, comment)?;

    store.delete_comment(&comment_id)?;
    Ok(Json(MessageResponse::new("Comment deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CurrentUser, Role};
    use crate::models::{Category, CreateRecipeRequest, UserId};

    fn caller(id: &str, role: Role) -> CurrentUser {
        CurrentUser {
            id: UserId::from(id),
            username: format!("user-{id}"),
            email: format!("{id}@x.com"),
            role,
            avatar: None,
        }
    }

    async fn seed_recipe(state: &AppState) -> RecipeId {
        let mut store = state.store.write().await;
        store
            .create_recipe(
                CreateRecipeRequest {
                    title: "Tofu bowl".into(),
                    ingredients: vec!["tofu".into()],
                    steps: vec!["cook".into()],
                    category: Category::Dinner,
                    image: "https://img.example/r.jpg".into(),
                    prep_time: None,
                    cook_time: None,
                    servings: None,
                },
                UserId::from("admin-1"),
            )
            .id
    }

    #[tokio::test]
    async fn add_and_list_comments() {
        let state = AppState::default();
        let recipe_id = seed_recipe(&state).await;

        let (status, Json(top)) = add_comment(
            Auth(caller("u-1", Role::User)),
            State(state.clone()),
            Json(CreateCommentRequest {
                recipe_id: recipe_id.clone(),
                content: "Delicious".into(),
                parent_id: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        add_comment(
            Auth(caller("u-2", Role::User)),
            State(state.clone()),
            Json(CreateCommentRequest {
                recipe_id: recipe_id.clone(),
                content: "Agreed".into(),
                parent_id: Some(top.id.clone()),
            }),
        )
        .await
        .unwrap();

        let Json(comments) = comments_by_recipe(Path(recipe_id), State(state))
            .await
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].parent, Some(top.id));
    }

    #[tokio::test]
    async fn commenting_on_missing_recipe_is_404() {
        let state = AppState::default();
        let result = add_comment(
            Auth(caller("u-1", Role::User)),
            State(state),
            Json(CreateCommentRequest {
                recipe_id: RecipeId::from("missing"),
                content: "hello".into(),
                parent_id: None,
            }),
        )
        .await;
        assert_eq!(result.unwrap_err().status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_requires_author_or_admin() {
        let state = AppState::default();
        let recipe_id = seed_recipe(&state).await;

        let (_, Json(comment)) = add_comment(
            Auth(caller("u-1", Role::User)),
            State(state.clone()),
            Json(CreateCommentRequest {
                recipe_id: recipe_id.clone(),
                content: "Mine".into(),
                parent_id: None,
            }),
        )
        .await
        .unwrap();

        // a stranger is rejected with 401
        let stranger = delete_comment(
            Auth(caller("u-2", Role::User)),
            Path(comment.id.clone()),
            State(state.clone()),
        )
        .await;
        assert_eq!(stranger.unwrap_err().status, StatusCode::UNAUTHORIZED);

        // the author succeeds
        delete_comment(
            Auth(caller("u-1", Role::User)),
            Path(comment.id.clone()),
            State(state.clone()),
        )
        .await
        .unwrap();

        let Json(remaining) = comments_by_recipe(Path(recipe_id), State(state))
            .await
            .unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn admin_can_delete_and_cascade_removes_replies() {
        let state = AppState::default();
        let recipe_id = seed_recipe(&state).await;

        let (_, Json(top)) = add_comment(
            Auth(caller("u-1", Role::User)),
            State(state.clone()),
            Json(CreateCommentRequest {
                recipe_id: recipe_id.clone(),
                content: "Top".into(),
                parent_id: None,
            }),
        )
        .await
        .unwrap();
        add_comment(
            Auth(caller("u-2", Role::User)),
            State(state.clone()),
            Json(CreateCommentRequest {
                recipe_id: recipe_id.clone(),
                content: "Reply".into(),
                parent_id: Some(top.id.clone()),
            }),
        )
        .await
        .unwrap();

        delete_comment(
            Auth(caller("admin-1", Role::Admin)),
            Path(top.id),
            State(state.clone()),
        )
        .await
        .unwrap();

        let Json(remaining) = comments_by_recipe(Path(recipe_id), State(state))
            .await
            .unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_comment_is_404() {
        let state = AppState::default();
        let result = delete_comment(
            Auth(caller("u-1", Role::User)),
            Path(CommentId::from("missing")),
            State(state),
        )
        .await;
        assert_eq!(result.unwrap_err().status, StatusCode::NOT_FOUND);
    }
}
