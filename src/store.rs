// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! In-memory store for users, recipes and comments.
//!
//! The store stands in for the database behind the API. Every mutation
//! runs under the single store lock held by [`crate::state::AppState`],
//! which gives each read-modify-write the per-record atomicity the
//! credential lifecycle relies on (reset codes are overwritten and
//! cleared together with the password hash in one critical section).
//!
//! Deleting a user does not cascade to recipes or comments they
//! authored; those keep a dangling author reference, matching the
//! existing contract.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::auth::Role;
use crate::error::ApiError;
use crate::models::{
    Category, Comment, CommentId, CreateCommentRequest, CreateRecipeRequest, Recipe, RecipeId,
    ResetCode, UpdateRecipeRequest, User, UserId,
};

/// How long an issued reset code stays valid.
pub const RESET_CODE_TTL_SECS: i64 = 3_600;

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<UserId, User>,
    recipes: HashMap<RecipeId, Recipe>,
    comments: HashMap<CommentId, Comment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Create a user after enforcing email and username uniqueness.
    pub fn create_user(
        &mut self,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Result<User, ApiError> {
        if self.users.values().any(|user| user.email == email) {
            return Err(ApiError::bad_request("Email is already in use"));
        }
        if self.users.values().any(|user| user.username == username) {
            return Err(ApiError::bad_request("Username is already taken"));
        }

        let user = User {
            id: UserId::generate(),
            username,
            email,
            password_hash,
            role,
            avatar: None,
            reset_code: None,
            favorites: Vec::new(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    pub fn user_by_id(&self, user_id: &UserId) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    pub fn list_users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        users
    }

    /// Apply a partial profile update, re-checking uniqueness against
    /// everyone but the user being updated.
    pub fn update_profile(
        &mut self,
        user_id: &UserId,
        username: Option<String>,
        email: Option<String>,
        avatar: Option<String>,
    ) -> Result<User, ApiError> {
        if let Some(ref new_email) = email {
            if self
                .users
                .values()
                .any(|user| &user.id != user_id && &user.email == new_email)
            {
                return Err(ApiError::bad_request("Email is already in use"));
            }
        }
        if let Some(ref new_username) = username {
            if self
                .users
                .values()
                .any(|user| &user.id != user_id && &user.username == new_username)
            {
                return Err(ApiError::bad_request("Username is already taken"));
            }
        }

        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        if let Some(new_username) = username {
            user.username = new_username;
        }
        if let Some(new_email) = email {
            user.email = new_email;
        }
        if let Some(new_avatar) = avatar {
            user.avatar = Some(new_avatar);
        }

        Ok(user.clone())
    }

    pub fn set_password_hash(
        &mut self,
        user_id: &UserId,
        password_hash: String,
    ) -> Result<(), ApiError> {
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;
        user.password_hash = password_hash;
        Ok(())
    }

    /// Deletes the user record. Authored recipes and comments are left in
    /// place with a dangling reference.
    pub fn delete_user(&mut self, user_id: &UserId) -> Result<(), ApiError> {
        if self.users.remove(user_id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("User not found"))
        }
    }

    // -------------------------------------------------------------------------
    // Reset codes
    // -------------------------------------------------------------------------

    /// Install a fresh reset code, overwriting any existing one.
    pub fn set_reset_code(&mut self, email: &str, reset_code: ResetCode) -> Result<User, ApiError> {
        let user = self
            .users
            .values_mut()
            .find(|user| user.email == email)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        user.reset_code = Some(reset_code);
        Ok(user.clone())
    }

    /// Consume a reset code: verify it matches and has not expired, then
    /// replace the password hash and clear the code in one mutation.
    pub fn consume_reset_code(
        &mut self,
        email: &str,
        code: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<User, ApiError> {
        let invalid = || ApiError::bad_request("Invalid or expired code");

        let user = self
            .users
            .values_mut()
            .find(|user| user.email == email)
            .ok_or_else(invalid)?;

        match &user.reset_code {
            Some(active) if active.code == code && now <= active.expires_at => {}
            _ => return Err(invalid()),
        }

        user.password_hash = new_password_hash;
        user.reset_code = None;
        Ok(user.clone())
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// The caller's favorite recipes. Ids whose recipe was deleted are
    /// skipped rather than surfaced as errors.
    pub fn favorites(&self, user_id: &UserId) -> Result<Vec<Recipe>, ApiError> {
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        Ok(user
            .favorites
            .iter()
            .filter_map(|recipe_id| self.recipes.get(recipe_id).cloned())
            .collect())
    }

    pub fn add_favorite(
        &mut self,
        user_id: &UserId,
        recipe_id: &RecipeId,
    ) -> Result<Vec<RecipeId>, ApiError> {
        if !self.recipes.contains_key(recipe_id) {
            return Err(ApiError::not_found("Recipe not found"));
        }

        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        if user.favorites.contains(recipe_id) {
            return Err(ApiError::conflict("This recipe is already in favorites"));
        }

        user.favorites.push(recipe_id.clone());
        Ok(user.favorites.clone())
    }

    pub fn remove_favorite(
        &mut self,
        user_id: &UserId,
        recipe_id: &RecipeId,
    ) -> Result<Vec<RecipeId>, ApiError> {
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        if !user.favorites.contains(recipe_id) {
            return Err(ApiError::conflict("This recipe is not in favorites"));
        }

        user.favorites.retain(|fav| fav != recipe_id);
        Ok(user.favorites.clone())
    }

    // -------------------------------------------------------------------------
    // Recipes
    // -------------------------------------------------------------------------

    pub fn create_recipe(&mut self, request: CreateRecipeRequest, created_by: UserId) -> Recipe {
        let recipe = Recipe {
            id: RecipeId::generate(),
            title: request.title,
            ingredients: request.ingredients,
            steps: request.steps,
            category: request.category,
            image: request.image,
            prep_time: request.prep_time.unwrap_or_else(|| "10m".to_string()),
            cook_time: request.cook_time.unwrap_or_else(|| "20m".to_string()),
            servings: request.servings.unwrap_or_else(|| "2".to_string()),
            created_by,
            created_at: Utc::now(),
        };
        self.recipes.insert(recipe.id.clone(), recipe.clone());
        recipe
    }

    pub fn list_recipes(&self, category: Option<Category>) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .values()
            .filter(|recipe| category.is_none_or(|wanted| recipe.category == wanted))
            .cloned()
            .collect();
        recipes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        recipes
    }

    pub fn recipe_by_id(&self, recipe_id: &RecipeId) -> Option<&Recipe> {
        self.recipes.get(recipe_id)
    }

    pub fn update_recipe(
        &mut self,
        recipe_id: &RecipeId,
        request: UpdateRecipeRequest,
    ) -> Result<Recipe, ApiError> {
        let recipe = self
            .recipes
            .get_mut(recipe_id)
            .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

        if let Some(title) = request.title {
            recipe.title = title;
        }
        if let Some(ingredients) = request.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(steps) = request.steps {
            recipe.steps = steps;
        }
        if let Some(category) = request.category {
            recipe.category = category;
        }
        if let Some(image) = request.image {
            recipe.image = image;
        }

        Ok(recipe.clone())
    }

    pub fn delete_recipe(&mut self, recipe_id: &RecipeId) -> Result<(), ApiError> {
        if self.recipes.remove(recipe_id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Recipe not found"))
        }
    }

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    /// Add a comment or a reply.
    ///
    /// Replies are restricted to one level: the parent must exist, be
    /// top-level and belong to the same recipe.
    pub fn add_comment(
        &mut self,
        request: CreateCommentRequest,
        created_by: UserId,
    ) -> Result<Comment, ApiError> {
        if !self.recipes.contains_key(&request.recipe_id) {
            return Err(ApiError::not_found("Recipe not found"));
        }

        if let Some(ref parent_id) = request.parent_id {
            let parent = self
                .comments
                .get(parent_id)
                .ok_or_else(|| ApiError::not_found("Parent comment not found"))?;
            if parent.recipe != request.recipe_id {
                return Err(ApiError::bad_request(
                    "Parent comment belongs to a different recipe",
                ));
            }
            if parent.parent.is_some() {
                return Err(ApiError::bad_request("Replies cannot be nested further"));
            }
        }

        let comment = Comment {
            id: CommentId::generate(),
            content: request.content,
            created_by,
            recipe: request.recipe_id,
            parent: request.parent_id,
            created_at: Utc::now(),
        };
        self.comments.insert(comment.id.clone(), comment.clone());
        Ok(comment)
    }

    pub fn comment_by_id(&self, comment_id: &CommentId) -> Option<&Comment> {
        self.comments.get(comment_id)
    }

    pub fn comments_by_recipe(&self, recipe_id: &RecipeId) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .values()
            .filter(|comment| &comment.recipe == recipe_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    /// Delete a comment. Deleting a top-level comment also removes all of
    /// its direct replies. Returns how many comments were removed.
    pub fn delete_comment(&mut self, comment_id: &CommentId) -> Result<usize, ApiError> {
        if self.comments.remove(comment_id).is_none() {
            return Err(ApiError::not_found("Comment not found"));
        }

        let before = self.comments.len();
        self.comments
            .retain(|_, comment| comment.parent.as_ref() != Some(comment_id));
        Ok(1 + before - self.comments.len())
    }
}
