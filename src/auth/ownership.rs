// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Centralized ownership checks.
//!
//! Every mutating endpoint that touches a user-owned resource goes
//! through this single predicate, so the rule cannot drift between
//! resource types: the caller must be the resource's owner or an admin.

use crate::error::ApiError;
use crate::models::{Comment, UserId};

use super::claims::CurrentUser;

/// Resources with an owning user.
pub trait Owned {
    fn owner_id(&self) -> &UserId;
}

impl Owned for Comment {
    fn owner_id(&self) -> &UserId {
        &self.created_by
    }
}

/// The ownership predicate: owner or admin.
pub fn can_modify(caller: &CurrentUser, owner: &UserId) -> bool {
    caller.id == *owner || caller.is_admin()
}

/// Authorize a mutation of an owned resource.
///
/// Failures report 401, matching the rest of the API's authorization
/// responses.
pub fn authorize_modify<R: Owned>(caller: &CurrentUser, resource: &R) -> Result<(), ApiError> {
    if can_modify(caller, resource.owner_id()) {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "You do not have permission to modify this resource",
        ))
    }
}
