// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! Tu Rincon Vegano - Recipe Sharing Service
//!
//! This crate provides the REST backend for a vegan recipe sharing site:
//! user accounts with JWT authentication, an admin-curated recipe
//! catalogue, per-user favorites, threaded comments and a password
//! recovery flow backed by emailed one-time codes.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Tokens, roles, extractors and the ownership predicate
//! - `email` - Outbound notification delivery
//! - `store` - In-memory persistence

pub mod api;
pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
