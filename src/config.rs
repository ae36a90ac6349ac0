// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vegan Recipes

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `JWT_SECRET` | HMAC secret for signing access tokens | `dev-secret` (development only) |
//! | `TOKEN_TTL_SECS` | Access token lifetime in seconds | `86400` |
//! | `ADMIN_EMAIL` | Recipient for suggestions and contact messages | `admin@turinconvegano.example` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the logging format.
///
/// `json` selects structured JSON output; anything else (or unset) keeps
/// the human-readable formatter.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Environment variable name for the token signing secret.
///
/// Every issued token is signed with this secret; rotating it invalidates
/// all outstanding sessions.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the access token lifetime in seconds.
pub const TOKEN_TTL_SECS_ENV: &str = "TOKEN_TTL_SECS";

/// Environment variable name for the administrator contact address.
pub const ADMIN_EMAIL_ENV: &str = "ADMIN_EMAIL";
