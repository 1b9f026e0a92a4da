//! Account and session endpoints, plus the bearer-token check used by the
//! school-mutation routes.
//!
//! The provided routes are:
//! - `POST /api/auth/register`: creates a user, storing a sha256 digest of
//!   the password.
//! - `POST /api/auth/login`: verifies the credentials and issues a bearer
//!   token kept in the in-memory session map.
//! - `POST /api/auth/logout`: revokes the presented token.
//!
//! Mutation handlers call [`require_token`] before doing any work, so an
//! unauthorized request never reaches ingestion or persistence logic.

mod login;
mod logout;
mod register;

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::web::{post, scope};
use actix_web::{HttpRequest, Scope};
use sha2::{Digest, Sha256};

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/register", post().to(register::process))
        .route("/login", post().to(login::process))
        .route("/logout", post().to(logout::process))
}

/// The token carried in an `Authorization: Bearer ...` header, if any.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Rejects the request unless it carries a known bearer token.
pub async fn require_token(state: &AppState, req: &HttpRequest) -> Result<(), ApiError> {
    let token = bearer_token(req)
        .ok_or_else(|| ApiError::Auth("Authorization token is required".to_string()))?;
    if state.sessions.read().await.contains_key(token) {
        Ok(())
    } else {
        Err(ApiError::Auth("Invalid or expired token".to_string()))
    }
}

pub(crate) fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
