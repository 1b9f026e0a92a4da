//! School roster endpoints under `/api/school`.
//!
//! The provided routes are:
//! - `GET /api/school`: lists every school with its basic attributes.
//! - `POST /api/school`: multipart roster upload (`file` = CSV sheet,
//!   `image` = optional group photo). Runs the full ingestion pipeline and
//!   answers with a creation summary. Requires a bearer token.
//! - `GET /api/school/{school_id}`: single-school read.
//! - `PUT /api/school/{school_id}`: partial update of name/affiliation
//!   number. Requires a bearer token.
//! - `DELETE /api/school/{school_id}`: removes the school, every owned
//!   student and (best-effort) the stored group photo. Requires a bearer
//!   token.
//! - `GET /api/school/{school_id}/students`: full student records.
//! - `GET /api/school/{school_id}/export`: the verified-profiles workbook
//!   download.

mod add;
mod delete;
mod export;
mod get;
mod list;
mod students;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/school";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(add::process))
        .route("/{school_id}", get().to(get::process))
        .route("/{school_id}", put().to(update::process))
        .route("/{school_id}", delete().to(delete::process))
        .route("/{school_id}/students", get().to(students::process))
        .route("/{school_id}/export", get().to(export::process))
}
