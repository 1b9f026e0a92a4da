//! Student verification endpoint.
//!
//! `POST /api/verification/{student_id}` checks that the student and school
//! exist, stores the captured image (best-effort) and records the matcher's
//! verdict. The deployed [`Matcher`] is a stub that always reports success;
//! a real face-matching implementation is a drop-in replacement behind the
//! trait.

mod matcher;
mod verify;

pub use matcher::{AlwaysMatch, Matcher};

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/verification";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{student_id}", post().to(verify::process))
}
