//! Standalone image upload, `POST /api/upload`. Stores the multipart
//! `image` field in the blob store and answers with its public path.

mod image;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/upload";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(image::process))
}
