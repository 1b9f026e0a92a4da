pub mod auth;
pub mod schools;
pub mod uploads;
pub mod verification;

use actix_web::HttpResponse;

/// Liveness probe, `GET /api/health`.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
