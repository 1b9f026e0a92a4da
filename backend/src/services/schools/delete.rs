use crate::db;
use crate::error::ApiError;
use crate::services::auth;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn process(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    auth::require_token(&state, &req).await?;

    let school_id = path.into_inner();
    let mut conn = state.db()?;
    let school = db::get_school(&conn, &school_id)?
        .ok_or_else(|| ApiError::NotFound("School not found".to_string()))?;

    // Best-effort photo cleanup before the rows go away.
    if let Some(photo) = &school.group_photo {
        state.blob_store().remove(photo);
    }

    db::delete_school(&mut conn, &school_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "School and all students deleted successfully"
    })))
}
