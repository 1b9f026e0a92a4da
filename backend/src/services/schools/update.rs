use crate::db;
use crate::error::ApiError;
use crate::services::auth;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::school::SchoolSummary;
use common::requests::UpdateSchoolRequest;

pub async fn process(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateSchoolRequest>,
) -> Result<HttpResponse, ApiError> {
    auth::require_token(&state, &req).await?;

    let school_id = path.into_inner();
    let body = payload.into_inner();

    let conn = state.db()?;
    let school = db::get_school(&conn, &school_id)?
        .ok_or_else(|| ApiError::NotFound("School not found".to_string()))?;

    let name = body.name.unwrap_or(school.name);
    let aff_no = body.aff_no.or(school.aff_no);
    db::update_school(&conn, &school_id, &name, aff_no.as_deref())?;

    Ok(HttpResponse::Ok().json(SchoolSummary {
        id: school_id,
        name,
        aff_no,
        group_photo: school.group_photo,
    }))
}
