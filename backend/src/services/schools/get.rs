use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::school::SchoolSummary;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = state.db()?;
    let school = db::get_school(&conn, &path.into_inner())?
        .ok_or_else(|| ApiError::NotFound("School not found".to_string()))?;

    Ok(HttpResponse::Ok().json(SchoolSummary {
        id: school.id,
        name: school.name,
        aff_no: school.aff_no,
        group_photo: school.group_photo,
    }))
}
