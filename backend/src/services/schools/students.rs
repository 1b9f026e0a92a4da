use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = state.db()?;
    let students = db::students_by_school(&conn, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(students))
}
