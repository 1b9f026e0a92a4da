use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = state.db()?;
    let schools = db::list_schools(&conn)?;
    Ok(HttpResponse::Ok().json(schools))
}
