use crate::db;
use crate::error::ApiError;
use crate::roster::export::{export_filename, profile_rows, COLUMNS, SHEET_NAME, XLSX_CONTENT_TYPE};
use crate::sheet;
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let school_id = path.into_inner();
    let conn = state.db()?;
    let school = db::get_school(&conn, &school_id)?;
    let students = db::students_by_school(&conn, &school_id)?;

    let school_name = school.as_ref().map(|s| s.name.as_str());
    let rows = profile_rows(school_name, &students);
    let workbook = sheet::encode::write_workbook(SHEET_NAME, &COLUMNS, &rows)?;

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_filename(school_name)),
        ))
        .body(workbook))
}
