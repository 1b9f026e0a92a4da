use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::{AuthResponse, Credentials, UserInfo};
use uuid::Uuid;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    let creds = payload.into_inner();
    if creds.username.trim().is_empty() || creds.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let conn = state.db()?;
    if db::find_user(&conn, &creds.username)?.is_some() {
        return Err(ApiError::Validation("Username already exists".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    db::insert_user(&conn, &id, &creds.username, &super::hash_password(&creds.password))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "User registered successfully".to_string(),
        token: None,
        user: Some(UserInfo {
            id,
            username: creds.username,
        }),
    }))
}
