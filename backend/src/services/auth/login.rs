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
    let (id, stored_hash) = db::find_user(&conn, &creds.username)?
        .ok_or_else(invalid_credentials)?;
    if super::hash_password(&creds.password) != stored_hash {
        return Err(invalid_credentials());
    }

    let token = Uuid::new_v4().to_string();
    state
        .sessions
        .write()
        .await
        .insert(token.clone(), creds.username.clone());

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token: Some(token),
        user: Some(UserInfo {
            id,
            username: creds.username,
        }),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Auth("Invalid username or password".to_string())
}
