use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::file_ext;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;

pub async fn process(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut stored = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("image") {
            continue;
        }

        let ext = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| file_ext(f).to_string()))
            .unwrap_or_default();
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }
        stored = Some(state.blob_store().store_bytes("face-images", &ext, &bytes)?);
    }

    let image_url = stored
        .ok_or_else(|| ApiError::Validation("An image file is required".to_string()))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "imageUrl": format!("/{image_url}") })))
}
