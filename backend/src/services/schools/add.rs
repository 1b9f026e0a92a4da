use crate::db;
use crate::error::ApiError;
use crate::roster;
use crate::services::auth;
use crate::sheet;
use crate::state::AppState;
use crate::storage::file_ext;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::school::RosterSummary;
use futures_util::StreamExt;
use log::warn;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Streamed multipart payload of `POST /api/school`: the roster sheet lands
/// in a uniquely named temp file, the optional group photo goes straight to
/// the blob store.
#[derive(Default)]
struct RosterUpload {
    sheet_path: Option<PathBuf>,
    photo_ref: Option<String>,
}

pub async fn process(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    auth::require_token(&state, &req).await?;

    let mut upload = RosterUpload::default();
    if let Err(e) = receive_upload(&state, payload, &mut upload).await {
        if let Some(path) = &upload.sheet_path {
            remove_temp_sheet(path);
        }
        return Err(e);
    }

    let sheet_path = upload
        .sheet_path
        .ok_or_else(|| ApiError::Validation("Roster file is required".to_string()))?;

    let db_path = state.config.db_path.clone();
    let photo_ref = upload.photo_ref;
    let sheet = sheet_path.clone();
    let result = tokio::task::spawn_blocking(move || ingest_sheet(&db_path, &sheet, photo_ref))
        .await
        .map_err(|e| ApiError::Upstream(format!("Ingestion task failed: {}", e)));

    // The uploaded sheet is transient; remove it whether ingestion
    // succeeded or not.
    remove_temp_sheet(&sheet_path);

    let summary = result??;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "School and students added successfully",
        "school": summary,
    })))
}

fn ingest_sheet(
    db_path: &Path,
    sheet_path: &Path,
    photo_ref: Option<String>,
) -> Result<RosterSummary, ApiError> {
    let rows = sheet::decode::read_rows(sheet_path)?;
    let mut conn = db::open_db(db_path)?;
    roster::ingest::ingest(&mut conn, &rows, photo_ref)
}

async fn receive_upload(
    state: &AppState,
    mut payload: Multipart,
    upload: &mut RosterUpload,
) -> Result<(), ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                if !filename.ends_with(".csv") {
                    return Err(ApiError::Validation(
                        "Roster file must be a .csv spreadsheet".to_string(),
                    ));
                }

                let dir = state.config.uploads_dir.join("tmp");
                fs::create_dir_all(&dir)?;
                let path = dir.join(format!("{}.csv", Uuid::new_v4()));
                let mut writer = BufWriter::new(File::create(&path)?);
                upload.sheet_path = Some(path);
                while let Some(chunk) = field.next().await {
                    writer.write_all(&chunk?)?;
                }
                writer.flush()?;
            }
            Some("image") => {
                let ext = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| file_ext(f).to_string()))
                    .unwrap_or_default();
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                match state.blob_store().store_bytes("group-photos", &ext, &bytes) {
                    Ok(rel) => upload.photo_ref = Some(rel),
                    // A failed photo save never blocks the roster itself.
                    Err(e) => warn!("failed to store group photo: {}", e),
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn remove_temp_sheet(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("failed to delete uploaded roster {}: {}", path.display(), e);
    }
}
