use super::{AlwaysMatch, Matcher};
use crate::db;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::model::verification::VerificationState;
use common::requests::VerifyRequest;
use log::warn;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<VerifyRequest>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();
    let request = payload.into_inner();

    let conn = state.db()?;
    let student = db::get_student(&conn, &student_id)?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;
    let school = db::get_school(&conn, &request.school_id)?
        .ok_or_else(|| ApiError::NotFound("School not found".to_string()))?;

    let captured = request
        .captured_image
        .as_deref()
        .and_then(decode_captured_image);

    let result = AlwaysMatch.verify(
        &student,
        &school,
        captured.as_ref().map(|(bytes, _)| bytes.as_slice()),
    );

    let image_ref = captured.and_then(|(bytes, ext)| {
        match state
            .blob_store()
            .store_bytes("verification-captures", &ext, &bytes)
        {
            Ok(rel) => Some(rel),
            // Losing the capture never blocks the verdict.
            Err(e) => {
                warn!(
                    "failed to store captured image for student {}: {}",
                    student_id, e
                );
                None
            }
        }
    });

    let verified_at = chrono::Utc::now().to_rfc3339();
    db::set_verification(&conn, &student_id, result, image_ref.as_deref(), &verified_at)?;

    let (label, message) = match result {
        VerificationState::Success => ("success", "Verification successful."),
        _ => ("failed", "Verification failed."),
    };
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": label, "message": message })))
}

/// Accepts either a raw base64 payload or a `data:<mime>;base64,<data>` URI
/// and returns the decoded bytes with a file-extension guess.
fn decode_captured_image(payload: &str) -> Option<(Vec<u8>, String)> {
    let (ext, data) = match payload.split_once(";base64,") {
        Some((header, data)) => {
            let ext: String = header
                .strip_prefix("data:image/")
                .unwrap_or("png")
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            let ext = if ext.is_empty() { "png".to_string() } else { ext };
            (ext, data)
        }
        None => ("png".to_string(), payload),
    };
    match STANDARD.decode(data.trim()) {
        Ok(bytes) => Some((bytes, ext)),
        Err(e) => {
            warn!("captured image payload is not valid base64: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_data_uris_and_raw_base64() {
        let (bytes, ext) = decode_captured_image("data:image/jpeg;base64,aGVsbG8=").expect("uri");
        assert_eq!(bytes, b"hello");
        assert_eq!(ext, "jpeg");

        let (bytes, ext) = decode_captured_image("aGVsbG8=").expect("raw");
        assert_eq!(bytes, b"hello");
        assert_eq!(ext, "png");
    }

    #[test]
    fn invalid_payloads_are_dropped() {
        assert!(decode_captured_image("not base64!!").is_none());
    }
}
