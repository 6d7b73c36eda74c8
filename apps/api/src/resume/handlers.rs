use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::{build_import, ResumeFile, ResumeImport, MAX_RESUME_BYTES};
use crate::state::AppState;

/// POST /api/v1/resumes/import
/// Multipart fields: `user_id`, `file`, and optionally `job_role`.
pub async fn handle_import_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeImport>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file: Option<ResumeFile> = None;
    let mut job_role = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable user_id: {e}")))?;
                let parsed = Uuid::parse_str(raw.trim())
                    .map_err(|_| AppError::Validation(format!("'{raw}' is not a valid user_id")))?;
                user_id = Some(parsed);
            }
            Some("job_role") => {
                job_role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable job_role: {e}")))?
                    .trim()
                    .to_string();
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable file: {e}")))?;
                file = Some(ResumeFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
    let file = file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    if file.bytes.is_empty() {
        return Err(AppError::Validation("file is empty".to_string()));
    }
    if file.bytes.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation("file must be under 10MB".to_string()));
    }

    info!(
        "Importing résumé '{}' ({} bytes) for user {user_id}",
        file.file_name,
        file.bytes.len()
    );
    let parsed = state.resume_parser.parse(user_id, &file).await?;
    Ok(Json(build_import(parsed, &job_role)))
}
