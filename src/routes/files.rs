use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::storage;

const ALLOWED_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.ms-powerpoint",
    "image/jpeg",
    "image/png",
    "image/jpg",
];

/// The route-level body cap fires before the handler ever runs; a breached
/// cap is still a validation failure to the client, not 413.
pub async fn oversized_as_bad_request(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    if resp.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::BadRequest("File too large.".to_string()).into_response();
    }
    resp
}

struct UploadedFile {
    filename: String,
    content_type: String,
    data: Bytes,
}

/// Pull the `file` part and `projectId` field out of a multipart body.
async fn parse_upload(
    headers: &HeaderMap,
    body: Bytes,
) -> Result<(Option<UploadedFile>, Option<String>), AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected multipart form data".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut file = None;
    let mut project_id = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("File read error: {e}")))?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            Some("projectId") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?;
                project_id = Some(value);
            }
            _ => {}
        }
    }

    Ok((file, project_id))
}

pub async fn upload(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (file, project_id) = parse_upload(&headers, body).await?;

    let file = file.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let project_id = project_id
        .ok_or_else(|| AppError::BadRequest("Project ID is required".to_string()))?
        .parse::<Uuid>()
        .map_err(|_| AppError::BadRequest("Invalid project ID".to_string()))?;

    let project = db::projects::find_by_id(&state.pool, project_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    // Validate before anything touches the content store
    if !ALLOWED_TYPES.contains(&file.content_type.as_str()) {
        return Err(AppError::BadRequest(
            "Invalid file type. Only PDF, DOCX, PPTX, JPG, PNG files are allowed.".to_string(),
        ));
    }

    if file.data.len() > state.config.max_upload_size {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes.",
            state.config.max_upload_size
        )));
    }

    let key = storage::storage_key(&file.filename);
    let size = file.data.len() as i64;
    state
        .storage
        .put(&key, file.data)
        .await
        .map_err(AppError::Internal)?;

    let record = db::files::create(
        &state.pool,
        project.id,
        auth.user_id,
        &file.filename,
        &file.content_type,
        size,
        &storage::file_url(&key),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "File uploaded successfully",
            "file": record,
        })),
    ))
}

pub async fn list_by_project(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    db::projects::find_by_id(&state.pool, project_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let files = db::files::list_by_project(&state.pool, project_id, auth.user_id).await?;
    Ok(Json(json!({ "files": files })))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(file_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let file = db::files::find_by_id(&state.pool, file_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    // A missing binary must not strand the metadata row
    if let Some(key) = storage::key_from_url(&file.file_url) {
        if let Err(e) = state.storage.delete(key).await {
            tracing::warn!("Could not delete stored file {key}: {e}");
        }
    }

    db::files::delete(&state.pool, file_id, auth.user_id).await?;

    Ok(Json(json!({ "message": "File deleted successfully" })))
}
