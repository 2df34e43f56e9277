use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::generate;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "projectId")]
    pub project_id: Option<Uuid>,
    #[serde(rename = "additionalNotes")]
    pub additional_notes: Option<String>,
}

/// Kick off generation for a project. The response returns immediately with
/// status `generating`; a detached task drives the record to `completed` or
/// `failed`.
pub async fn start(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Value>, AppError> {
    let project_id = req
        .project_id
        .ok_or_else(|| AppError::BadRequest("No project ID provided".to_string()))?;

    let project = db::projects::find_by_id(&state.pool, project_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let files = db::files::list_by_project(&state.pool, project_id, auth.user_id).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest(
            "No files found for this project".to_string(),
        ));
    }

    let video = db::videos::upsert_generating(
        &state.pool,
        project_id,
        auth.user_id,
        req.additional_notes.as_deref(),
    )
    .await?;

    generate::spawn_completion(
        state.pool.clone(),
        state.generator.clone(),
        video.id,
        project,
        files,
        req.additional_notes,
    );

    Ok(Json(json!({
        "videoId": video.id,
        "status": video.status,
        "message": "Video generation started successfully",
    })))
}

/// Poll the generation status. Absence of a record (including after the
/// project itself is gone) is a valid state, not an error.
pub async fn status(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let video = db::videos::find_by_project(&state.pool, project_id, auth.user_id).await?;
    Ok(Json(json!({ "video": video })))
}
