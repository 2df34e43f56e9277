use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{FileSummary, ProjectDetail, ProjectOverview, VideoSummary};
use crate::state::SharedState;
use crate::storage;

#[derive(Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let projects = db::projects::list(&state.pool, auth.user_id).await?;
    let files = db::files::summaries_for_user(&state.pool, auth.user_id).await?;
    let videos = db::videos::summaries_for_user(&state.pool, auth.user_id).await?;

    let mut files_by_project: HashMap<Uuid, Vec<FileSummary>> = HashMap::new();
    for file in files {
        files_by_project.entry(file.project_id).or_default().push(file);
    }
    let mut videos_by_project: HashMap<Uuid, VideoSummary> = videos
        .into_iter()
        .map(|v| (v.project_id, v))
        .collect();

    let overviews: Vec<ProjectOverview> = projects
        .into_iter()
        .map(|project| ProjectOverview {
            files: files_by_project.remove(&project.id).unwrap_or_default(),
            video: videos_by_project.remove(&project.id),
            project,
        })
        .collect();

    Ok(Json(json!({ "projects": overviews })))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let files = db::files::list_by_project(&state.pool, project.id, auth.user_id).await?;
    let video = db::videos::find_by_project(&state.pool, project.id, auth.user_id).await?;

    let detail = ProjectDetail {
        project,
        files,
        video,
    };
    Ok(Json(json!({ "project": detail })))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateProject>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let project = db::projects::create(
        &state.pool,
        auth.user_id,
        title,
        req.description.as_deref().map(str::trim),
        req.subject.as_deref().map(str::trim),
    )
    .await?;

    let detail = ProjectDetail {
        project,
        files: Vec::new(),
        video: None,
    };
    Ok((StatusCode::CREATED, Json(json!({ "project": detail }))))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProject>,
) -> Result<Json<Value>, AppError> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }
    }

    db::projects::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    // Omitted description/subject are cleared, not preserved
    let project = db::projects::update(
        &state.pool,
        id,
        auth.user_id,
        req.title.as_deref().map(str::trim),
        req.description.as_deref().map(str::trim),
        req.subject.as_deref().map(str::trim),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("Project not found".to_string()),
        _ => AppError::Database(e),
    })?;

    let files = db::files::list_by_project(&state.pool, project.id, auth.user_id).await?;
    let video = db::videos::find_by_project(&state.pool, project.id, auth.user_id).await?;

    let detail = ProjectDetail {
        project,
        files,
        video,
    };
    Ok(Json(json!({ "project": detail })))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    db::projects::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    // Collect binaries while the rows still exist; the DB cascade below
    // removes the metadata regardless of whether the binaries go away.
    let files = db::files::list_by_project(&state.pool, id, auth.user_id).await?;
    for file in &files {
        if let Some(key) = storage::key_from_url(&file.file_url) {
            if let Err(e) = state.storage.delete(key).await {
                tracing::warn!("Could not delete stored file {key}: {e}");
            }
        }
    }

    let deleted = db::projects::delete(&state.pool, id, auth.user_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(json!({ "message": "Project deleted successfully" })))
}
