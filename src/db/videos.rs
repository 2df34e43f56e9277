use sqlx::PgPool;
use uuid::Uuid;

use crate::models::video::{STATUS_COMPLETED, STATUS_FAILED, STATUS_GENERATING};
use crate::models::{ProjectVideo, VideoSummary};

pub async fn find_by_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
) -> Result<Option<ProjectVideo>, sqlx::Error> {
    sqlx::query_as::<_, ProjectVideo>(
        "SELECT * FROM project_videos WHERE project_id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Summaries for every video under any of the user's projects.
pub async fn summaries_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<VideoSummary>, sqlx::Error> {
    sqlx::query_as::<_, VideoSummary>(
        "SELECT id, project_id, status, video_url, created_at
         FROM project_videos WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Create-or-reset the one video row a project may have. A re-trigger while
/// a previous run is still in flight resets the record and the later
/// completion write wins.
pub async fn upsert_generating(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    additional_notes: Option<&str>,
) -> Result<ProjectVideo, sqlx::Error> {
    sqlx::query_as::<_, ProjectVideo>(
        "INSERT INTO project_videos (project_id, user_id, status, additional_notes)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (project_id) DO UPDATE
         SET status = $3, additional_notes = $4,
             video_url = NULL, generated_at = NULL, updated_at = now()
         RETURNING *",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(STATUS_GENERATING)
    .bind(additional_notes)
    .fetch_one(pool)
    .await
}

pub async fn mark_completed(pool: &PgPool, id: Uuid, video_url: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE project_videos
         SET status = $2, video_url = $3, generated_at = now(), updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(STATUS_COMPLETED)
    .bind(video_url)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn mark_failed(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE project_videos
         SET status = $2, updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(STATUS_FAILED)
    .execute(pool)
    .await?;
    Ok(())
}
