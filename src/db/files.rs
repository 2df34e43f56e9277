use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FileSummary, ProjectFile};

pub async fn create(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    filename: &str,
    file_type: &str,
    file_size: i64,
    file_url: &str,
) -> Result<ProjectFile, sqlx::Error> {
    sqlx::query_as::<_, ProjectFile>(
        "INSERT INTO project_files (project_id, user_id, filename, file_type, file_size, file_url)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(filename)
    .bind(file_type)
    .bind(file_size)
    .bind(file_url)
    .fetch_one(pool)
    .await
}

pub async fn list_by_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<ProjectFile>, sqlx::Error> {
    sqlx::query_as::<_, ProjectFile>(
        "SELECT * FROM project_files WHERE project_id = $1 AND user_id = $2
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Summaries for every file under any of the user's projects, used to
/// assemble the project list in one query.
pub async fn summaries_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<FileSummary>, sqlx::Error> {
    sqlx::query_as::<_, FileSummary>(
        "SELECT id, project_id, filename, file_type, file_size, created_at
         FROM project_files WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<ProjectFile>, sqlx::Error> {
    sqlx::query_as::<_, ProjectFile>("SELECT * FROM project_files WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM project_files WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
