use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

/// Trimmed-down file row embedded in project listings.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FileSummary {
    pub id: Uuid,
    #[serde(skip)]
    pub project_id: Uuid,
    pub filename: String,
    pub file_type: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}
