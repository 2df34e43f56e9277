use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status values for a generation run. `completed` and `failed` are
/// terminal; a record in `generating` may be reset back to `generating` by
/// a re-trigger.
pub const STATUS_GENERATING: &str = "generating";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectVideo {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub video_url: Option<String>,
    pub additional_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Trimmed-down video row embedded in project listings.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct VideoSummary {
    pub id: Uuid,
    #[serde(skip)]
    pub project_id: Uuid,
    pub status: String,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
