use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::file::{FileSummary, ProjectFile};
use crate::models::video::{ProjectVideo, VideoSummary};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project joined with file and video summaries, as returned by the list
/// endpoint.
#[derive(Debug, Serialize)]
pub struct ProjectOverview {
    #[serde(flatten)]
    pub project: Project,
    pub files: Vec<FileSummary>,
    pub video: Option<VideoSummary>,
}

/// Project with all relations, as returned by the single-project endpoint.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub files: Vec<ProjectFile>,
    pub video: Option<ProjectVideo>,
}
