use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::{Project, ProjectFile};

/// The content-producing collaborator behind the generation workflow. The
/// status state machine lives in [`spawn_completion`]; implementations only
/// turn source material into a video URL (or fail).
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    async fn generate(
        &self,
        project: &Project,
        files: &[ProjectFile],
        additional_notes: Option<&str>,
    ) -> Result<String, String>;
}

/// Placeholder generator: waits out a fixed delay and yields a canned URL.
/// Stands in for the real media pipeline.
pub struct StubGenerator {
    delay: Duration,
    result_url: String,
}

pub const PLACEHOLDER_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

impl StubGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            result_url: PLACEHOLDER_VIDEO_URL.to_string(),
        }
    }
}

#[async_trait]
impl VideoGenerator for StubGenerator {
    async fn generate(
        &self,
        _project: &Project,
        _files: &[ProjectFile],
        _additional_notes: Option<&str>,
    ) -> Result<String, String> {
        tokio::time::sleep(self.delay).await;
        Ok(self.result_url.clone())
    }
}

/// Drive a video record to its terminal state, detached from the request
/// that started it. Fire-and-forget: no cancellation, and concurrent
/// re-triggers simply race on the row (last write wins).
pub fn spawn_completion(
    pool: PgPool,
    generator: std::sync::Arc<dyn VideoGenerator>,
    video_id: Uuid,
    project: Project,
    files: Vec<ProjectFile>,
    additional_notes: Option<String>,
) {
    tokio::spawn(async move {
        let result = generator
            .generate(&project, &files, additional_notes.as_deref())
            .await;

        let outcome = match result {
            Ok(url) => db::videos::mark_completed(&pool, video_id, &url).await,
            Err(e) => {
                tracing::error!("Video generation failed for {video_id}: {e}");
                db::videos::mark_failed(&pool, video_id).await
            }
        };

        if let Err(e) = outcome {
            tracing::error!("Failed to record generation outcome for {video_id}: {e}");
        }
    });
}
