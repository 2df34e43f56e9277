pub mod auth;
pub mod files;
pub mod projects;
pub mod videos;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes(max_upload_size: usize) -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Files
        .route(
            "/api/files/upload",
            post(files::upload)
                // room for multipart framing on top of the file itself
                .layer(DefaultBodyLimit::max(max_upload_size + 64 * 1024))
                .layer(axum::middleware::from_fn(files::oversized_as_bad_request)),
        )
        .route("/api/files/project/{project_id}", get(files::list_by_project))
        .route("/api/files/{file_id}", delete(files::delete))
        // Video generation
        .route("/api/generate-video", post(videos::start))
        .route("/api/video-status/{project_id}", get(videos::status))
        // Health
        .route("/api/health", get(health))
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "OK" }))
}
