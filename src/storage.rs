use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

/// Content store for uploaded binaries. Keys are opaque relative names
/// produced by [`storage_key`]; the store decides where they land.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), String>;
    async fn delete(&self, key: &str) -> Result<(), String>;
}

/// Local-disk store backing the `/uploads` static route.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl ContentStore for LocalStore {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| format!("Failed to create upload dir: {e}"))?;
        tokio::fs::write(self.root.join(key), &data)
            .await
            .map_err(|e| format!("Failed to write {key}: {e}"))
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        tokio::fs::remove_file(self.root.join(key))
            .await
            .map_err(|e| format!("Failed to delete {key}: {e}"))
    }
}

/// Derive a collision-resistant storage key for an uploaded file. Pure
/// function of the original filename plus a fresh v7 uuid; only a sanitized
/// extension survives from the client-supplied name.
pub fn storage_key(original_filename: &str) -> String {
    let ext: String = original_filename
        .rsplit_once('.')
        .map(|(_, e)| e)
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect::<String>()
        .to_lowercase();

    let id = Uuid::now_v7();
    if ext.is_empty() {
        id.to_string()
    } else {
        format!("{id}.{ext}")
    }
}

/// Public URL path for a stored key, matching the static file route.
pub fn file_url(key: &str) -> String {
    format!("/uploads/{key}")
}

/// Inverse of [`file_url`], used when deleting a stored binary from its
/// recorded URL.
pub fn key_from_url(file_url: &str) -> Option<&str> {
    file_url.strip_prefix("/uploads/")
}
