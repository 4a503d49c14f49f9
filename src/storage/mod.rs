use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Allowed image extensions
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Maximum file size (10 MB)
const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Opaque upload capability: hand it bytes, get back a URL string.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<String>;
    async fn delete(&self, url_path: &str) -> Result<()>;
}

/// Stores uploads on the local filesystem under a configured directory
/// and returns the relative path (e.g., "uploads/abc123.jpg").
pub struct LocalStorageProvider {
    uploads_dir: String,
}

impl LocalStorageProvider {
    pub fn new(uploads_dir: String) -> Self {
        Self { uploads_dir }
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<String> {
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::Validation("File too large (max 10 MB)".to_string()));
        }

        let extension = filename
            .rsplit('.')
            .next()
            .map(|s| s.to_lowercase())
            .ok_or_else(|| AppError::Validation("Invalid filename".to_string()))?;

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid file type. Allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        let uploads_path = PathBuf::from(&self.uploads_dir);
        fs::create_dir_all(&uploads_path).await.map_err(|e| {
            AppError::Internal(format!("Failed to create uploads directory: {}", e))
        })?;

        let new_filename = format!("{}.{}", Uuid::new_v4(), extension);
        let file_path = uploads_path.join(&new_filename);

        let mut file = fs::File::create(&file_path)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create file: {}", e)))?;

        file.write_all(data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write file: {}", e)))?;

        Ok(format!("{}/{}", self.uploads_dir, new_filename))
    }

    async fn delete(&self, url_path: &str) -> Result<()> {
        // Only process paths under our own uploads directory.
        if !url_path.starts_with(&format!("{}/", self.uploads_dir)) {
            return Ok(());
        }

        let path = PathBuf::from(url_path);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to delete file: {}", e)))?;
        }

        Ok(())
    }
}
