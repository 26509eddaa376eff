//! Attachment storage on the local filesystem.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use sitekit_core::config::upload::UploadConfig;
use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;

/// Stores uploaded attachments under a configured root directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    /// Create a store rooted at the configured directory, creating it if
    /// needed.
    pub async fn new(config: &UploadConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            max_bytes: config.max_bytes,
        })
    }

    /// Maximum accepted attachment size in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Persist an attachment, returning its path relative to the root.
    ///
    /// Filenames are sanitized and prefixed with a fresh id so uploads
    /// can never collide or escape the root.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("Attachment is empty"));
        }
        if data.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "Attachment exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let relative = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        let full_path = self.root.join(&relative);

        fs::write(&full_path, data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to write attachment", e)
        })?;

        debug!(path = %relative, bytes = data.len(), "Stored attachment");
        Ok(relative)
    }

    /// Resolve a stored relative path for download, rejecting anything
    /// that would escape the root.
    pub fn resolve(&self, relative: &str) -> AppResult<PathBuf> {
        let candidate = Path::new(relative);
        if candidate.is_absolute()
            || candidate
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(AppError::validation("Invalid attachment path"));
        }
        Ok(self.root.join(candidate))
    }
}

/// Strip path separators and control characters from a client-supplied
/// filename, keeping a recognisable suffix.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(['_', '.']).to_string();
    if trimmed.is_empty() {
        "attachment".to_string()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("brief v2.pdf"), "brief_v2.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("///"), "attachment");
    }

    #[tokio::test]
    async fn test_store_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(&UploadConfig {
            root: dir.path().to_string_lossy().into_owned(),
            max_bytes: 1024,
        })
        .await
        .unwrap();

        let relative = store.store("brief.pdf", b"hello").await.unwrap();
        assert!(relative.ends_with("brief.pdf"));

        let full = store.resolve(&relative).unwrap();
        assert_eq!(tokio::fs::read(full).await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(&UploadConfig {
            root: dir.path().to_string_lossy().into_owned(),
            max_bytes: 4,
        })
        .await
        .unwrap();

        assert!(store.store("big.bin", b"too big").await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(&UploadConfig {
            root: dir.path().to_string_lossy().into_owned(),
            max_bytes: 1024,
        })
        .await
        .unwrap();

        assert!(store.resolve("../secret").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
    }
}
