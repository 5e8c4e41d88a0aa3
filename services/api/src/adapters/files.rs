//! services/api/src/adapters/files.rs
//!
//! Local-filesystem implementation of the `BlobStore` port. Uploaded images
//! live under a fixed root directory; keys are relative paths within it.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use fitness_core::ports::{BlobStore, PortError, PortResult};
use uuid::Uuid;

/// A blob store that writes uploads to a directory on the local disk and
/// serves them back through a static-file URL prefix.
#[derive(Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    /// Creates a new `LocalBlobStore` rooted at `root`, creating the
    /// directory if it does not exist yet.
    pub async fn new(root: PathBuf, public_base_url: String) -> PortResult<Self> {
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| PortError::Unexpected(format!("cannot create uploads dir: {e}")))?;
        Ok(Self {
            root,
            public_base_url,
        })
    }

    /// Resolves a blob key against the root, refusing any key whose path
    /// components would escape it (absolute paths, `..` segments).
    fn resolve(&self, key: &str) -> PortResult<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative.components().any(|c| {
            !matches!(c, Component::Normal(_) | Component::CurDir)
        });
        if key.is_empty() || escapes {
            return Err(PortError::Unexpected(format!(
                "blob key {key:?} escapes the uploads root"
            )));
        }
        Ok(self.root.join(relative))
    }
}

/// Keeps only filename characters that are safe to embed in a path and a URL.
fn sanitize_name(original: &str) -> String {
    let cleaned: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> PortResult<String> {
        // Prefix with a fresh id so concurrent uploads of the same filename
        // never collide.
        let key = format!("{}_{}", Uuid::new_v4(), sanitize_name(original_name));
        let path = self.resolve(&key)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| PortError::Unexpected(format!("cannot write upload {key:?}: {e}")))?;
        Ok(key)
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone counts as success.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Unexpected(format!(
                "cannot remove blob {key:?}: {e}"
            ))),
        }
    }

    fn url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}
