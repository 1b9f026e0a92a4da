use crate::error::ApiError;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Local blob store rooted at the configured uploads directory.
///
/// Every stored object gets a fresh uuid name, so storing the same bytes
/// twice yields two distinct objects; deduplication is the caller's concern.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: PathBuf) -> Self {
        BlobStore { root }
    }

    /// Writes `bytes` under `<root>/<folder>/` and returns the relative path
    /// used for static serving, always forward-slashed.
    pub fn store_bytes(&self, folder: &str, ext: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir)?;
        let name = if ext.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            format!("{}.{}", Uuid::new_v4(), ext)
        };
        fs::write(dir.join(&name), bytes)?;
        Ok(normalize_rel_path(&format!("uploads/{folder}/{name}")))
    }

    /// Best-effort removal of a previously stored object; failures are
    /// logged, never surfaced.
    pub fn remove(&self, rel_path: &str) {
        let rel = rel_path.trim_start_matches("uploads/");
        let full = self.root.join(rel);
        if full.exists() {
            if let Err(e) = fs::remove_file(&full) {
                warn!("failed to delete stored object {}: {}", rel_path, e);
            }
        }
    }
}

/// Canonicalizes a stored-object path for serving: backslashes become
/// forward slashes and leading dots/separators are stripped.
pub fn normalize_rel_path(path: &str) -> String {
    path.replace('\\', "/")
        .trim_start_matches(['.', '/'])
        .to_string()
}

/// File extension of an uploaded filename, without the dot.
pub fn file_ext(name: &str) -> &str {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_separators_and_backslashes() {
        assert_eq!(
            normalize_rel_path(".\\uploads\\photos\\x.jpg"),
            "uploads/photos/x.jpg"
        );
        assert_eq!(normalize_rel_path("./uploads/x.jpg"), "uploads/x.jpg");
        assert_eq!(normalize_rel_path("/uploads/x.jpg"), "uploads/x.jpg");
        assert_eq!(normalize_rel_path("uploads/x.jpg"), "uploads/x.jpg");
    }

    #[test]
    fn store_bytes_creates_distinct_objects() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = BlobStore::new(dir.path().to_path_buf());

        let first = store.store_bytes("photos", "png", b"abc").expect("store");
        let second = store.store_bytes("photos", "png", b"abc").expect("store");

        assert_ne!(first, second);
        assert!(first.starts_with("uploads/photos/"));
        assert!(first.ends_with(".png"));

        let on_disk = dir.path().join(first.trim_start_matches("uploads/"));
        assert_eq!(fs::read(on_disk).expect("read back"), b"abc");
    }

    #[test]
    fn remove_is_silent_for_missing_objects() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = BlobStore::new(dir.path().to_path_buf());
        store.remove("uploads/photos/gone.png");

        let stored = store.store_bytes("photos", "png", b"abc").expect("store");
        store.remove(&stored);
        assert!(!dir.path().join(stored.trim_start_matches("uploads/")).exists());
    }

    #[test]
    fn file_ext_handles_missing_extension() {
        assert_eq!(file_ext("photo.JPG"), "JPG");
        assert_eq!(file_ext("photo"), "");
    }
}
