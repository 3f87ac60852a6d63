//! JSON-file backed durable store

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::ports::DurableStore;

const STORAGE_FILE: &str = "storage.json";

/// Keeps every key in one JSON object under the data directory.
///
/// The file is read on each access and rewritten on each change; the
/// playlist record is two small keys so this stays cheap.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORAGE_FILE),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_raw(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match self.read_raw().await? {
            None => Ok(BTreeMap::new()),
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("corrupt store file {}", self.path.display())),
        }
    }

    /// Like `load`, but a corrupt document is discarded so writes can
    /// bring the store back to a usable state. The flag is set when that
    /// happened and the file needs rewriting.
    async fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        let Some(content) = self.read_raw().await? else {
            return Ok((BTreeMap::new(), false));
        };
        match serde_json::from_str(&content) {
            Ok(items) => Ok((items, false)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is corrupt, starting from an empty store"
                );
                Ok((BTreeMap::new(), true))
            }
        }
    }

    /// Writes a sibling temp file and renames it over the store file, so a
    /// crash mid-write leaves either the old or the new document.
    async fn save(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))
    }
}

#[async_trait::async_trait]
impl DurableStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.load().await?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut items, _) = self.load_for_write().await?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items).await?;
        tracing::trace!(key, bytes = value.len(), "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut items, discarded) = self.load_for_write().await?;
        // A discarded file is rewritten even if the key was not in it
        if items.remove(key).is_some() || discarded {
            self.save(&items).await?;
            tracing::trace!(key, "Removed item");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get_item("@tracks").await.unwrap(), None);
        // Removing from a store that was never written is fine
        store.remove_item("@tracks").await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.set_item("@currentIndex", "3").await.unwrap();
        store.set_item("@tracks", "[]").await.unwrap();
        assert_eq!(store.get_item("@currentIndex").await.unwrap().as_deref(), Some("3"));

        store.remove_item("@currentIndex").await.unwrap();
        assert_eq!(store.get_item("@currentIndex").await.unwrap(), None);
        assert_eq!(store.get_item("@tracks").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).set_item("k", "v").await.unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get_item("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORAGE_FILE), "{not json").unwrap();

        let store = FileStore::new(dir.path());
        assert!(store.get_item("k").await.is_err());
    }

    #[tokio::test]
    async fn writes_recover_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORAGE_FILE), "{\"@tracks\": \"[{\\\"id").unwrap();
        let store = FileStore::new(dir.path());

        store.set_item("@currentIndex", "0").await.unwrap();

        assert_eq!(store.get_item("@currentIndex").await.unwrap().as_deref(), Some("0"));
        assert_eq!(store.get_item("@tracks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_rewrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORAGE_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path());

        store.remove_item("@tracks").await.unwrap();

        assert_eq!(store.get_item("@tracks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set_item("k", "v").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![STORAGE_FILE.to_string()]);
    }
}
