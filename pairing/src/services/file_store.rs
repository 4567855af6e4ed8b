//! JSON file backend
//!
//! Writes go to a sibling temporary file that is flushed, synced and then
//! renamed over the target, so readers only ever see a complete document.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{PairingError, PairingResult};
use crate::traits::DocumentStore;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> PairingResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PairingError::storage("read", &self.path, e)),
        }
    }

    async fn save(&self, contents: &str) -> PairingResult<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| PairingError::storage("create directory", dir, e))?;
        }

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp)
            .await
            .map_err(|e| PairingError::storage("create", &temp, e))?;
        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| PairingError::storage("write", &temp, e))?;
        file.flush()
            .await
            .map_err(|e| PairingError::storage("flush", &temp, e))?;
        file.sync_all()
            .await
            .map_err(|e| PairingError::storage("sync", &temp, e))?;
        drop(file);

        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| PairingError::storage("rename", &self.path, e))?;

        tracing::debug!(store = %self.path.display(), bytes = contents.len(), "💽 Document written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
