//! In-memory backend for tests and storage-less runs

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::PairingResult;
use crate::traits::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, e.g. to simulate a restart
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> PairingResult<Option<String>> {
        Ok(self.contents.lock().await.clone())
    }

    async fn save(&self, contents: &str) -> PairingResult<()> {
        *self.contents.lock().await = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
