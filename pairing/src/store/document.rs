//! Lock-guarded JSON document mirrored to a `DocumentStore`
//!
//! Mutations run against a copy of the live state. The copy is persisted
//! first and only replaces the live state once the write succeeded, so a
//! failed write leaves memory and storage on the same snapshot.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::PairingResult;
use crate::traits::DocumentStore;

/// Whether a mutation touched the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<R> {
    /// Nothing changed; no write happens
    Unchanged(R),
    /// The draft must be persisted and committed
    Changed(R),
}

pub struct PersistentDocument<T, S> {
    state: Mutex<T>,
    storage: S,
}

impl<T, S> PersistentDocument<T, S>
where
    T: Serialize + DeserializeOwned + Default + Clone + Send,
    S: DocumentStore,
{
    /// Load the document, falling back to an empty one if it is missing or unreadable
    ///
    /// A corrupt document is logged and replaced on the next successful
    /// write; its previous contents are lost.
    pub async fn open(storage: S) -> Self {
        let location = storage.describe();
        let state = match storage.load().await {
            Ok(Some(contents)) => match serde_json::from_str::<T>(&contents) {
                Ok(document) => {
                    tracing::debug!(store = %location, "📂 Loaded document");
                    document
                }
                Err(e) => {
                    tracing::error!(store = %location, error = %e, "❌ Document is corrupt, starting empty");
                    T::default()
                }
            },
            Ok(None) => {
                tracing::debug!(store = %location, "📂 No document yet, starting empty");
                T::default()
            }
            Err(e) => {
                tracing::error!(store = %location, error = %e, "❌ Document unreadable, starting empty");
                T::default()
            }
        };

        Self {
            state: Mutex::new(state),
            storage,
        }
    }

    /// Run a read-only query against the live state
    pub async fn read<R>(&self, query: impl FnOnce(&T) -> R) -> R {
        let state = self.state.lock().await;
        query(&state)
    }

    /// Apply a mutation atomically with respect to every other caller
    ///
    /// The lock is held across the check, the write and the commit.
    pub async fn update<R>(&self, mutation: impl FnOnce(&mut T) -> Change<R>) -> PairingResult<R> {
        let mut state = self.state.lock().await;
        let mut draft = state.clone();

        match mutation(&mut draft) {
            Change::Unchanged(result) => Ok(result),
            Change::Changed(result) => {
                let contents = serde_json::to_string_pretty(&draft)?;
                self.storage.save(&contents).await?;
                *state = draft;
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairingError;
    use crate::traits::MockDocumentStore;
    use std::collections::BTreeMap;

    type Counters = BTreeMap<String, u32>;

    fn storage_with(contents: Option<&'static str>) -> MockDocumentStore {
        let mut storage = MockDocumentStore::new();
        storage
            .expect_load()
            .returning(move || Ok(contents.map(str::to_string)));
        storage.expect_describe().returning(|| "mock".to_string());
        storage
    }

    #[tokio::test]
    async fn test_open_reads_existing_document() {
        let document: PersistentDocument<Counters, _> =
            PersistentDocument::open(storage_with(Some(r#"{"a": 3}"#))).await;

        assert_eq!(document.read(|state| state.get("a").copied()).await, Some(3));
    }

    #[tokio::test]
    async fn test_open_treats_corrupt_document_as_empty() {
        let document: PersistentDocument<Counters, _> =
            PersistentDocument::open(storage_with(Some("{not json"))).await;

        assert!(document.read(|state| state.is_empty()).await);
    }

    #[tokio::test]
    async fn test_open_treats_load_failure_as_empty() {
        let mut storage = MockDocumentStore::new();
        storage.expect_load().returning(|| {
            Err(PairingError::StorageUnavailable {
                message: "disk gone".to_string(),
            })
        });
        storage.expect_describe().returning(|| "mock".to_string());

        let document: PersistentDocument<Counters, _> = PersistentDocument::open(storage).await;

        assert!(document.read(|state| state.is_empty()).await);
    }

    #[tokio::test]
    async fn test_unchanged_mutation_skips_write() {
        let mut storage = storage_with(None);
        storage.expect_save().times(0);
        let document: PersistentDocument<Counters, _> = PersistentDocument::open(storage).await;

        let result = document.update(|_| Change::Unchanged(42)).await.unwrap();

        assert_eq!(result, 42);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_state() {
        let mut storage = storage_with(Some(r#"{"a": 1}"#));
        storage.expect_save().times(1).returning(|_| {
            Err(PairingError::StorageUnavailable {
                message: "read-only".to_string(),
            })
        });
        let document: PersistentDocument<Counters, _> = PersistentDocument::open(storage).await;

        let result = document
            .update(|state| {
                state.insert("a".to_string(), 2);
                Change::Changed(())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(document.read(|state| state["a"]).await, 1);
    }

    #[tokio::test]
    async fn test_successful_write_persists_pretty_json() {
        let mut storage = storage_with(None);
        storage
            .expect_save()
            .withf(|contents| contents.contains("\"b\": 5"))
            .times(1)
            .returning(|_| Ok(()));
        let document: PersistentDocument<Counters, _> = PersistentDocument::open(storage).await;

        document
            .update(|state| {
                state.insert("b".to_string(), 5);
                Change::Changed(())
            })
            .await
            .unwrap();

        assert_eq!(document.read(|state| state["b"]).await, 5);
    }
}
