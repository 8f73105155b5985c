//! In-memory file storage resolving identifiers to `/files/{id}` URLs.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use uuid::Uuid;

use mercato_catalog::store::{FileStorage, StoredFile};
use mercato_core::StoreError;

/// In-memory `FileStorage`.
///
/// Identifiers are UUIDv7-based, keeping the original file extension so the
/// serving layer can guess a content type when none was recorded.
#[derive(Debug, Default)]
pub struct InMemoryFileStorage {
    entries: RwLock<HashMap<String, StoredFile>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileStorage for InMemoryFileStorage {
    fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError> {
        let id = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{ext}", Uuid::now_v7()),
            None => Uuid::now_v7().to_string(),
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::unavailable("file table lock poisoned"))?;
        entries.insert(
            id.clone(),
            StoredFile {
                content_type: content_type.map(str::to_string),
                bytes,
            },
        );
        tracing::debug!(id = %id, original = original_name, "file stored");
        Ok(id)
    }

    fn url_for(&self, id: &str) -> String {
        format!("/files/{id}")
    }

    fn retrieve(&self, id: &str) -> Result<Option<StoredFile>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::unavailable("file table lock poisoned"))?;
        Ok(entries.get(id).cloned())
    }
}
