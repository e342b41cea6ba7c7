//! In-memory collection storage for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::ports::{CollectionStore, StorageError};

/// Collection store holding blobs in a process-local map. Data does not
/// survive a restart; used when no data directory is configured.
#[derive(Debug, Default)]
pub struct MemoryCollectionStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl CollectionStore for MemoryCollectionStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let blobs = self.blobs.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut blobs = self
            .blobs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_keys_read_as_none() {
        let store = MemoryCollectionStore::default();
        assert_eq!(store.read("clients"), Ok(None));
    }

    #[test]
    fn writes_replace_the_whole_blob() {
        let store = MemoryCollectionStore::default();
        store.write("clients", "[1]").expect("write");
        store.write("clients", "[2]").expect("write");
        assert_eq!(store.read("clients"), Ok(Some("[2]".to_owned())));
    }
}
