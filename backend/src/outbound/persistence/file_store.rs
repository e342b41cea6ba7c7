//! File-backed collection storage.
//!
//! Each collection is one JSON file, `<key>.json`, inside a directory opened
//! through `cap_std` so the adapter can never escape its data directory.
//! Writes go through a temp file and rename so a crash mid-write leaves the
//! previous blob intact.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::fs::{Dir, OpenOptions};
use cap_std::ambient_authority;

use crate::domain::ports::{CollectionStore, StorageError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Collection store persisting blobs as JSON files in a single directory.
#[derive(Debug)]
pub struct FileCollectionStore {
    dir: Dir,
}

impl FileCollectionStore {
    /// Open the store over `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|err| StorageError::io(err.to_string()))?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())
            .map_err(|err| StorageError::io(err.to_string()))?;
        Ok(Self { dir })
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }

    fn write_atomic(&self, name: &str, value: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{}.tmp.{}.{}", name, std::process::id(), counter);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self.dir.open_with(&tmp_name, &options)?;
        if let Err(err) = file.write_all(value.as_bytes()).and_then(|()| file.sync_all()) {
            drop(file);
            drop(self.dir.remove_file(&tmp_name));
            return Err(err);
        }
        if let Err(err) = self.dir.rename(&tmp_name, &self.dir, name) {
            drop(self.dir.remove_file(&tmp_name));
            return Err(err);
        }
        Ok(())
    }
}

impl CollectionStore for FileCollectionStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_atomic(&Self::file_name(key), value)
            .map_err(|err| StorageError::io(err.to_string()))
    }
}
