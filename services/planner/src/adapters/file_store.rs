//! services/planner/src/adapters/file_store.rs
//!
//! File-backed key-value storage: one file per key under a data directory,
//! with raw string contents. This is the stand-in for the original
//! deployment's browser local storage.

use lesson_planner_core::ports::{KeyValueStore, PortError, PortResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A `KeyValueStore` over plain files. Writes go through a temp file and a
/// rename so a crash mid-write never leaves a half-written value behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PortResult<PathBuf> {
        // Keys are fixed short names; anything path-like is a caller bug.
        if key.is_empty() || key.contains('/') || key.contains('\\') || key == "." || key == ".." {
            return Err(PortError::Unexpected(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(key))
    }

    fn ensure_dir(&self) -> PortResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            PortError::Unexpected(format!(
                "failed to initialize data directory {}: {e}",
                self.dir.display()
            ))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Unexpected(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.ensure_dir()?;
        let final_path = self.path_for(key)?;
        let tmp_path = self.dir.join(format!("{key}.tmp"));

        fs::write(&tmp_path, value).map_err(|e| {
            PortError::Unexpected(format!("failed to write {}: {e}", tmp_path.display()))
        })?;
        match fs::rename(&tmp_path, &final_path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // On platforms where rename won't replace, retry after removal.
                if final_path.exists() {
                    fs::remove_file(&final_path).map_err(|e| {
                        PortError::Unexpected(format!(
                            "failed to replace {}: {e}",
                            final_path.display()
                        ))
                    })?;
                    fs::rename(&tmp_path, &final_path).map_err(|e| {
                        PortError::Unexpected(format!(
                            "failed to replace {}: {e}",
                            final_path.display()
                        ))
                    })
                } else {
                    Err(PortError::Unexpected(format!(
                        "failed to write {}: {rename_err}",
                        final_path.display()
                    )))
                }
            }
        }
    }

    fn remove(&self, key: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Unexpected(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
