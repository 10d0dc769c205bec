use super::StateStore;
use crate::error::{QuotzError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based store: each key is a file directly under `root`, holding the
/// raw value. Keys used by quotz are plain names, so no escaping is done.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                QuotzError::Persistence(format!(
                    "could not create {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuotzError::Persistence(format!(
                "could not read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|e| {
            QuotzError::Persistence(format!("could not write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
