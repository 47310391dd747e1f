use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::Error;
use crate::ports::{ClassSource, LoadedClass};

/// In-memory class source for exercising resolution without a filesystem.
///
/// Candidates are matched verbatim against the registered paths; there is
/// no root probing here.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClassSource {
    files: BTreeMap<PathBuf, String>,
}

impl InMemoryClassSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file at an exact path.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ClassSource for InMemoryClassSource {
    fn exists(&self, candidate: &Path) -> bool {
        self.files.contains_key(candidate)
    }

    fn locate(&self, candidate: &Path) -> Option<PathBuf> {
        self.files.contains_key(candidate).then(|| candidate.to_path_buf())
    }

    fn load(&self, candidate: &Path) -> Result<LoadedClass, Error> {
        let content = self.files.get(candidate).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no registered file for {}", candidate.display()),
            )
        })?;
        Ok(LoadedClass { path: candidate.to_path_buf(), content: content.clone() })
    }
}
