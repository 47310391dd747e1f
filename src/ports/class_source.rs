use std::path::{Path, PathBuf};

use crate::domain::Error;

/// A class file read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedClass {
    /// Location the class was actually read from.
    pub path: PathBuf,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for probing and reading class files.
///
/// Relative candidates are tried against each search root independently;
/// absolute candidates are used as-is. A missing file is a normal `false`
/// from `exists`, never an error.
pub trait ClassSource {
    /// Whether `candidate` has a backing file on any root.
    fn exists(&self, candidate: &Path) -> bool;

    /// Concrete location for `candidate`, if any root carries it.
    fn locate(&self, candidate: &Path) -> Option<PathBuf>;

    /// Read the class file behind `candidate`.
    fn load(&self, candidate: &Path) -> Result<LoadedClass, Error>;
}
