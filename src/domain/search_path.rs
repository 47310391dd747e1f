use std::path::{Path, PathBuf};

/// Ordered collection of directory roots consulted when a resolved path is
/// relative.
///
/// Replaces interpreter-global include-path mutation with an explicit value:
/// built while the resolver is constructed, read-only afterwards. Appending
/// an already-present root is a no-op, so repeated wiring over the same
/// layout stays idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    roots: Vec<PathBuf>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root unless it is already present.
    pub fn append(&mut self, root: impl Into<PathBuf>) {
        let root = root.into();
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }

    /// Roots in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    pub fn contains(&self, root: &Path) -> bool {
        self.roots.iter().any(|r| r == root)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
