use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{Error, SearchPaths};
use crate::ports::{ClassSource, LoadedClass};

/// Filesystem-backed class source probing the configured search roots.
#[derive(Debug, Clone)]
pub struct FilesystemClassSource {
    search_paths: SearchPaths,
}

impl FilesystemClassSource {
    pub fn new(search_paths: SearchPaths) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }
}

impl ClassSource for FilesystemClassSource {
    fn exists(&self, candidate: &Path) -> bool {
        self.locate(candidate).is_some()
    }

    fn locate(&self, candidate: &Path) -> Option<PathBuf> {
        if candidate.is_absolute() {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }
        // Each root is tried independently; the first hit wins.
        self.search_paths.roots().map(|root| root.join(candidate)).find(|path| path.is_file())
    }

    fn load(&self, candidate: &Path) -> Result<LoadedClass, Error> {
        let path = self.locate(candidate).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no search root carries {}", candidate.display()),
            )
        })?;
        let content = fs::read_to_string(&path)?;
        Ok(LoadedClass { path, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    fn source_over(root: &Path) -> FilesystemClassSource {
        let mut paths = SearchPaths::new();
        paths.append(root.join("libs/framework"));
        paths.append(root.join("app/controllers"));
        FilesystemClassSource::new(paths)
    }

    #[test]
    fn relative_candidate_is_probed_against_each_root() {
        let temp = TempDir::new().unwrap();
        temp.child("app/controllers/BlogController.php").write_str("<?php\n").unwrap();

        let source = source_over(temp.path());
        let located = source.locate(Path::new("BlogController.php")).unwrap();
        assert_eq!(located, temp.path().join("app/controllers/BlogController.php"));
        assert!(source.exists(Path::new("BlogController.php")));
    }

    #[test]
    fn earlier_root_wins_when_both_carry_the_candidate() {
        let temp = TempDir::new().unwrap();
        temp.child("libs/framework/Helper.php").write_str("framework").unwrap();
        temp.child("app/controllers/Helper.php").write_str("app").unwrap();

        let source = source_over(temp.path());
        let loaded = source.load(Path::new("Helper.php")).unwrap();
        assert_eq!(loaded.content, "framework");
    }

    #[test]
    fn absolute_candidate_skips_the_roots() {
        let temp = TempDir::new().unwrap();
        temp.child("elsewhere/Standalone.php").write_str("<?php\n").unwrap();

        let source = source_over(temp.path());
        let absolute = temp.path().join("elsewhere/Standalone.php");
        assert!(source.exists(&absolute));
    }

    #[test]
    fn missing_candidate_is_false_not_an_error() {
        let temp = TempDir::new().unwrap();
        let source = source_over(temp.path());
        assert!(!source.exists(Path::new("Nowhere.php")));
        assert_eq!(source.locate(Path::new("Nowhere.php")), None);
    }

    #[test]
    fn load_of_missing_candidate_is_not_found() {
        let temp = TempDir::new().unwrap();
        let source = source_over(temp.path());
        assert!(source.load(Path::new("Nowhere.php")).is_err());
    }
}
