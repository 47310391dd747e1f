use std::path::{Path, PathBuf};

use super::paths::{APP_SEARCH_DIRS, CLASS_FILE_SUFFIX};
use super::{ClassName, ClassRegistry, Object, SearchPaths};
use crate::ports::ClassSource;

/// Outcome of resolving a symbolic class name to a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name was found in the registry; the path is the registered file.
    Registered(PathBuf),
    /// The name was not registered; the path is the `<Name>.php` convention
    /// candidate, relative to the search roots.
    Convention(PathBuf),
}

impl Resolution {
    /// Candidate path regardless of how it was derived.
    pub fn path(&self) -> &Path {
        match self {
            Resolution::Registered(path) | Resolution::Convention(path) => path,
        }
    }

    /// Whether this resolution came from the registry.
    pub fn is_registered(&self) -> bool {
        matches!(self, Resolution::Registered(_))
    }
}

/// Maps symbolic class names to candidate files.
///
/// Holds the immutable class registry and the search roots the loading
/// collaborator consults for relative candidates. Resolution is total: an
/// unknown name still yields a convention candidate. Whether that candidate
/// has a backing file is a separate question answered by the `ClassSource`,
/// and a candidate that never materializes surfaces as an error at first
/// use, not here.
#[derive(Debug, Clone)]
pub struct NameResolver {
    registry: ClassRegistry,
    search_paths: SearchPaths,
}

impl NameResolver {
    /// Build the resolver for a framework tree and an application tree.
    ///
    /// Registers the framework root plus the fixed application directories
    /// as search roots. Appends are deduplicating, so wiring the resolver
    /// twice over the same layout produces the same configuration.
    pub fn new(framework_root: &Path, app_root: &Path) -> Self {
        let registry = ClassRegistry::standard(framework_root);
        let mut search_paths = SearchPaths::new();
        search_paths.append(framework_root);
        for dir in APP_SEARCH_DIRS {
            search_paths.append(app_root.join(dir));
        }
        Self { registry, search_paths }
    }

    /// Resolve `name` to a candidate file.
    ///
    /// Registry hits return the registered path exactly. Misses fall back
    /// to the `<Name>.php` convention. Resolution never fails.
    pub fn resolve(&self, name: &ClassName) -> Resolution {
        match self.registry.get(name) {
            Some(path) => Resolution::Registered(path.to_path_buf()),
            None => {
                Resolution::Convention(PathBuf::from(format!("{}{}", name, CLASS_FILE_SUFFIX)))
            }
        }
    }

    /// Whether the resolved candidate has a backing file.
    ///
    /// Pure pass-through to the source collaborator.
    pub fn exists<S: ClassSource>(&self, source: &S, resolution: &Resolution) -> bool {
        source.exists(resolution.path())
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }
}

impl Object for NameResolver {}
