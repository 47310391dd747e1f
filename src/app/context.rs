use std::path::{Path, PathBuf};

use crate::adapters::FilesystemClassSource;
use crate::app::FrameworkConfig;
use crate::domain::{Error, NameResolver};
use crate::ports::ClassSource;
use crate::services::ClassLoader;

/// Application context holding the wired kernel for command execution.
pub struct AppContext<S: ClassSource> {
    root: PathBuf,
    config: FrameworkConfig,
    loader: ClassLoader<S>,
}

impl AppContext<FilesystemClassSource> {
    /// Wire the kernel for the workspace rooted at `root`.
    ///
    /// This is the composition root: it builds the resolver (registry plus
    /// search roots) once and hands the resolver's search configuration to
    /// the filesystem source. Classes are loaded eagerly by the preload
    /// command rather than on first reference.
    pub fn from_root(root: &Path) -> Result<Self, Error> {
        let config = FrameworkConfig::load(root)?;
        let resolver =
            NameResolver::new(&config.framework_root(root), &config.app_root(root));
        let source = FilesystemClassSource::new(resolver.search_paths().clone());
        Ok(Self { root: root.to_path_buf(), config, loader: ClassLoader::new(resolver, source) })
    }

    /// Wire the kernel for the current directory.
    pub fn current() -> Result<Self, Error> {
        let cwd = std::env::current_dir()?;
        Self::from_root(&cwd)
    }
}

impl<S: ClassSource> AppContext<S> {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    pub fn loader(&self) -> &ClassLoader<S> {
        &self.loader
    }

    pub fn resolver(&self) -> &NameResolver {
        self.loader.resolver()
    }
}
