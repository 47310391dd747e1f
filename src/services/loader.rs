//! Eager resolve-then-load service.
//!
//! Replaces the original implicit on-first-reference loading hook with an
//! explicit pass driven by the composition root: every wanted class is
//! resolved and loaded up front, and a name with no backing file is
//! recorded rather than raised. The failure surfaces at the first
//! `LoadedSet::require` of that name.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{ClassName, Error, NameResolver, Resolution};
use crate::ports::{ClassSource, LoadedClass};

/// Outcome of loading a single class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The candidate existed on a search root and read cleanly.
    Loaded { resolution: Resolution, class: LoadedClass },
    /// No search root carries the candidate. Deferred failure, not an error.
    Unresolved { name: ClassName, candidate: PathBuf },
}

/// Pairs a resolver with a class source and loads classes eagerly.
pub struct ClassLoader<S: ClassSource> {
    resolver: NameResolver,
    source: S,
}

impl<S: ClassSource> ClassLoader<S> {
    pub fn new(resolver: NameResolver, source: S) -> Self {
        Self { resolver, source }
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `name` and read its file if any search root carries it.
    pub fn load(&self, name: &ClassName) -> Result<LoadOutcome, Error> {
        let resolution = self.resolver.resolve(name);
        if self.source.exists(resolution.path()) {
            let class = self.source.load(resolution.path())?;
            Ok(LoadOutcome::Loaded { resolution, class })
        } else {
            Ok(LoadOutcome::Unresolved {
                name: name.clone(),
                candidate: resolution.path().to_path_buf(),
            })
        }
    }

    /// Load every name eagerly, collecting outcomes into a report.
    pub fn preload(&self, names: &[ClassName]) -> Result<PreloadReport, Error> {
        let mut loaded = BTreeMap::new();
        let mut unresolved = Vec::new();
        for name in names {
            match self.load(name)? {
                LoadOutcome::Loaded { class, .. } => {
                    loaded.insert(name.clone(), class);
                }
                LoadOutcome::Unresolved { name, candidate } => {
                    unresolved.push((name, candidate));
                }
            }
        }
        Ok(PreloadReport { set: LoadedSet { classes: loaded }, unresolved })
    }
}

/// Result of an eager preload pass.
#[derive(Debug, Clone)]
pub struct PreloadReport {
    /// Classes that loaded.
    pub set: LoadedSet,
    /// Names with no backing file, with the candidate that was probed.
    pub unresolved: Vec<(ClassName, PathBuf)>,
}

/// Classes that survived a preload pass.
#[derive(Debug, Clone, Default)]
pub struct LoadedSet {
    classes: BTreeMap<ClassName, LoadedClass>,
}

impl LoadedSet {
    /// Fetch a loaded class, failing at first use if it never loaded.
    pub fn require(&self, name: &ClassName) -> Result<&LoadedClass, Error> {
        self.classes.get(name).ok_or_else(|| Error::UnresolvedClass(name.clone()))
    }

    pub fn contains(&self, name: &ClassName) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Loaded names in name order.
    pub fn names(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.keys()
    }
}
