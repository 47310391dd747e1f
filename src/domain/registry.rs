use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ClassName;
use super::paths::{CLASS_FILE_SUFFIX, CORE_DIR, DATASTRUCTS_DIR, EXCEPTIONS_DIR, INTERFACES_DIR};

/// Framework classes living under `core/`.
const CORE_CLASSES: [&str; 5] =
    ["BaseConfig", "CoreConfiguration", "CoreObject", "FrameworkBootstrap", "RequestParser"];

/// Interface declarations living under `interfaces/`.
const INTERFACE_CLASSES: [&str; 5] =
    ["Bootstrapper", "Configuration", "Controller", "DataList", "Object"];

/// Exception types living under `exceptions/`.
const EXCEPTION_CLASSES: [&str; 8] = [
    "InvalidConfigurationException",
    "InvalidDataSourceException",
    "InvalidTemplateException",
    "OperationFailedException",
    "PhpFailureException",
    "UnexpectedValueException",
    "UnknownClassException",
    "UnsupportedOperationException",
];

/// Data-structure classes living under `datastructs/`.
const DATASTRUCT_CLASSES: [&str; 3] = ["BaseIteratingList", "ObjectTypeValidator", "UniqueList"];

/// Immutable table mapping known framework class names to their files.
///
/// Built once from the four category groups, each namespaced to its
/// directory under the framework root. Lookups never mutate the table, and
/// two registries built over the same root are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRegistry {
    entries: BTreeMap<ClassName, PathBuf>,
}

impl ClassRegistry {
    /// Build the standard framework registry rooted at `framework_root`.
    ///
    /// Pure path concatenation; no filesystem access.
    pub fn standard(framework_root: &Path) -> Self {
        let mut registry = Self { entries: BTreeMap::new() };
        registry.register_group(framework_root.join(CORE_DIR), &CORE_CLASSES);
        registry.register_group(framework_root.join(INTERFACES_DIR), &INTERFACE_CLASSES);
        registry.register_group(framework_root.join(EXCEPTIONS_DIR), &EXCEPTION_CLASSES);
        registry.register_group(framework_root.join(DATASTRUCTS_DIR), &DATASTRUCT_CLASSES);
        registry
    }

    fn register_group(&mut self, dir: PathBuf, names: &[&str]) {
        for name in names {
            let file = dir.join(format!("{}{}", name, CLASS_FILE_SUFFIX));
            let name = ClassName::new(name).expect("group tables hold valid class names");
            self.entries.insert(name, file);
        }
    }

    /// Registered path for `name`, if present.
    pub fn get(&self, name: &ClassName) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &ClassName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &Path)> {
        self.entries.iter().map(|(name, path)| (name, path.as_path()))
    }
}
