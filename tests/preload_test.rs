//! Eager preload over a real filesystem, and the deferred-failure policy.

use std::path::Path;

use assert_fs::TempDir;
use assert_fs::prelude::*;

use firekit::adapters::FilesystemClassSource;
use firekit::domain::{ClassName, Error, NameResolver};
use firekit::services::{ClassLoader, LoadOutcome};

fn loader_over(root: &Path) -> ClassLoader<FilesystemClassSource> {
    let resolver = NameResolver::new(&root.join("libs/framework"), &root.join("app"));
    let source = FilesystemClassSource::new(resolver.search_paths().clone());
    ClassLoader::new(resolver, source)
}

#[test]
fn registered_class_loads_from_the_framework_tree() {
    let temp = TempDir::new().unwrap();
    temp.child("libs/framework/core/CoreObject.php")
        .write_str("<?php\n\nclass CoreObject {\n}\n")
        .unwrap();

    let loader = loader_over(temp.path());
    let outcome = loader.load(&ClassName::new("CoreObject").unwrap()).unwrap();

    match outcome {
        LoadOutcome::Loaded { resolution, class } => {
            assert!(resolution.is_registered());
            assert!(class.content.contains("class CoreObject"));
        }
        LoadOutcome::Unresolved { .. } => panic!("CoreObject should load"),
    }
}

#[test]
fn convention_class_loads_from_an_app_search_root() {
    let temp = TempDir::new().unwrap();
    temp.child("app/controllers/BlogController.php")
        .write_str("<?php\n\nclass BlogController {\n}\n")
        .unwrap();

    let loader = loader_over(temp.path());
    let outcome = loader.load(&ClassName::new("BlogController").unwrap()).unwrap();

    match outcome {
        LoadOutcome::Loaded { resolution, class } => {
            assert!(!resolution.is_registered());
            assert_eq!(class.path, temp.path().join("app/controllers/BlogController.php"));
        }
        LoadOutcome::Unresolved { .. } => panic!("BlogController should load"),
    }
}

#[test]
fn preload_reports_unresolved_names_without_failing() {
    let temp = TempDir::new().unwrap();
    temp.child("libs/framework/core/CoreObject.php").write_str("<?php\n").unwrap();

    let loader = loader_over(temp.path());
    let names = vec![
        ClassName::new("CoreObject").unwrap(),
        ClassName::new("GhostController").unwrap(),
    ];

    let report = loader.preload(&names).unwrap();
    assert_eq!(report.set.len(), 1);
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].0.as_str(), "GhostController");
    assert_eq!(report.unresolved[0].1, Path::new("GhostController.php"));
}

#[test]
fn unresolved_class_fails_at_first_require() {
    let temp = TempDir::new().unwrap();
    let loader = loader_over(temp.path());
    let ghost = ClassName::new("GhostController").unwrap();

    let report = loader.preload(std::slice::from_ref(&ghost)).unwrap();

    assert!(matches!(report.set.require(&ghost), Err(Error::UnresolvedClass(_))));
}
