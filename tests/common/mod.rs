//! Shared testing utilities for firekit CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated workspace.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `firekit` binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("firekit").expect("Failed to locate firekit binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to firekit.toml in the workspace.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("firekit.toml")
    }

    /// Path to the scaffolded framework root.
    pub fn framework_root(&self) -> PathBuf {
        self.work_dir.join("libs/framework")
    }

    /// Create one framework class file under the framework root.
    pub fn write_framework_class(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.framework_root().join(rel);
        fs::create_dir_all(path.parent().expect("class path has a parent"))
            .expect("create framework dir");
        fs::write(&path, content).expect("write framework class");
        path
    }

    /// Create a backing file for every class the standard registry names.
    pub fn materialize_framework(&self) {
        let registry = firekit::domain::ClassRegistry::standard(&self.framework_root());
        for (name, path) in registry.iter() {
            fs::create_dir_all(path.parent().expect("class path has a parent"))
                .expect("create framework dir");
            fs::write(path, format!("<?php\n\nclass {} {{\n}}\n", name))
                .expect("write framework class");
        }
    }
}
