use std::path::{Path, PathBuf};

/// Kernel configuration file name, expected at the workspace root.
pub const CONFIG_FILE: &str = "firekit.toml";

/// Suffix appended to a class name when no registry entry exists.
pub const CLASS_FILE_SUFFIX: &str = ".php";

/// Framework category directory holding the core classes.
pub const CORE_DIR: &str = "core";

/// Framework category directory holding interface declarations.
pub const INTERFACES_DIR: &str = "interfaces";

/// Framework category directory holding exception types.
pub const EXCEPTIONS_DIR: &str = "exceptions";

/// Framework category directory holding data-structure classes.
pub const DATASTRUCTS_DIR: &str = "datastructs";

/// Application directories appended to the search roots, in append order.
pub const APP_SEARCH_DIRS: [&str; 5] =
    ["bootstrap", "config", "controllers", "models", "responders"];

/// `<root>/firekit.toml`
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `<app_root>/config/routes.toml`
pub fn routes_file(app_root: &Path) -> PathBuf {
    app_root.join("config").join("routes.toml")
}
