use std::fs;
use std::path::Path;

use crate::adapters::scaffold_assets;
use crate::domain::Error;
use crate::domain::paths::config_file;

/// Execute the init command.
///
/// Scaffolds `firekit.toml` and the application skeleton under `root`.
pub fn execute(root: &Path) -> Result<(), Error> {
    if config_file(root).exists() {
        return Err(Error::AlreadyInitialized);
    }

    for entry in scaffold_assets::scaffold_files() {
        let path = root.join(&entry.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &entry.content)?;
    }

    Ok(())
}
