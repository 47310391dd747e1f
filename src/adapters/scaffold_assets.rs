use include_dir::{Dir, DirEntry, include_dir};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// A file from the embedded workspace scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Path relative to the workspace root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// All scaffold files in path order.
pub fn scaffold_files() -> Vec<ScaffoldFile> {
    let mut files = Vec::new();
    collect(&SCAFFOLD_DIR, &mut files);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn collect(dir: &Dir, files: &mut Vec<ScaffoldFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect(subdir, files),
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    files.push(ScaffoldFile {
                        path: file.path().to_string_lossy().to_string(),
                        content: content.to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_carries_the_kernel_config() {
        let files = scaffold_files();
        assert!(files.iter().any(|f| f.path == "firekit.toml"));
    }

    #[test]
    fn scaffold_carries_the_app_skeleton() {
        let files = scaffold_files();
        assert!(files.iter().any(|f| f.path == "app/config/routes.toml"));
        assert!(files.iter().any(|f| f.path == "app/controllers/PagesController.php"));
        assert!(files.iter().any(|f| f.path == "app/bootstrap/bootstrap.php"));
    }
}
