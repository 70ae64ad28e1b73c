use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;

/// The skeleton checkout being configured.
#[derive(Debug, Clone)]
pub struct WorkingTree {
    root: PathBuf,
    script: Option<PathBuf>,
}

impl WorkingTree {
    /// Opens the tree rooted at `root`. `script` is the path of the running
    /// tool; it is never rewritten and is the target of self-deletion.
    pub fn open<P: AsRef<Path>>(root: P, script: Option<PathBuf>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::WorkingTreeDoesNotExistError {
                path: root.display().to_string(),
            });
        }
        let root = root.canonicalize()?;
        let script = script.map(|script| {
            let script = if script.is_absolute() { script } else { root.join(script) };
            script.canonicalize().unwrap_or(script)
        });
        Ok(Self { root, script })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn script(&self) -> Option<&Path> {
        self.script.as_deref()
    }

    /// Name of the root directory, the default package name.
    pub fn folder_name(&self) -> String {
        self.root.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
    }

    /// Absolute path of a tree-relative path.
    pub fn join<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    /// `/`-separated path of `path` relative to the root, or `None` when it lies
    /// outside the tree.
    pub fn relative<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        path.as_ref().strip_prefix(&self.root).ok().map(|rel| rel.to_slash_string())
    }

    /// Tree-relative path of the running tool, when it lives inside the tree.
    pub fn script_relative(&self) -> Option<String> {
        self.script.as_ref().and_then(|script| self.relative(script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn open_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            WorkingTree::open(&missing, None),
            Err(Error::WorkingTreeDoesNotExistError { .. })
        ));
    }

    #[test]
    fn folder_name_and_relative_paths() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("laravel-widget");
        fs::create_dir_all(root.join("src")).unwrap();

        let tree = WorkingTree::open(&root, None).unwrap();
        assert_eq!(tree.folder_name(), "laravel-widget");
        assert_eq!(
            tree.relative(tree.join("src/Skeleton.php")).as_deref(),
            Some("src/Skeleton.php")
        );
        assert_eq!(tree.relative(dir.path()), None);
        assert_eq!(tree.script_relative(), None);
    }

    #[test]
    fn script_inside_tree_is_relative() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("configure"), "").unwrap();

        let tree = WorkingTree::open(dir.path(), Some(PathBuf::from("configure"))).unwrap();
        assert_eq!(tree.script_relative().as_deref(), Some("configure"));
    }

    #[test]
    fn script_outside_tree_is_not_relative() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let script = other.path().join("configure");
        fs::write(&script, "").unwrap();

        let tree = WorkingTree::open(dir.path(), Some(script)).unwrap();
        assert_eq!(tree.script_relative(), None);
        assert!(tree.script().is_some());
    }
}
