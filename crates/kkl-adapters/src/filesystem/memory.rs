//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;

use kkl_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to the pipeline
/// and inspect the result through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and its ancestors (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) -> ScaffoldResult<()> {
        self.write()?.add_ancestors(path.as_ref());
        Ok(())
    }

    /// Create a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> ScaffoldResult<()> {
        let path = path.as_ref();
        let mut inner = self.write()?;
        if let Some(parent) = path.parent() {
            inner.add_ancestors(parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
        Ok(())
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files at or below `root`, sorted.
    pub fn list_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect();
        files.sort();
        files
    }

    fn read(&self) -> ScaffoldResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> ScaffoldResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

fn not_found(path: &Path) -> kkl_core::error::ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn entry_kind(&self, path: &Path) -> EntryKind {
        let inner = match self.read() {
            Ok(inner) => inner,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Treating entry as missing");
                return EntryKind::Missing;
            }
        };
        if inner.directories.contains(path) {
            EntryKind::Directory
        } else if inner.files.contains_key(path) {
            EntryKind::File
        } else {
            EntryKind::Missing
        }
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        self.write()?
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/w/p/src/index.js", "x").unwrap();

        assert_eq!(fs.entry_kind(Path::new("/w/p/src")), EntryKind::Directory);
        assert_eq!(fs.entry_kind(Path::new("/w/p/src/index.js")), EntryKind::File);
        assert_eq!(fs.entry_kind(Path::new("/w/q")), EntryKind::Missing);
    }

    #[test]
    fn write_requires_existing_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/a"), "x").is_err());

        fs.add_dir("/w").unwrap();
        fs.write_file(Path::new("/w/a"), "x").unwrap();
        assert_eq!(fs.read_file("/w/a").as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/w/p/.git/HEAD", "ref").unwrap();
        fs.add_file("/w/p/package.json", "{}").unwrap();
        fs.add_file("/w/other/keep", "k").unwrap();

        fs.remove_dir_all(Path::new("/w/p/.git")).unwrap();

        assert_eq!(fs.entry_kind(Path::new("/w/p/.git")), EntryKind::Missing);
        assert_eq!(
            fs.list_files("/w"),
            vec![PathBuf::from("/w/other/keep"), PathBuf::from("/w/p/package.json")]
        );
    }

    #[test]
    fn missing_entries_are_errors() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("/a")).is_err());
        assert!(fs.remove_file(Path::new("/a")).is_err());
        assert!(fs.remove_dir_all(Path::new("/a")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.add_file("/x", "1").unwrap();
        assert_eq!(view.read_file("/x").as_deref(), Some("1"));
    }

    #[test]
    fn poisoned_lock_reads_as_missing_and_fails_writes() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/w/a", "x").unwrap();

        let inner = Arc::clone(&fs.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(fs.entry_kind(Path::new("/w/a")), EntryKind::Missing);
        let err = fs.write_file(Path::new("/w/b"), "y").unwrap_err();
        assert!(err.to_string().contains("lock poisoned"));
    }
}
