//! # Storage Module
//!
//! Delete and download actions against the scanned tree.
//!
//! Requests arrive as paths relative to the scan root, composed by the
//! presentation layer from a record's `location` and `name` (files at the
//! root may carry the "Root Directory/" display label, which is stripped).
//! Every request is confined to the root before touching the filesystem.
//!
//! A failed action never patches the report: the contract is
//! refresh-by-rescan, so the prior report stays visible until the next scan.

use crate::error::StorageError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Display label the UI uses for the scan root
const ROOT_LABEL_PREFIX: &str = "Root Directory/";

/// Filesystem-backed store rooted at the scanned directory
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store confined to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The confining root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a requested relative path against the root
    ///
    /// Rejects any path that would escape the root after folding `.` and
    /// `..` components.
    pub fn resolve(&self, requested: &str) -> Result<PathBuf, StorageError> {
        let requested = requested.strip_prefix(ROOT_LABEL_PREFIX).unwrap_or(requested);

        let resolved = normalize(&self.root.join(requested));
        if !resolved.starts_with(normalize(&self.root)) {
            return Err(StorageError::OutsideRoot {
                path: PathBuf::from(requested),
            });
        }

        Ok(resolved)
    }

    /// Delete a file under the root
    pub fn delete(&self, requested: &str) -> Result<(), StorageError> {
        let path = self.resolve(requested)?;

        if !path.exists() {
            return Err(StorageError::NotFound { path });
        }

        fs::remove_file(&path).map_err(|source| StorageError::DeleteFailed { path, source })
    }

    /// Copy a file under the root to `dest`, returning the bytes written
    pub fn retrieve(&self, requested: &str, dest: &Path) -> Result<u64, StorageError> {
        let path = self.resolve(requested)?;

        if !path.exists() {
            return Err(StorageError::NotFound { path });
        }

        fs::copy(&path, dest).map_err(|source| StorageError::DownloadFailed { path, source })
    }
}

/// Fold `.` and `..` components lexically, without touching the filesystem
///
/// Lexical folding is what keeps the confinement check meaningful for paths
/// that do not exist yet (a delete target may already be gone).
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn store_with_file(name: &str) -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(b"contents").unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn resolve_joins_under_root() {
        let store = LocalStore::new("/scan/root");
        let resolved = store.resolve("docs/a.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/scan/root/docs/a.txt"));
    }

    #[test]
    fn resolve_strips_root_display_label() {
        let store = LocalStore::new("/scan/root");
        let resolved = store.resolve("Root Directory/a.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/scan/root/a.txt"));
    }

    #[test]
    fn resolve_rejects_escape_attempts() {
        let store = LocalStore::new("/scan/root");

        assert!(matches!(
            store.resolve("../../etc/passwd"),
            Err(StorageError::OutsideRoot { .. })
        ));
        assert!(matches!(
            store.resolve("docs/../../outside.txt"),
            Err(StorageError::OutsideRoot { .. })
        ));
    }

    #[test]
    fn resolve_allows_internal_parent_components() {
        let store = LocalStore::new("/scan/root");
        let resolved = store.resolve("docs/../a.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/scan/root/a.txt"));
    }

    #[test]
    fn delete_removes_the_file() {
        let (dir, store) = store_with_file("victim.txt");

        store.delete("victim.txt").unwrap();

        assert!(!dir.path().join("victim.txt").exists());
    }

    #[test]
    fn delete_missing_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path());

        assert!(matches!(
            store.delete("ghost.txt"),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn retrieve_copies_bytes_out() {
        let (_dir, store) = store_with_file("data.bin");
        let dest_dir = TempDir::new().unwrap();
        let dest = dest_dir.path().join("copy.bin");

        let written = store.retrieve("data.bin", &dest).unwrap();

        assert_eq!(written, 8);
        assert_eq!(fs::read(&dest).unwrap(), b"contents");
    }

    #[test]
    fn normalize_folds_components() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("a/b/../../c")), PathBuf::from("c"));
    }
}
