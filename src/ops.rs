//! One-syscall conveniences: create a directory, probe a path, delete a file.
//!
//! These share the crate's boolean contract but none of its machinery — each
//! is a single `std::fs` call. The remover does not use them; it goes through
//! its own [`DirOps`](crate::DirOps) primitives.

use std::fs;
use std::path::Path;

/// Create a single directory at `path`.
///
/// Returns `false` if the directory already exists, a parent is missing, or
/// the filesystem refuses. Not recursive — use `std::fs::create_dir_all` for
/// that.
pub fn create_dir(path: impl AsRef<Path>) -> bool {
    fs::create_dir(path).is_ok()
}

/// Whether anything exists at `path` (file, directory, or otherwise).
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Delete the single file at `path`.
///
/// Returns `false` for directories — those go through
/// [`remove_tree`](crate::remove_tree).
pub fn remove_file(path: impl AsRef<Path>) -> bool {
    fs::remove_file(path).is_ok()
}
