//! # sweepfs
//!
//! Small cross-platform filesystem utility — recursive tree removal with
//! fail-fast semantics.
//!
//! sweepfs owns one nontrivial algorithm: deleting a directory tree of
//! arbitrary depth. It walks depth-first, removes files as it finds them,
//! recurses into subdirectories, and removes each directory only once
//! everything inside it is gone. The first failure anywhere aborts the
//! remaining work and unwinds — a partially deleted tree is reported as a
//! failure, never as best-effort success.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let made = sweepfs::create_dir("scratch");
//! assert!(made);
//!
//! if sweepfs::remove_tree("scratch") {
//!     assert!(!sweepfs::exists("scratch"));
//! }
//! ```
//!
//! # Diagnostics
//!
//! [`remove_tree`] collapses every outcome to a boolean, matching the
//! original utility contract. When the caller needs to know *what* stopped a
//! removal, [`try_remove_tree`] surfaces the full [`SweepError`] taxonomy:
//!
//! ```rust,no_run
//! match sweepfs::try_remove_tree("build/out") {
//!     Ok(()) => {}
//!     Err(e) => eprintln!("stopped at {}: {e}", e.path().display()),
//! }
//! ```
//!
//! # Custom Backends
//!
//! The walk is written against the [`DirOps`] capability trait rather than
//! `std::fs` directly. Implement it to point [`TreeRemover`] at an in-memory
//! tree, a remote store, or an instrumented filesystem:
//!
//! ```rust,ignore
//! use sweepfs::{DirOps, TreeRemover};
//!
//! let remover = TreeRemover::with_ops(MyBackend::new());
//! remover.remove("some/root")?;
//! ```
//!
//! # Caveats
//!
//! Concurrent removals of overlapping trees race; the crate provides no
//! locking and the caller must serialize them. Directory cycles (bind
//! mounts, reparse points) are assumed absent and not detected.

#![forbid(unsafe_code)]

mod entry;
mod enumerate;
mod error;
mod ops;
mod remover;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use entry::{EntryKind, RawEntry};
pub use enumerate::{DirOps, OsDirOps, MAX_PATH_LEN};
pub use error::SweepError;
pub use ops::{create_dir, exists, remove_file};
pub use remover::TreeRemover;

use std::path::Path;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Delete the directory at `path` and everything beneath it.
///
/// Returns `true` only when the whole tree is gone. `false` covers both a
/// rejected root (nonexistent, not a directory, unreadable — nothing was
/// mutated) and a walk that stopped partway; use [`try_remove_tree`] to tell
/// them apart.
///
/// # Example
///
/// ```rust,no_run
/// if !sweepfs::remove_tree("target/tmp") {
///     eprintln!("could not remove target/tmp");
/// }
/// ```
pub fn remove_tree(path: impl AsRef<Path>) -> bool {
    try_remove_tree(path).is_ok()
}

/// Like [`remove_tree`], but reports *where* and *why* a removal stopped.
///
/// # Errors
///
/// See [`TreeRemover::remove`] for the contract and the error taxonomy.
pub fn try_remove_tree(path: impl AsRef<Path>) -> Result<(), SweepError> {
    TreeRemover::new().remove(path)
}
