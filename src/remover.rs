use std::path::Path;

use tracing::{debug, trace};

use crate::entry::EntryKind;
use crate::enumerate::{join_child, DirOps, OsDirOps};
use crate::error::SweepError;

// ---------------------------------------------------------------------------
// TreeRemover
// ---------------------------------------------------------------------------

/// Recursive directory removal over a [`DirOps`] capability.
///
/// [`TreeRemover::new`] binds to the platform filesystem; tests and embedders
/// supply their own backend via [`TreeRemover::with_ops`]. For the common
/// case, the free functions [`remove_tree`](crate::remove_tree) and
/// [`try_remove_tree`](crate::try_remove_tree) wrap a platform-backed
/// remover.
pub struct TreeRemover<O: DirOps = OsDirOps> {
    ops: O,
}

impl TreeRemover<OsDirOps> {
    /// A remover over the real filesystem.
    pub fn new() -> Self {
        Self { ops: OsDirOps }
    }
}

impl Default for TreeRemover<OsDirOps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: DirOps> TreeRemover<O> {
    /// A remover over a custom [`DirOps`] backend.
    pub fn with_ops(ops: O) -> Self {
        Self { ops }
    }

    /// Delete `path` and everything beneath it.
    ///
    /// The walk is depth-first and synchronous: each subdirectory is fully
    /// removed before its parent, and the first failure anywhere aborts the
    /// remaining siblings at that level and unwinds (fail-fast — a partially
    /// deleted tree is an error state the caller must see, not paper over
    /// with best-effort continuation). Every operation is attempted exactly
    /// once; retrying is the caller's business.
    ///
    /// On success, `path` and its contents no longer exist. On failure,
    /// everything removed before the failing node stays removed, and the
    /// failing node and everything not yet visited still exist — rerunning
    /// after clearing the obstruction picks up where the walk stopped.
    ///
    /// Concurrent calls on overlapping trees race with no ordering guarantee;
    /// serializing them is the caller's responsibility. Directory cycles
    /// (bind mounts, reparse points) are assumed absent — mainstream
    /// filesystems do not hard-link directories — and are not detected.
    ///
    /// # Errors
    ///
    /// [`SweepError::NotFound`] / [`SweepError::NotADirectory`] when `path`
    /// cannot be opened for listing (nothing has been mutated — see
    /// [`SweepError::is_precondition`]); otherwise the error for the first
    /// node that could not be removed.
    pub fn remove(&self, path: impl AsRef<Path>) -> Result<(), SweepError> {
        let path = path.as_ref();
        match remove_tree_at(&self.ops, path) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(
                    root = %path.display(),
                    at = %e.path().display(),
                    error = %e,
                    "tree removal aborted"
                );
                Err(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// The walk
// ---------------------------------------------------------------------------

/// One recursion frame: list `path`, remove every child, remove `path`.
///
/// Holds exactly one listing handle at a time; the handle is dropped on
/// every exit path — the `?` early returns included — before anything else
/// happens, so the directory is closed by the time `remove_empty_dir` runs
/// and no handle outlives its frame.
fn remove_tree_at<O: DirOps>(ops: &O, path: &Path) -> Result<(), SweepError> {
    let entries = ops.enumerate(path)?;

    for entry in entries {
        let entry = entry?;

        // Some enumeration APIs yield the self/parent pseudo-entries.
        if entry.name == "." || entry.name == ".." {
            continue;
        }

        let child = join_child(path, &entry.name)?;

        let kind = match entry.kind {
            EntryKind::Unknown => ops.classify(&child)?,
            kind => kind,
        };

        match kind {
            EntryKind::Dir => remove_tree_at(ops, &child)?,
            _ => {
                ops.remove_file(&child)?;
                trace!(path = %child.display(), "removed file");
            }
        }
    }

    // The loop consumed and dropped the listing; `path` is now empty and
    // nothing holds it open.
    ops.remove_empty_dir(path)?;
    trace!(path = %path.display(), "removed directory");
    Ok(())
}

// ---------------------------------------------------------------------------
// Fake-backed unit tests: ordering, fail-fast, handle discipline
// ---------------------------------------------------------------------------
