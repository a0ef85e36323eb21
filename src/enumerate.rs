use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{EntryKind, RawEntry};
use crate::error::SweepError;

// ---------------------------------------------------------------------------
// Platform path bound
// ---------------------------------------------------------------------------

/// Hard upper bound on a joined path, in bytes of the OS representation.
///
/// 260 is the classic Windows `MAX_PATH`; 4096 matches `PATH_MAX` on the
/// mainstream Unix filesystems. The bound is enforced explicitly at join
/// time — see [`join_child`] — rather than assumed.
#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 260;

/// Hard upper bound on a joined path, in bytes of the OS representation.
///
/// 260 is the classic Windows `MAX_PATH`; 4096 matches `PATH_MAX` on the
/// mainstream Unix filesystems. The bound is enforced explicitly at join
/// time — see [`join_child`] — rather than assumed.
#[cfg(not(windows))]
pub const MAX_PATH_LEN: usize = 4096;

/// Join `name` onto `dir` with the platform separator, enforcing
/// [`MAX_PATH_LEN`].
///
/// An over-long result is rejected with [`SweepError::PathOverflow`], never
/// truncated — a truncated path names a different filesystem object, and
/// everything downstream of this function deletes things.
pub(crate) fn join_child(dir: &Path, name: &OsStr) -> Result<PathBuf, SweepError> {
    let joined = dir.join(name);
    if joined.as_os_str().len() > MAX_PATH_LEN {
        return Err(SweepError::PathOverflow {
            path: joined,
            limit: MAX_PATH_LEN,
        });
    }
    Ok(joined)
}

// ---------------------------------------------------------------------------
// DirOps
// ---------------------------------------------------------------------------

/// The directory capabilities the remover is built on.
///
/// Implement this to drive [`TreeRemover`](crate::TreeRemover) over anything
/// directory-shaped — the real filesystem, an in-memory tree in tests, or a
/// remote store.
///
/// # Object Safety
///
/// `DirOps` is object-safe. `enumerate()` returns a boxed iterator rather
/// than `impl Iterator` so the remover can hold a `&dyn DirOps`.
///
/// # Enumeration contract
///
/// The iterator returned by `enumerate()` is one live listing handle: finite,
/// not restartable (each call opens a fresh handle), and released exactly
/// once when the iterator is dropped — on every exit path, including early
/// returns on failure. Ordering of entries is unspecified. Implementations
/// backed by APIs that yield the `.` and `..` pseudo-entries may yield them;
/// the remover filters them itself.
pub trait DirOps {
    /// Open a listing of `path` and yield its entries lazily.
    ///
    /// # Errors
    ///
    /// Fails with [`SweepError::NotFound`] or [`SweepError::NotADirectory`]
    /// when the listing cannot be opened at all (the caller treats these as
    /// precondition failures — nothing has been mutated), and with
    /// [`SweepError::Enumeration`] for everything else, including failures
    /// yielded mid-walk by the iterator.
    fn enumerate<'a>(
        &'a self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<RawEntry, SweepError>> + 'a>, SweepError>;

    /// Resolve an [`EntryKind::Unknown`] entry with an explicit stat.
    ///
    /// Must not follow symlinks: a symlink to a directory classifies as
    /// [`EntryKind::File`] so it is unlinked, never recursed into.
    fn classify(&self, path: &Path) -> Result<EntryKind, SweepError>;

    /// Delete a single non-directory entry.
    fn remove_file(&self, path: &Path) -> Result<(), SweepError>;

    /// Delete a directory known to be empty.
    fn remove_empty_dir(&self, path: &Path) -> Result<(), SweepError>;
}

// ---------------------------------------------------------------------------
// OsDirOps
// ---------------------------------------------------------------------------

/// The platform implementation of [`DirOps`], backed by `std::fs`.
///
/// `read_dir` papers over the native divergence (handle-plus-attributes on
/// Windows, stream-plus-stat on Unix): where the native API hands the kind
/// back with the entry it surfaces through `DirEntry::file_type`, and where
/// it does not the entry comes out [`EntryKind::Unknown`] and `classify`
/// performs the deferred stat. `.` and `..` never appear in `read_dir`
/// output.
#[derive(Default)]
pub struct OsDirOps;

impl DirOps for OsDirOps {
    fn enumerate<'a>(
        &'a self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<RawEntry, SweepError>> + 'a>, SweepError> {
        let dir = path.to_path_buf();
        let read = fs::read_dir(path).map_err(|e| open_error(path, e))?;

        let entries = read.map(move |res| match res {
            Ok(entry) => {
                let kind = match entry.file_type() {
                    Ok(ft) if ft.is_dir() => EntryKind::Dir,
                    Ok(_) => EntryKind::File,
                    Err(_) => EntryKind::Unknown,
                };
                Ok(RawEntry {
                    name: entry.file_name(),
                    kind,
                })
            }
            Err(e) => Err(SweepError::Enumeration {
                path: dir.clone(),
                source: e,
            }),
        });

        Ok(Box::new(entries))
    }

    fn classify(&self, path: &Path) -> Result<EntryKind, SweepError> {
        // symlink_metadata: a link to a directory must come back File so the
        // link itself is unlinked and the target is left alone.
        let meta = fs::symlink_metadata(path).map_err(|e| SweepError::Enumeration {
            path: path.to_path_buf(),
            source: e,
        })?;
        if meta.is_dir() {
            Ok(EntryKind::Dir)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn remove_file(&self, path: &Path) -> Result<(), SweepError> {
        fs::remove_file(path).map_err(|e| SweepError::RemoveFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn remove_empty_dir(&self, path: &Path) -> Result<(), SweepError> {
        fs::remove_dir(path).map_err(|e| SweepError::RemoveDir {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Map a `read_dir` open failure onto the root-precondition taxonomy.
fn open_error(path: &Path, e: io::Error) -> SweepError {
    match e.kind() {
        io::ErrorKind::NotFound => SweepError::NotFound(path.to_path_buf()),
        io::ErrorKind::NotADirectory => SweepError::NotADirectory(path.to_path_buf()),
        _ => SweepError::Enumeration {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
