use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    // Root preconditions
    #[error("path not found")]
    NotFound(PathBuf),

    #[error("not a directory")]
    NotADirectory(PathBuf),

    // Traversal
    #[error("directory enumeration failed")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file removal failed")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory removal failed")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Joined child path would exceed the platform bound. Rejected outright:
    // a truncated path could name something else entirely, and this crate
    // deletes what it names.
    #[error("joined path exceeds platform limit of {limit} bytes")]
    PathOverflow { path: PathBuf, limit: usize },
}

impl SweepError {
    /// The path this error occurred at.
    /// Callers use this to present "Left behind: <path>" without pattern
    /// matching on variants.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Enumeration { path: p, .. }
            | Self::RemoveFile { path: p, .. }
            | Self::RemoveDir { path: p, .. }
            | Self::PathOverflow { path: p, .. } => p,
        }
    }

    /// Whether the root was rejected before any mutation took place.
    ///
    /// `true` means the filesystem is exactly as it was before the call.
    /// Other errors mean the walk may have stopped partway: nodes removed
    /// before the failure are already gone. (An unreadable root also
    /// mutates nothing, but surfaces as [`SweepError::Enumeration`].)
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }
}
