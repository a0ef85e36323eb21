use std::ffi::OsString;

/// A single item yielded by [`DirOps::enumerate`](crate::enumerate::DirOps::enumerate)
/// during one listing of a directory.
///
/// Ephemeral — lives only for the duration of one enumeration step. The name
/// is relative to the enumerated directory; the remover joins it into a full
/// path itself so the length bound can be checked at join time.
pub struct RawEntry {
    /// The entry's name within its parent directory.
    pub name: OsString,

    /// What the enumerator could tell about the entry's kind, for free.
    pub kind: EntryKind,
}

/// The kind of an enumerated entry.
///
/// Some enumeration APIs hand back the kind with the entry (Windows find-data
/// attributes, `d_type` on most Unix filesystems); others only give a name and
/// require a separate stat. `Unknown` models the second case — the remover
/// resolves it with one [`classify`](crate::enumerate::DirOps::classify) call
/// before deciding whether to recurse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, symlink, or anything else removed with a file unlink.
    File,

    /// A directory — recursed into, never unlinked directly.
    Dir,

    /// Kind not determinable from the enumeration alone; requires a stat.
    Unknown,
}
