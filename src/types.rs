use serde::{Deserialize, Serialize};
use std::fs::FileType;

/// How a directory entry presents to the walker, before any content is read.
///
/// Derived from the entry's own file type without following symlinks, so a
/// symlink to a directory is [`EntryKind::Symlink`], not a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Devices, sockets, and anything else the report only names.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Counter set accumulated over one report run.
///
/// One field per outcome, so a misspelled counter is a compile error rather
/// than a silently fresh key. Every entry the walker sees lands in exactly
/// one of the structural counters, and every regular file additionally lands
/// in exactly one of `text_files`, `binary_files`, `unicode_errors`,
/// `read_errors`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Directories entered and recursed into.
    pub directories: u64,
    /// Regular files encountered.
    pub files: u64,
    /// Files whose full content was read as UTF-8 into the report.
    pub text_files: u64,
    /// Files skipped by the binary classifier.
    pub binary_files: u64,
    /// Symlinks reported but not followed.
    pub symlinks: u64,
    /// Entries excluded by the ignore tables, never visited.
    pub ignored: u64,
    /// Entries that are neither directory, file, nor symlink.
    pub unknown_types: u64,
    /// Entries whose type could not even be determined.
    pub item_errors: u64,
    /// Directories whose listing failed.
    pub directory_errors: u64,
    /// Files that were not valid UTF-8 when fully read.
    pub unicode_errors: u64,
    /// Files that failed to read for any other reason.
    pub read_errors: u64,
}

impl RunStats {
    /// True when any error counter is nonzero; drives the summary's
    /// `--- Errors ---` section.
    pub fn has_errors(&self) -> bool {
        self.unicode_errors > 0
            || self.read_errors > 0
            || self.item_errors > 0
            || self.directory_errors > 0
    }
}
