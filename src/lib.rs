//! # Dirscribe
//!
//! `dirscribe` recursively walks a directory tree and writes a single plain-text
//! report describing the structure it found, with the full content of every
//! readable text file inlined beneath its entry.
//!
//! Binary files are detected (by extension, then by a UTF-8 probe of the first
//! 512 bytes) and noted without their content. Symbolic links are recorded but
//! never followed. Unreadable files and directories produce inline error
//! annotations instead of aborting the run, and every outcome is tallied in the
//! returned [`RunStats`].
//!
//! # Example
//!
//! ```no_run
//! use dirscribe::{DirscribeBuilder, dirscribe};
//!
//! let options = DirscribeBuilder::new("./my-project")
//!     .output("report.txt")
//!     .build();
//!
//! let stats = dirscribe(&options).expect("failed to write report");
//!
//! println!("{} files, {} directories", stats.files, stats.directories);
//! ```

pub mod advisory;
mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod report;
mod types;

pub use classify::{BINARY_EXTENSIONS, IGNORED_NAMES, IGNORED_SUFFIXES, is_binary, is_ignorable};
pub use engine::{dirscribe, write_report};
pub use error::DirscribeError;
pub use options::{DEFAULT_OUTPUT_NAME, DirscribeBuilder, DirscribeOptions};
pub use types::{EntryKind, RunStats};
