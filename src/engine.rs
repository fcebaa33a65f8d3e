use crate::classify;
use crate::error::DirscribeError;
use crate::options::DirscribeOptions;
use crate::report::ReportWriter;
use crate::types::{EntryKind, RunStats};
use chrono::Local;
use std::fs::{self, DirEntry, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Runs a full report: validates the root, creates the output file, walks
/// the tree, and returns the accumulated statistics.
///
/// Fails fast only for the three fatal conditions in [`DirscribeError`];
/// everything that goes wrong below the root is recorded inside the report
/// and tallied instead.
pub fn dirscribe(options: &DirscribeOptions) -> Result<RunStats, DirscribeError> {
    // Validate before touching the sink, so an invalid root leaves no
    // half-made output file behind.
    ensure_root_dir(&options.root)?;
    let file = File::create(&options.output)
        .map_err(|e| DirscribeError::create_output(&options.output, e))?;
    let stats = write_report(options, BufWriter::new(file))?;
    tracing::info!("report written to {}", options.output.display());
    Ok(stats)
}

/// The traversal engine over an arbitrary sink.
///
/// Writes the header, then visits `options.root` depth-first in whatever
/// order the filesystem enumerates entries. Exactly one structural line per
/// visited entry, plus one content block or annotation for regular files.
pub fn write_report<W: Write>(
    options: &DirscribeOptions,
    sink: W,
) -> Result<RunStats, DirscribeError> {
    ensure_root_dir(&options.root)?;
    let mut engine = Engine {
        report: ReportWriter::new(sink),
        stats: RunStats::default(),
    };
    engine.report.header(Local::now())?;
    engine.visit_dir(&options.root, 0)?;
    engine.report.flush()?;
    Ok(engine.stats)
}

fn ensure_root_dir(root: &Path) -> Result<(), DirscribeError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(DirscribeError::InvalidRoot(root.to_path_buf()))
    }
}

/// Owns the report sink and the counter set for one run.
struct Engine<W: Write> {
    report: ReportWriter<W>,
    stats: RunStats,
}

impl<W: Write> Engine<W> {
    fn visit_dir(&mut self, dir: &Path, depth: usize) -> Result<(), DirscribeError> {
        tracing::debug!("processing directory: {}", dir.display());
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("error accessing directory: {} - {}", dir.display(), e);
                self.report.directory_error(depth, dir, &e)?;
                self.stats.directory_errors += 1;
                return Ok(());
            }
        };
        for result in entries {
            match result {
                Ok(entry) => self.visit_entry(&entry, depth)?,
                Err(e) => {
                    // A failure partway through enumeration is still a
                    // failure listing the directory; the rest of this
                    // subtree contributes no entries.
                    tracing::error!("error accessing directory: {} - {}", dir.display(), e);
                    self.report.directory_error(depth, dir, &e)?;
                    self.stats.directory_errors += 1;
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn visit_entry(&mut self, entry: &DirEntry, depth: usize) -> Result<(), DirscribeError> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if classify::is_ignorable(&name) {
            tracing::debug!("ignoring item: {}", path.display());
            self.stats.ignored += 1;
            return Ok(());
        }
        // The entry's own type, symlinks not followed: a link to a directory
        // must classify as a symlink, never recursed.
        let kind = match entry.file_type() {
            Ok(ft) => EntryKind::from(ft),
            Err(e) => {
                tracing::error!("error processing item: {} - {}", path.display(), e);
                self.report.item_error(depth, &name, &e)?;
                self.stats.item_errors += 1;
                return Ok(());
            }
        };
        self.report.entry(depth, &name, kind)?;
        match kind {
            EntryKind::Symlink => {
                tracing::info!("skipping symlink: {}", path.display());
                self.stats.symlinks += 1;
            }
            EntryKind::Directory => {
                self.stats.directories += 1;
                self.visit_dir(&path, depth + 1)?;
            }
            EntryKind::File => {
                self.stats.files += 1;
                self.visit_file(&path, depth)?;
            }
            EntryKind::Other => {
                tracing::warn!("skipping unknown type item: {}", path.display());
                self.stats.unknown_types += 1;
            }
        }
        Ok(())
    }

    /// One terminal outcome per regular file: binary skip, full text content,
    /// or one of the two read-failure annotations.
    fn visit_file(&mut self, path: &Path, depth: usize) -> Result<(), DirscribeError> {
        if classify::is_binary(path) {
            tracing::info!("skipping binary file: {}", path.display());
            self.report.binary_skipped(depth)?;
            self.stats.binary_files += 1;
            return Ok(());
        }
        match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => {
                    tracing::debug!("read file: {}", path.display());
                    self.report.text_content(depth, &content)?;
                    self.stats.text_files += 1;
                }
                Err(_) => {
                    tracing::warn!("could not decode as UTF-8: {}", path.display());
                    self.report.unicode_error(depth)?;
                    self.stats.unicode_errors += 1;
                }
            },
            Err(e) => {
                tracing::error!("error reading file: {} - {}", path.display(), e);
                self.report.read_error(depth, &e)?;
                self.stats.read_errors += 1;
            }
        }
        Ok(())
    }
}
