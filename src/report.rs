//! Internal module for the report's line grammar.
//!
//! Every line the engine emits goes through [`ReportWriter`], which owns the
//! sink for the duration of a run. Structural lines are indented two spaces
//! per directory depth; annotation lines (content markers, skip notes, error
//! notes) sit two spaces past their entry's line.

use crate::error::DirscribeError;
use crate::types::EntryKind;
use chrono::{DateTime, Local};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

const REPORT_TITLE: &str = "File Structure and Content Report";
const CONTENT_START: &str = "[FILE CONTENT START]";
const CONTENT_END: &str = "[FILE CONTENT END]";
const BINARY_SKIPPED: &str = "[BINARY FILE - CONTENT SKIPPED]";
const UNICODE_NOTE: &str = "UnicodeDecodeError - Could not read as UTF-8";

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Writes report lines to the output sink.
///
/// Wraps every `write!` so the engine sees a single fatal error kind
/// ([`DirscribeError::WriteReport`]) for sink failures, keeping per-entry
/// filesystem errors and sink errors on separate tracks.
pub(crate) struct ReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn header(&mut self, generated_at: DateTime<Local>) -> Result<(), DirscribeError> {
        writeln!(self.sink, "{REPORT_TITLE}")
            .and_then(|_| {
                writeln!(
                    self.sink,
                    "Generated on: {}\n",
                    generated_at.format("%Y-%m-%d %H:%M:%S%.6f")
                )
            })
            .map_err(DirscribeError::WriteReport)
    }

    /// One structural line per visited entry; symlinks and unclassifiable
    /// entries carry their annotation on the same line.
    pub fn entry(
        &mut self,
        depth: usize,
        name: &str,
        kind: EntryKind,
    ) -> Result<(), DirscribeError> {
        let note = match kind {
            EntryKind::Directory | EntryKind::File => "",
            EntryKind::Symlink => " (symlink)",
            EntryKind::Other => " (unknown type)",
        };
        writeln!(self.sink, "{}- {}{}", indent(depth), name, note)
            .map_err(DirscribeError::WriteReport)
    }

    pub fn binary_skipped(&mut self, depth: usize) -> Result<(), DirscribeError> {
        writeln!(self.sink, "{}{}", indent(depth + 1), BINARY_SKIPPED)
            .map_err(DirscribeError::WriteReport)
    }

    /// The delimited content block. The closing marker is always preceded by
    /// a fresh newline, whether or not the content supplies one of its own.
    pub fn text_content(&mut self, depth: usize, content: &str) -> Result<(), DirscribeError> {
        let pad = indent(depth + 1);
        writeln!(self.sink, "{pad}{CONTENT_START}")
            .and_then(|_| self.sink.write_all(content.as_bytes()))
            .and_then(|_| writeln!(self.sink, "\n{pad}{CONTENT_END}"))
            .map_err(DirscribeError::WriteReport)
    }

    pub fn unicode_error(&mut self, depth: usize) -> Result<(), DirscribeError> {
        writeln!(
            self.sink,
            "{}[ERROR READING FILE]: {}",
            indent(depth + 1),
            UNICODE_NOTE
        )
        .map_err(DirscribeError::WriteReport)
    }

    pub fn read_error(
        &mut self,
        depth: usize,
        message: impl Display,
    ) -> Result<(), DirscribeError> {
        writeln!(
            self.sink,
            "{}[ERROR READING FILE]: {}",
            indent(depth + 1),
            message
        )
        .map_err(DirscribeError::WriteReport)
    }

    pub fn item_error(
        &mut self,
        depth: usize,
        name: &str,
        message: impl Display,
    ) -> Result<(), DirscribeError> {
        writeln!(
            self.sink,
            "{}[ERROR PROCESSING ITEM]: {} - {}",
            indent(depth + 1),
            name,
            message
        )
        .map_err(DirscribeError::WriteReport)
    }

    pub fn directory_error(
        &mut self,
        depth: usize,
        dir: &Path,
        message: impl Display,
    ) -> Result<(), DirscribeError> {
        writeln!(
            self.sink,
            "{}[ERROR ACCESSING DIRECTORY]: {} - {}",
            indent(depth + 1),
            dir.display(),
            message
        )
        .map_err(DirscribeError::WriteReport)
    }

    pub fn flush(&mut self) -> Result<(), DirscribeError> {
        self.sink.flush().map_err(DirscribeError::WriteReport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(write: impl FnOnce(&mut ReportWriter<Vec<u8>>)) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        write(&mut writer);
        String::from_utf8(writer.sink).unwrap()
    }

    #[test]
    fn header_layout() {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        let out = render(|w| w.header(ts).unwrap());
        assert_eq!(
            out,
            "File Structure and Content Report\nGenerated on: 2024-05-01 12:30:45.000000\n\n"
        );
    }

    #[test]
    fn entry_lines_by_kind() {
        let out = render(|w| {
            w.entry(0, "src", EntryKind::Directory).unwrap();
            w.entry(1, "main.rs", EntryKind::File).unwrap();
            w.entry(1, "link", EntryKind::Symlink).unwrap();
            w.entry(0, "dev0", EntryKind::Other).unwrap();
        });
        assert_eq!(
            out,
            "- src\n  - main.rs\n  - link (symlink)\n- dev0 (unknown type)\n"
        );
    }

    #[test]
    fn content_block_keeps_raw_bytes_and_closes_on_fresh_line() {
        let out = render(|w| w.text_content(0, "line one\nline two").unwrap());
        assert_eq!(
            out,
            "  [FILE CONTENT START]\nline one\nline two\n  [FILE CONTENT END]\n"
        );
    }

    #[test]
    fn content_block_with_trailing_newline_gets_a_blank_line() {
        // The closing marker's newline is unconditional, matching content
        // that already ends in one produces a visible blank line.
        let out = render(|w| w.text_content(1, "done\n").unwrap());
        assert_eq!(
            out,
            "    [FILE CONTENT START]\ndone\n\n    [FILE CONTENT END]\n"
        );
    }

    #[test]
    fn annotations_indent_past_their_entry() {
        let out = render(|w| {
            w.binary_skipped(2).unwrap();
            w.unicode_error(0).unwrap();
            w.read_error(0, "permission denied").unwrap();
            w.item_error(1, "weird", "lookup failed").unwrap();
            w.directory_error(0, Path::new("/locked"), "denied").unwrap();
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "      [BINARY FILE - CONTENT SKIPPED]",
                "  [ERROR READING FILE]: UnicodeDecodeError - Could not read as UTF-8",
                "  [ERROR READING FILE]: permission denied",
                "    [ERROR PROCESSING ITEM]: weird - lookup failed",
                "  [ERROR ACCESSING DIRECTORY]: /locked - denied",
            ]
        );
    }
}
