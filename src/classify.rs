//! Entry classification: the fixed ignore tables and the binary/text probe.
//!
//! Both decisions are pure given the filesystem: [`is_ignorable`] looks at
//! nothing but the entry name, and [`is_binary`] reads at most the first 512
//! bytes of the file it is asked about.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extensions always treated as binary, checked case-insensitively before any
/// content is read.
pub const BINARY_EXTENSIONS: &[&str] = &[
    ".bin", ".exe", ".dll", ".so", ".o", ".class", ".jar", ".zip", ".rar", ".7z", ".gz", ".bz2",
    ".xz", ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".ico", ".mp3", ".wav", ".mp4", ".avi",
    ".mov", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".db", ".sqlite", ".mdb",
    ".dat", ".idx", ".woff", ".woff2", ".ttf", ".otf", ".eot",
];

/// Names excluded from the report by exact, case-sensitive match.
pub const IGNORED_NAMES: &[&str] = &[
    ".pyc",
    "__pycache__",
    "Thumbs.db",
    "desktop.ini",
    ".DS_Store",
    "$RECYCLE.BIN",
];

/// Suffix patterns excluded from the report; the leading `*` is stripped and
/// the remainder compared as a literal, case-sensitive suffix.
pub const IGNORED_SUFFIXES: &[&str] = &["*.log", "*.bak", "*.tmp", "*.swp", "*.swo"];

/// Bytes inspected by the UTF-8 content probe.
const PROBE_LEN: usize = 512;

/// Returns true when a bare entry name is excluded from the report entirely.
///
/// The decision depends on the name alone, never on the path or the entry's
/// type, so an ignorable name excludes a whole directory subtree as readily
/// as a single file.
///
/// ```
/// use dirscribe::is_ignorable;
///
/// assert!(is_ignorable("__pycache__"));
/// assert!(is_ignorable("debug.log"));
/// assert!(!is_ignorable("main.rs"));
/// ```
pub fn is_ignorable(name: &str) -> bool {
    if IGNORED_NAMES.contains(&name) {
        return true;
    }
    IGNORED_SUFFIXES.iter().any(|pat| name.ends_with(&pat[1..]))
}

/// Decides whether a regular file should be reported as binary.
///
/// Two tiers, in order:
/// 1. A recognized binary extension classifies the file immediately, without
///    touching its content. The extension list takes precedence over the
///    probe: an archive that happens to begin with valid UTF-8 still counts
///    as binary.
/// 2. Otherwise the first [`PROBE_LEN`] bytes are checked for UTF-8
///    validity. An invalid sequence means binary; a clean decode means text.
///
/// Probe failures of any other kind (permission denied, vanished file) fail
/// open as text, leaving the real error to surface when the full read is
/// attempted.
pub fn is_binary(path: &Path) -> bool {
    if has_binary_extension(path) {
        tracing::debug!("binary by extension: {}", path.display());
        return true;
    }
    match probe_is_text(path) {
        Ok(is_text) => !is_text,
        Err(e) => {
            tracing::debug!("content probe failed for {}: {}", path.display(), e);
            false
        }
    }
}

fn has_binary_extension(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => BINARY_EXTENSIONS
            .iter()
            .any(|known| known[1..].eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Reads the head of the file and checks it decodes as UTF-8.
///
/// A multi-byte sequence cut off at the probe boundary is not evidence of
/// binary content when the file continues past the window; only a sequence
/// truncated by real end-of-file counts as invalid. The file length comes
/// from the already-open handle, so no content beyond the probe is read.
fn probe_is_text(path: &Path) -> std::io::Result<bool> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut head = Vec::with_capacity(PROBE_LEN);
    file.take(PROBE_LEN as u64).read_to_end(&mut head)?;
    match std::str::from_utf8(&head) {
        Ok(_) => Ok(true),
        Err(e) => Ok(e.error_len().is_none() && (head.len() as u64) < len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn ignorable_exact_names() {
        assert!(is_ignorable("__pycache__"));
        assert!(is_ignorable(".DS_Store"));
        assert!(is_ignorable("$RECYCLE.BIN"));
        assert!(is_ignorable(".pyc"));
    }

    #[test]
    fn ignorable_suffixes() {
        assert!(is_ignorable("build.log"));
        assert!(is_ignorable("config.bak"));
        assert!(is_ignorable("scratch.tmp"));
        assert!(is_ignorable(".file.swp"));
        // The bare suffix is itself a matching name.
        assert!(is_ignorable(".log"));
    }

    #[test]
    fn ignorable_is_case_sensitive() {
        assert!(is_ignorable("Thumbs.db"));
        assert!(!is_ignorable("thumbs.db"));
        assert!(!is_ignorable("BUILD.LOG"));
    }

    #[test]
    fn ignorable_rejects_ordinary_names() {
        assert!(!is_ignorable("main.rs"));
        assert!(!is_ignorable("Cargo.toml"));
        assert!(!is_ignorable("pycache"));
        assert!(!is_ignorable("catalog")); // does not end in ".log"
    }

    #[test]
    fn extension_match_skips_the_probe() {
        let dir = tempdir().unwrap();
        // Valid UTF-8 content, but the extension wins.
        let path = dir.path().join("photo.PNG");
        fs::write(&path, "plain text pretending to be an image").unwrap();
        assert!(is_binary(&path));
    }

    #[test]
    fn unrecognized_extension_with_text_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.rst");
        fs::write(&path, "just words").unwrap();
        assert!(!is_binary(&path));
    }

    #[test]
    fn no_extension_falls_through_to_probe() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, "all:\n\ttrue\n").unwrap();
        assert!(!is_binary(&path));
    }

    #[test]
    fn invalid_bytes_in_probe_window() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mystery.xyz");
        fs::write(&path, [0x48, 0x65, 0x6c, 0x80, 0x6f]).unwrap();
        assert!(is_binary(&path));
    }

    #[test]
    fn multibyte_split_at_probe_boundary_is_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("split.txt");
        // 511 ASCII bytes, then a two-byte char straddling offset 512.
        let mut bytes = vec![b'a'; 511];
        bytes.extend_from_slice("é".as_bytes());
        bytes.extend_from_slice(b" and more text");
        fs::write(&path, &bytes).unwrap();
        assert!(!is_binary(&path));
    }

    #[test]
    fn truncated_sequence_at_end_of_file_is_binary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cut.short");
        // File genuinely ends mid-sequence: 0xC3 opens a two-byte char.
        let mut bytes = vec![b'a'; 10];
        bytes.push(0xC3);
        fs::write(&path, &bytes).unwrap();
        assert!(is_binary(&path));
    }

    #[test]
    fn empty_file_is_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, "").unwrap();
        assert!(!is_binary(&path));
    }

    #[test]
    fn probe_failure_fails_open() {
        let path = Path::new("definitely/not/there.xyz");
        assert!(!is_binary(path));
    }
}
