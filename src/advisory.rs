//! Pre-run advisory checks.
//!
//! Both checks are log-only guidance for the operator: they never fail, never
//! block a run, and have no effect on traversal. The binary runs them before
//! validating the root.

use std::process::Command;

/// Logs the operating-system family the tool was built for and returns it.
///
/// Windows, Linux, and macOS are the known-good platforms; anything else gets
/// a warning to check for platform quirks.
pub fn check_os() -> &'static str {
    let os = std::env::consts::OS;
    match os {
        "windows" | "linux" | "macos" => tracing::info!("operating system: {}", os),
        other => tracing::warn!("operating system: {} - please check for known issues", other),
    }
    os
}

/// Returns true when a working `git lfs` is on the PATH.
///
/// Shells out to `git lfs version` and accepts only a successful exit whose
/// stdout carries the `git-lfs/` banner. A missing git binary, a nonzero
/// exit, or unrecognizable output all count as not installed.
pub fn git_lfs_installed() -> bool {
    match Command::new("git").args(["lfs", "version"]).output() {
        Ok(output) => {
            let installed = output.status.success()
                && String::from_utf8_lossy(&output.stdout).contains("git-lfs/");
            if installed {
                tracing::info!("git LFS is installed");
            } else {
                tracing::warn!("git LFS is not installed or not detected correctly");
            }
            installed
        }
        Err(e) => {
            tracing::warn!("git LFS is not installed or not found in path: {}", e);
            false
        }
    }
}
