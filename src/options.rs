use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the generated report file.
pub const DEFAULT_OUTPUT_NAME: &str = "project_structure_and_content.txt";

/// Inputs for one report run.
///
/// The classifier tables are fixed constants (see [`crate::classify`]); the
/// only per-run knobs are where to start and where the report goes. The
/// output path is interpreted as given, relative paths resolving against the
/// invoking directory rather than `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirscribeOptions {
    pub root: PathBuf,
    pub output: PathBuf,
}

impl Default for DirscribeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_NAME),
        }
    }
}

#[derive(Debug, Default)]
pub struct DirscribeBuilder {
    options: DirscribeOptions,
}

impl DirscribeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirscribeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }

    pub fn build(self) -> DirscribeOptions {
        self.options
    }
}
