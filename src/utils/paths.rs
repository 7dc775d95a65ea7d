use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::utils::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};

/// Resolved input/output locations for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
}

impl PipelineConfig {
    /// Resolve the run's paths, falling back to the fixed project layout
    /// relative to the current working directory.
    pub fn resolve(input_dir: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_file: output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        }
    }

    /// Create the output file's parent directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
