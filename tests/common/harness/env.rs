//! Isolated test environment with temp directory.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::KeepclipCommand;

/// Isolated test environment with a temporary directory for capture files.
///
/// The directory is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Returns the path of the environment directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes a capture file into the environment and returns its path.
    pub fn write_capture(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write capture file");
        path
    }

    /// Creates a command builder for the `keepclip` binary.
    pub fn cmd(&self) -> KeepclipCommand {
        KeepclipCommand::new()
    }
}
