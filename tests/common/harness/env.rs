//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::{MdpaneCommand, TestDocument};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands built from the environment read their config from inside it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the working directory
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path to the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns a path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Returns the config file path passed to every command.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config.toml", content)
    }

    /// Writes a test document and returns its path.
    pub fn add_document(&self, name: &str, doc: &TestDocument) -> PathBuf {
        self.write_file(name, &doc.to_markdown())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the test environment as raw bytes.
    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.root.join(name)).expect("Failed to read file")
    }

    /// Creates an MdpaneCommand configured for this test environment.
    pub fn cmd(&self) -> MdpaneCommand {
        MdpaneCommand::new().config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_document() {
        let env = TestEnv::new();
        let path = env.add_document("doc.md", &TestDocument::new().heading(1, "Hi"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Hi\n");
    }

    #[test]
    fn test_env_cmd_uses_local_config() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        assert_eq!(cmd.get_args()[0], "--config");
        assert_eq!(cmd.get_args()[1], env.config_path().to_string_lossy());
    }
}
