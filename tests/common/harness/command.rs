//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `mdpane` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct MdpaneCommand {
    args: Vec<String>,
}

impl MdpaneCommand {
    /// Creates a new command for the `mdpane` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--config` option so the user's real config is never read.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Adds a single path argument.
    pub fn path(self, path: &Path) -> Self {
        self.args([path.to_string_lossy()])
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("mdpane").expect("Failed to find mdpane binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `render` command on a document.
    pub fn render(self, file: &Path) -> Self {
        self.args(["render"]).path(file)
    }

    /// Configures for the `export` command on a document.
    pub fn export(self, file: &Path, output: &Path) -> Self {
        self.args(["export"]).path(file).args(["-o"]).path(output)
    }

    /// Configures for the `themes` command.
    pub fn themes(self) -> Self {
        self.args(["themes"])
    }

    /// Configures for the `stats` command on a document.
    pub fn stats(self, file: &Path) -> Self {
        self.args(["stats"]).path(file)
    }

    // ===========================================
    // Option Shortcuts
    // ===========================================

    /// Adds `--theme <id>` to a render or stats command.
    pub fn theme(self, id: &str) -> Self {
        self.args(["--theme", id])
    }

    /// Adds `--format <fmt>` to an export command.
    pub fn export_format(self, format: &str) -> Self {
        self.args(["--format", format])
    }

    /// Adds `--format json` to a themes or stats command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--output-format json` to an export command.
    pub fn output_json_format(self) -> Self {
        self.args(["--output-format", "json"])
    }
}

impl Default for MdpaneCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        MdpaneCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config() {
        let temp = TempDir::new().unwrap();
        let cmd = MdpaneCommand::new().config(&temp.path().join("config.toml"));
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert!(args[1].ends_with("config.toml"));
    }

    #[test]
    fn test_command_output_success() {
        let output = MdpaneCommand::new().args(["--help"]).output_success();
        assert!(output.contains("mdpane") || output.contains("markdown"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = MdpaneCommand::new().themes().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"themes".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
