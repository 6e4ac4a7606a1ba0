//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `keepclip` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct KeepclipCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl KeepclipCommand {
    /// Creates a new command for the `keepclip` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
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

    /// Pipes the given text into the command's stdin.
    pub fn with_stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("keepclip").expect("Failed to find keepclip binary");
        cmd.args(&self.args);
        if let Some(stdin) = self.stdin {
            cmd.write_stdin(stdin);
        }
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

    /// Configures for the `convert` command with a capture file.
    pub fn convert(self, file: &Path) -> Self {
        self.args(["convert", &file.to_string_lossy()])
    }

    /// Configures for the `convert` command reading stdin.
    pub fn convert_stdin(self) -> Self {
        self.args(["convert"])
    }

    /// Configures for the `formats` command.
    pub fn formats(self) -> Self {
        self.args(["formats"])
    }

    /// Sets the export format flag.
    pub fn format(self, format: &str) -> Self {
        self.args(["--format", format])
    }

    /// Sets the capture input format flag.
    pub fn input_format(self, format: &str) -> Self {
        self.args(["--input-format", format])
    }
}
