use std::path::Path;
use std::process::{Command, Output};

use crate::errors::VbundleError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments and working directory.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, VbundleError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(Path::new(dir));
        }
        cmd.output().map_err(VbundleError::from)
    }

    /// Execute the command and return trimmed stdout, or `None` when the
    /// program is missing, exits non-zero, or prints nothing.
    pub fn stdout_line(&self) -> Option<String> {
        let output = self.exec().ok()?;
        if !output.status.success() {
            return None;
        }
        let line = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}
