//! CommandRunner port - abstraction over external processes
//!
//! The installer waits for its package manager; the compiler is launched
//! and left running. Both go through this trait.

use std::io;
use std::path::{Path, PathBuf};

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Pass the parent's stdin/stdout/stderr through to the child
    pub inherit_stdio: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            inherit_stdio: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn inherit_stdio(mut self, inherit: bool) -> Self {
        self.inherit_stdio = inherit;
        self
    }

    /// Shell-like rendering for progress output (not for execution).
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs external commands
pub trait CommandRunner {
    /// Run to completion and return the exit code (`None` when killed by a signal).
    ///
    /// `Err` means the program could not be launched at all.
    fn run(&self, spec: &CommandSpec) -> io::Result<Option<i32>>;

    /// Launch without waiting for the process to exit.
    fn spawn_detached(&self, spec: &CommandSpec) -> io::Result<()>;
}
