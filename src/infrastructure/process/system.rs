//! System command runner backed by `std::process`.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, CommandSpec};

/// Node tooling ships `.cmd` shims on Windows; `CreateProcess` does not
/// resolve them from a bare name.
pub fn platform_program(program: &str) -> String {
    const SHIMMED: &[&str] = &["yarn", "npm", "npx", "pnpm"];
    if cfg!(windows) && SHIMMED.contains(&program) {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

/// Runs commands on the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(platform_program(&spec.program));
        cmd.args(&spec.args).current_dir(&spec.cwd);

        if spec.inherit_stdio {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<Option<i32>> {
        let status = Self::command(spec).status()?;
        Ok(status.code())
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> io::Result<()> {
        // The child keeps running after this handle is dropped.
        Self::command(spec).spawn().map(|_child| ())
    }
}
