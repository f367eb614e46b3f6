//! Dry-run command runner: records commands instead of running them.

use std::cell::RefCell;
use std::io;

use crate::domain::ports::{CommandRunner, CommandSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub spec: CommandSpec,
    /// Launched without waiting
    pub detached: bool,
}

/// Pretends every command succeeds with exit code 0
#[derive(Debug, Default)]
pub struct DryRunRunner {
    commands: RefCell<Vec<RecordedCommand>>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<Option<i32>> {
        self.commands.borrow_mut().push(RecordedCommand {
            spec: spec.clone(),
            detached: false,
        });
        Ok(Some(0))
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> io::Result<()> {
        self.commands.borrow_mut().push(RecordedCommand {
            spec: spec.clone(),
            detached: true,
        });
        Ok(())
    }
}
