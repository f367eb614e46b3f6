//! Step 2: install development dependencies.
//!
//! Runs `<primary> add <packages…> -D` and, depending on the fallback
//! policy, retries with `<fallback> install <packages…> -D`. The pipeline
//! waits for the package manager to exit; there is no timeout.

use std::path::{Path, PathBuf};

use crate::config::InstallConfig;
use crate::domain::ports::{CommandRunner, CommandSpec, PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::{FallbackPolicy, PipelineStage, StepOutcome};
use crate::error::{TsinitError, TsinitResult};

/// How to run the package managers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    pub cwd: PathBuf,
    pub inherit_stdio: bool,
    pub primary: String,
    pub fallback: String,
    pub policy: FallbackPolicy,
}

impl InstallOptions {
    pub fn from_settings(install: &InstallConfig, cwd: &Path, inherit_stdio: bool) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            inherit_stdio,
            primary: install.primary.clone(),
            fallback: install.fallback.clone(),
            policy: install.fallback_policy,
        }
    }
}

/// How an install ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Empty package list; no process was started
    Nothing,
    /// A package manager ran to completion
    Completed {
        manager: String,
        exit_code: Option<i32>,
        fell_back: bool,
    },
    /// Neither package manager could be launched
    Unavailable { reason: String },
}

impl InstallOutcome {
    pub fn into_step_outcome(self, packages: &[String]) -> StepOutcome {
        match self {
            InstallOutcome::Nothing => StepOutcome::skipped("no packages to install"),
            InstallOutcome::Completed {
                manager,
                exit_code: Some(0),
                fell_back,
            } => {
                let via = if fell_back {
                    format!("{} (fallback)", manager)
                } else {
                    manager
                };
                StepOutcome::applied(format!("installed {} via {}", packages.join(", "), via))
            }
            InstallOutcome::Completed {
                manager,
                exit_code: Some(code),
                ..
            } => StepOutcome::failed(format!("{} exited with status {}", manager, code)),
            InstallOutcome::Completed {
                manager,
                exit_code: None,
                ..
            } => StepOutcome::failed(format!("{} was terminated by a signal", manager)),
            InstallOutcome::Unavailable { reason } => StepOutcome::failed(reason),
        }
    }
}

/// Validate the configured package list.
///
/// Anything but an array of strings is rejected; this is the one fatal
/// input error of the pipeline.
pub fn parse_package_list(value: &toml::Value) -> TsinitResult<Vec<String>> {
    let items = match value {
        toml::Value::Array(items) => items,
        other => {
            return Err(TsinitError::InvalidPackageList {
                found: describe(other).to_string(),
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            toml::Value::String(name) => Ok(name.clone()),
            other => Err(TsinitError::InvalidPackageList {
                found: format!("an array containing {}", describe(other)),
            }),
        })
        .collect()
}

fn describe(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "a string",
        toml::Value::Integer(_) => "an integer",
        toml::Value::Float(_) => "a float",
        toml::Value::Boolean(_) => "a boolean",
        toml::Value::Datetime(_) => "a datetime",
        toml::Value::Array(_) => "an array",
        toml::Value::Table(_) => "a table",
    }
}

/// `add` for yarn/pnpm, `install` for npm.
fn install_verb(manager: &str) -> &'static str {
    let base = Path::new(manager)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(manager);
    if base.eq_ignore_ascii_case("npm") {
        "install"
    } else {
        "add"
    }
}

fn manager_command(manager: &str, packages: &[String], options: &InstallOptions) -> CommandSpec {
    CommandSpec::new(manager, &options.cwd)
        .arg(install_verb(manager))
        .args(packages.iter().cloned())
        .arg("-D")
        .inherit_stdio(options.inherit_stdio)
}

/// Install `packages` as development dependencies.
///
/// Fails before launching anything if `packages` is not an array of
/// strings. Completion is signalled once, by returning.
pub fn install(
    runner: &dyn CommandRunner,
    packages: &toml::Value,
    options: &InstallOptions,
    sink: &dyn PipelineEventSink,
) -> TsinitResult<InstallOutcome> {
    let packages = parse_package_list(packages)?;
    if packages.is_empty() {
        return Ok(InstallOutcome::Nothing);
    }

    let launch = |manager: &str| {
        let spec = manager_command(manager, &packages, options);
        sink.on_event(PipelineEvent::CommandLaunched {
            stage: PipelineStage::Installing,
            command: spec.display_line(),
        });
        runner.run(&spec)
    };

    let primary_error = match launch(&options.primary) {
        Ok(code) if !options.policy.falls_back_on_exit(code) => {
            return Ok(InstallOutcome::Completed {
                manager: options.primary.clone(),
                exit_code: code,
                fell_back: false,
            });
        }
        Ok(code) => Err(code),
        Err(e) => Ok(e),
    };

    match (launch(&options.fallback), primary_error) {
        (Ok(code), _) => Ok(InstallOutcome::Completed {
            manager: options.fallback.clone(),
            exit_code: code,
            fell_back: true,
        }),
        // The primary did run; its result stands.
        (Err(_), Err(primary_code)) => Ok(InstallOutcome::Completed {
            manager: options.primary.clone(),
            exit_code: primary_code,
            fell_back: false,
        }),
        (Err(fallback_err), Ok(primary_err)) => Ok(InstallOutcome::Unavailable {
            reason: format!(
                "could not run {} ({}) or {} ({})",
                options.primary, primary_err, options.fallback, fallback_err
            ),
        }),
    }
}
