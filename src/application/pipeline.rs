//! Bootstrap pipeline
//!
//! Runs the six steps strictly in order, each one to completion before the
//! next starts:
//!
//! 1. Ensure the build configuration (`tsconfig.json`)
//! 2. Install development dependencies (waits for the package manager)
//! 3. Add the `build:ts` script
//! 4. Rewrite the entry import
//! 5. Move `App.js` into the source root
//! 6. Launch the compiler (not awaited)
//!
//! Step problems become `StepOutcome::Failed` and the pipeline moves on.
//! Only an invalid package list stops it.

use crate::domain::entities::build_config::ROOT_DIR;
use crate::domain::ports::{CommandRunner, FileSystem, PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::{OutcomeStatus, PipelineStage, SafePath, StepOutcome};
use crate::error::TsinitResult;

use super::compiler::trigger_compile;
use super::config_merger::ensure_build_config;
use super::context::ProjectContext;
use super::documents::{file_label, read_compiler_dir};
use super::entry_rewriter::rewrite_entry_import;
use super::package_installer::{install, parse_package_list, InstallOptions};
use super::script_patcher::ensure_build_script;
use super::source_relocator::relocate_application_source;

/// One finished step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub stage: PipelineStage,
    pub outcome: StepOutcome,
}

/// Result of a full pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub steps: Vec<StepRecord>,
}

impl PipelineReport {
    /// Last stage reached (`Idle` when nothing ran).
    pub fn final_stage(&self) -> PipelineStage {
        self.steps
            .last()
            .map(|s| s.stage)
            .unwrap_or(PipelineStage::Idle)
    }

    pub fn outcome(&self, stage: PipelineStage) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| &s.outcome)
    }

    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome.status() == status)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(OutcomeStatus::Failed) > 0
    }
}

/// The bootstrap pipeline over one project
pub struct Pipeline<'a> {
    ctx: &'a ProjectContext,
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    inherit_stdio: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        ctx: &'a ProjectContext,
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            ctx,
            fs,
            runner,
            inherit_stdio: true,
        }
    }

    /// Whether child processes share this terminal (off for `--json`).
    pub fn with_inherit_stdio(mut self, inherit: bool) -> Self {
        self.inherit_stdio = inherit;
        self
    }

    /// Progress label shown when `stage` starts.
    pub fn label(&self, stage: PipelineStage) -> String {
        let settings = self.ctx.settings();
        match stage {
            PipelineStage::Idle => "Starting".to_string(),
            PipelineStage::ConfigEnsured => format!(
                "Configuring {}...",
                file_label(&self.ctx.build_config_path())
            ),
            PipelineStage::Installing => match parse_package_list(&settings.install.packages) {
                Ok(packages) if !packages.is_empty() => {
                    format!("Installing {}...", packages.join(", "))
                }
                _ => "Installing dev dependencies...".to_string(),
            },
            PipelineStage::ScriptsPatched => "Editing npm scripts...".to_string(),
            PipelineStage::EntryRewritten => format!(
                "Changing import App from './App' in {}",
                settings.files.entry
            ),
            PipelineStage::SourceRelocated => {
                // Step 1 has run by now, so the build config names the real target.
                match read_compiler_dir(self.fs, &self.ctx.build_config_path(), ROOT_DIR)
                    .ok()
                    .and_then(|dir| SafePath::new(dir).ok())
                {
                    Some(root_dir) => format!(
                        "Moving {} to {}",
                        settings.files.app_source,
                        root_dir
                            .as_path()
                            .join(&settings.files.app_target_name)
                            .display()
                    ),
                    None => format!("Moving {} into the source root", settings.files.app_source),
                }
            }
            PipelineStage::CompileTriggered => {
                format!("Compiling with {}", settings.compile.command.join(" "))
            }
        }
    }

    /// Run every step in order.
    ///
    /// Returns `Err` only for fatal problems; the report then stops at the
    /// last completed step.
    pub fn run(&self, sink: &dyn PipelineEventSink) -> TsinitResult<PipelineReport> {
        let mut report = PipelineReport::default();
        let mut stage = PipelineStage::Idle;

        while let Some(next) = stage.next() {
            stage = next;
            sink.on_event(PipelineEvent::StepStarted {
                stage,
                label: self.label(stage),
            });

            let outcome = self.run_step(stage, sink)?;

            sink.on_event(PipelineEvent::StepFinished {
                stage,
                outcome: outcome.clone(),
            });
            report.steps.push(StepRecord { stage, outcome });
        }

        Ok(report)
    }

    fn run_step(
        &self,
        stage: PipelineStage,
        sink: &dyn PipelineEventSink,
    ) -> TsinitResult<StepOutcome> {
        let ctx = self.ctx;
        let settings = ctx.settings();

        let outcome = match stage {
            PipelineStage::Idle => StepOutcome::skipped("nothing to do"),
            PipelineStage::ConfigEnsured => ensure_build_config(
                self.fs,
                &ctx.build_config_path(),
                &settings.compiler_options.dirs(),
            ),
            PipelineStage::Installing => {
                let options =
                    InstallOptions::from_settings(&settings.install, ctx.root(), self.inherit_stdio);
                let packages = parse_package_list(&settings.install.packages)?;
                install(self.runner, &settings.install.packages, &options, sink)?
                    .into_step_outcome(&packages)
            }
            PipelineStage::ScriptsPatched => ensure_build_script(self.fs, &ctx.manifest_path()),
            PipelineStage::EntryRewritten => {
                rewrite_entry_import(self.fs, &ctx.entry_path(), &ctx.build_config_path())
            }
            PipelineStage::SourceRelocated => relocate_application_source(
                self.fs,
                ctx.root(),
                &ctx.build_config_path(),
                &settings.files,
            ),
            PipelineStage::CompileTriggered => trigger_compile(
                self.runner,
                &settings.compile,
                ctx.root(),
                self.inherit_stdio,
                sink,
            ),
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::ports::RecordingEventSink;
    use crate::error::TsinitError;
    use crate::infrastructure::fs::{DryRunFs, LocalFs};
    use crate::infrastructure::process::DryRunRunner;
    use std::path::Path;
    use tempfile::tempdir;

    const ENTRY: &str = "import { AppRegistry } from 'react-native';\n\
                         import App from './App';\n\
                         AppRegistry.registerComponent('demo', () => App);\n";

    fn scaffold(root: &Path) {
        std::fs::write(
            root.join("package.json"),
            r#"{"name": "demo", "version": "0.0.1", "scripts": {"start": "react-native start"}}"#,
        )
        .unwrap();
        std::fs::write(root.join("index.js"), ENTRY).unwrap();
        std::fs::write(root.join("App.js"), "export default () => null;\n").unwrap();
    }

    fn context(root: &Path, settings: Settings) -> ProjectContext {
        ProjectContext::load(root, settings, &LocalFs::new()).unwrap()
    }

    #[test]
    fn fresh_project_runs_every_step_in_order() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        let ctx = context(dir.path(), Settings::default());
        let fs = LocalFs::new();
        let runner = DryRunRunner::new();
        let sink = RecordingEventSink::new();

        let report = Pipeline::new(&ctx, &fs, &runner).run(&sink).unwrap();

        let stages: Vec<_> = report.steps.iter().map(|s| s.stage).collect();
        assert_eq!(stages, PipelineStage::STEPS.to_vec());
        assert_eq!(report.final_stage(), PipelineStage::CompileTriggered);
        assert_eq!(report.count(OutcomeStatus::Applied), 6);
        assert!(!report.has_failures());

        assert!(dir.path().join("tsconfig.json").is_file());
        assert!(dir.path().join("src/App.tsx").is_file());
        assert!(std::fs::read_to_string(dir.path().join("index.js"))
            .unwrap()
            .contains("import App from './build/App';"));

        let lines: Vec<_> = runner
            .commands()
            .iter()
            .map(|c| (c.spec.display_line(), c.detached))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("yarn add concurrently typescript -D".to_string(), false),
                ("npx tsc".to_string(), true),
            ]
        );
    }

    #[test]
    fn events_bracket_each_step() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        let ctx = context(dir.path(), Settings::default());
        let sink = RecordingEventSink::new();

        Pipeline::new(&ctx, &LocalFs::new(), &DryRunRunner::new())
            .run(&sink)
            .unwrap();

        let events = sink.events();
        assert_eq!(
            events[0],
            PipelineEvent::StepStarted {
                stage: PipelineStage::ConfigEnsured,
                label: "Configuring tsconfig.json...".into()
            }
        );
        let started = events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::StepStarted { .. }))
            .count();
        let finished = events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::StepFinished { .. }))
            .count();
        assert_eq!((started, finished), (6, 6));
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        let fs = LocalFs::new();

        let ctx = context(dir.path(), Settings::default());
        Pipeline::new(&ctx, &fs, &DryRunRunner::new())
            .run(&RecordingEventSink::new())
            .unwrap();
        let tsconfig = std::fs::read(dir.path().join("tsconfig.json")).unwrap();
        let manifest = std::fs::read(dir.path().join("package.json")).unwrap();
        let entry = std::fs::read(dir.path().join("index.js")).unwrap();

        let ctx = context(dir.path(), Settings::default());
        let report = Pipeline::new(&ctx, &fs, &DryRunRunner::new())
            .run(&RecordingEventSink::new())
            .unwrap();

        for stage in [
            PipelineStage::ConfigEnsured,
            PipelineStage::ScriptsPatched,
            PipelineStage::EntryRewritten,
            PipelineStage::SourceRelocated,
        ] {
            assert!(report.outcome(stage).unwrap().is_skipped(), "{stage}");
        }
        assert_eq!(std::fs::read(dir.path().join("tsconfig.json")).unwrap(), tsconfig);
        assert_eq!(std::fs::read(dir.path().join("package.json")).unwrap(), manifest);
        assert_eq!(std::fs::read(dir.path().join("index.js")).unwrap(), entry);
    }

    #[test]
    fn malformed_build_config_does_not_stop_the_pipeline() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        std::fs::write(dir.path().join("tsconfig.json"), "{ nope").unwrap();
        let ctx = context(dir.path(), Settings::default());

        let report = Pipeline::new(&ctx, &LocalFs::new(), &DryRunRunner::new())
            .run(&RecordingEventSink::new())
            .unwrap();

        assert_eq!(report.final_stage(), PipelineStage::CompileTriggered);
        assert!(report.outcome(PipelineStage::ConfigEnsured).unwrap().is_failed());
        assert!(report.outcome(PipelineStage::ScriptsPatched).unwrap().is_applied());
        // Both need values from the broken config
        assert!(report.outcome(PipelineStage::EntryRewritten).unwrap().is_failed());
        assert!(report.outcome(PipelineStage::SourceRelocated).unwrap().is_failed());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tsconfig.json")).unwrap(),
            "{ nope"
        );
    }

    #[test]
    fn invalid_package_list_aborts_before_later_steps() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        let mut settings = Settings::default();
        settings.install.packages = toml::Value::String("typescript".into());
        let ctx = context(dir.path(), settings);
        let runner = DryRunRunner::new();
        let sink = RecordingEventSink::new();

        let err = Pipeline::new(&ctx, &LocalFs::new(), &runner)
            .run(&sink)
            .unwrap_err();

        assert!(matches!(err, TsinitError::InvalidPackageList { .. }));
        assert!(runner.commands().is_empty());
        assert!(!std::fs::read_to_string(dir.path().join("package.json"))
            .unwrap()
            .contains("build:ts"));
        assert!(dir.path().join("App.js").exists());
        assert!(!sink
            .events()
            .iter()
            .any(|e| matches!(e, PipelineEvent::StepStarted { stage: PipelineStage::ScriptsPatched, .. })));
    }

    #[test]
    fn dry_run_leaves_the_project_alone() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        let ctx = context(dir.path(), Settings::default());
        let fs = DryRunFs::new(LocalFs::new());

        let report = Pipeline::new(&ctx, &fs, &DryRunRunner::new())
            .run(&RecordingEventSink::new())
            .unwrap();

        assert!(!report.has_failures());
        assert!(!dir.path().join("tsconfig.json").exists());
        assert!(!dir.path().join("src").exists());
        assert!(dir.path().join("App.js").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.js")).unwrap(),
            ENTRY
        );

        let changed: Vec<_> = fs
            .planned_changes()
            .into_iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(changed, vec!["index.js", "package.json", "tsconfig.json"]);
        assert_eq!(fs.planned_moves().len(), 1);
    }

    #[test]
    fn labels_follow_settings() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path(), Settings::default());
        let fs = LocalFs::new();
        let runner = DryRunRunner::new();
        let pipeline = Pipeline::new(&ctx, &fs, &runner);

        assert_eq!(
            pipeline.label(PipelineStage::Installing),
            "Installing concurrently, typescript..."
        );
        assert_eq!(
            pipeline.label(PipelineStage::SourceRelocated),
            "Moving App.js into the source root"
        );
        assert_eq!(
            pipeline.label(PipelineStage::CompileTriggered),
            "Compiling with npx tsc"
        );
    }

    #[test]
    fn relocation_label_uses_root_dir_from_build_config() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{"compilerOptions": {"rootDir": "app", "outDir": "build"}}"#,
        )
        .unwrap();
        let ctx = context(dir.path(), Settings::default());
        let fs = LocalFs::new();
        let runner = DryRunRunner::new();
        let pipeline = Pipeline::new(&ctx, &fs, &runner);

        assert_eq!(
            pipeline.label(PipelineStage::SourceRelocated),
            format!("Moving App.js to {}", Path::new("app").join("App.tsx").display())
        );
    }
}
