//! Init command - bootstrap TypeScript into the project
//!
//! Resolves settings, then runs the pipeline against the real disk or, with
//! `--dry-run`, against an in-memory overlay that records what would
//! change.

use std::path::Path;

use anyhow::{Context, Result};

use tsinit::config::{self, ResolvedSettings};
use tsinit::infrastructure::{DryRunFs, DryRunRunner, LocalFs, SystemRunner};
use tsinit::{
    CommandRunner, FileSystem, OutcomeStatus, Pipeline, PipelineEventSink, PipelineReport,
    ProjectContext,
};

use super::resolve_project_dir;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, PlannedEvent, StartEvent};
use crate::ui::output::{print_config_warnings, print_env_warnings};
use crate::ui::views::init::{
    relative, render_dry_run_plan, render_init_header, render_init_summary, ConsoleEventSink,
    JsonEventSink,
};

const COMMAND: &str = "init";

pub fn cmd_init(path: &Path, dry_run: bool, ui: &UiContext) -> Result<()> {
    let root = resolve_project_dir(path)?;

    let resolved = config::resolve(&root).context("failed to load tsinit settings")?;
    print_config_warnings(&resolved.warnings, ui);
    print_env_warnings(&resolved.env_warnings, ui);

    if dry_run {
        let fs = DryRunFs::new(LocalFs::new());
        let runner = DryRunRunner::new();
        let (ctx, report) = run_pipeline(&root, resolved, &fs, &runner, true, ui)?;

        let changes = fs.planned_changes();
        let dirs = fs.planned_dirs();
        let moves = fs.planned_moves();
        let commands = runner.commands();
        if ui.json {
            for change in &changes {
                emit_event(&PlannedEvent::write(relative(ctx.root(), &change.path)))?;
            }
            for dir in &dirs {
                emit_event(&PlannedEvent::create_dir(relative(ctx.root(), dir)))?;
            }
            for planned in &moves {
                emit_event(&PlannedEvent::rename(
                    relative(ctx.root(), &planned.from),
                    relative(ctx.root(), &planned.to),
                ))?;
            }
        } else {
            print!(
                "{}",
                render_dry_run_plan(ctx.root(), &changes, &dirs, &moves, &commands, ui)
            );
        }
        finish(&report, true, ui)
    } else {
        let fs = LocalFs::new();
        let runner = SystemRunner::new();
        let (_, report) = run_pipeline(&root, resolved, &fs, &runner, false, ui)?;
        finish(&report, false, ui)
    }
}

fn run_pipeline(
    root: &Path,
    resolved: ResolvedSettings,
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
    dry_run: bool,
    ui: &UiContext,
) -> Result<(ProjectContext, PipelineReport)> {
    let settings_source = resolved.source.describe();
    let ctx = ProjectContext::load(root.to_path_buf(), resolved.settings, fs)?;

    if ui.json {
        emit_event(&StartEvent::new(
            COMMAND,
            ctx.project_label(),
            settings_source,
            dry_run,
        ))?;
    } else {
        print!(
            "{}",
            render_init_header(&ctx.project_label(), ctx.root(), &settings_source, dry_run, ui)
        );
        println!();
    }

    let sink: Box<dyn PipelineEventSink> = if ui.json {
        Box::new(JsonEventSink)
    } else {
        Box::new(ConsoleEventSink::new(*ui))
    };

    let report = Pipeline::new(&ctx, fs, runner)
        .with_inherit_stdio(!ui.json)
        .run(sink.as_ref())?;

    Ok((ctx, report))
}

fn finish(report: &PipelineReport, dry_run: bool, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&CompleteEvent::new(
            COMMAND,
            report.count(OutcomeStatus::Applied),
            report.count(OutcomeStatus::Skipped),
            report.count(OutcomeStatus::Failed),
        ))?;
    } else {
        println!();
        print!("{}", render_init_summary(report, dry_run, ui));
    }
    Ok(())
}
