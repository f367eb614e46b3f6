use std::path::Path;

use tsinit::infrastructure::fs::{PlannedChange, PlannedMove};
use tsinit::infrastructure::process::RecordedCommand;
use tsinit::{OutcomeStatus, PipelineEvent, PipelineEventSink, PipelineReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::components::diff::render_unified_diff_with_line_numbers;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CommandEvent, StepFinishedEvent, StepStartedEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn render_init_header(
    project: &str,
    root: &Path,
    settings: &str,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let mut header = CommandHeader::new(Icon::Init, "tsinit");
    header.add("Project", project);
    header.add("Path", root.display().to_string());
    if ui.verbose > 0 {
        header.add("Settings", settings);
    }
    if dry_run {
        header.add("Mode", "dry run (nothing is written or run)");
    }
    header.render(ui.color, ui.unicode)
}

pub fn render_init_summary(report: &PipelineReport, dry_run: bool, ui: &UiContext) -> String {
    ResultSummary::new(
        report.count(OutcomeStatus::Applied),
        report.count(OutcomeStatus::Skipped),
        report.count(OutcomeStatus::Failed),
    )
    .dry_run(dry_run)
    .render(ui.color, ui.unicode)
}

/// Everything a dry run would have done: diffs, moves, directories and
/// commands, in that order.
pub fn render_dry_run_plan(
    root: &Path,
    changes: &[PlannedChange],
    dirs: &[std::path::PathBuf],
    moves: &[PlannedMove],
    commands: &[RecordedCommand],
    ui: &UiContext,
) -> String {
    let mut out = String::new();
    let rule_width = usize::from(ui.caps.width).clamp(20, 72);

    out.push_str(&format!(
        "\n{} {}\n",
        Icon::Diff.colored(ui.color, ui.unicode),
        ColoredText::info("Planned changes").bold().render(ui.color)
    ));
    out.push_str(&ColoredText::dim("-".repeat(rule_width)).render(ui.color));
    out.push('\n');

    for change in changes {
        out.push_str(&render_unified_diff_with_line_numbers(
            &relative(root, &change.path),
            change.before.as_deref(),
            &change.after,
            ui.color,
        ));
        out.push('\n');
    }

    let arrow = Icon::Arrow.colored(ui.color, ui.unicode);
    for dir in dirs {
        out.push_str(&format!("{} mkdir {}\n", arrow, relative(root, dir)));
    }
    for planned in moves {
        out.push_str(&format!(
            "{} move {} -> {}\n",
            arrow,
            relative(root, &planned.from),
            relative(root, &planned.to)
        ));
    }
    for command in commands {
        let suffix = if command.detached { " (background)" } else { "" };
        out.push_str(&format!(
            "{} run {}{}\n",
            arrow,
            command.spec.display_line(),
            suffix
        ));
    }

    if changes.is_empty() && dirs.is_empty() && moves.is_empty() && commands.is_empty() {
        out.push_str("nothing to do\n");
    }
    out
}

/// Project-relative display path with `/` separators.
pub fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Prints colored progress lines as the pipeline runs
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn format(&self, event: &PipelineEvent) -> Option<String> {
        let ui = &self.ui;
        match event {
            PipelineEvent::StepStarted { stage, label } => {
                Some(ColoredText::new(label.as_str(), theme::stage_color(*stage)).render(ui.color))
            }
            PipelineEvent::CommandLaunched { command, .. } if ui.verbose > 0 => Some(format!(
                "  {} {}",
                Icon::Arrow.colored(ui.color, ui.unicode),
                ColoredText::dim(command.as_str()).render(ui.color)
            )),
            PipelineEvent::CommandLaunched { .. } => None,
            PipelineEvent::StepFinished { outcome, .. } => {
                let status = outcome.status();
                let detail = match status {
                    OutcomeStatus::Failed => ColoredText::warning(outcome.detail()),
                    OutcomeStatus::Skipped => ColoredText::dim(outcome.detail()),
                    OutcomeStatus::Applied => ColoredText::plain(outcome.detail()),
                };
                Some(format!(
                    "  {} {}",
                    Icon::for_outcome(status).colored(ui.color, ui.unicode),
                    detail.render(ui.color)
                ))
            }
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        if let Some(line) = self.format(&event) {
            println!("{}", line);
        }
    }
}

/// Writes each pipeline event as one NDJSON line
pub struct JsonEventSink;

impl JsonEventSink {
    fn write_event<T: serde::Serialize>(&self, event: &T) {
        let _ = emit_event(event);
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match &event {
            PipelineEvent::StepStarted { stage, label } => {
                self.write_event(&StepStartedEvent::new(stage.step_id(), label))
            }
            PipelineEvent::CommandLaunched { stage, command } => {
                self.write_event(&CommandEvent::new(stage.step_id(), command))
            }
            PipelineEvent::StepFinished { stage, outcome } => {
                self.write_event(&StepFinishedEvent::new(
                    stage.step_id(),
                    outcome.status().as_str(),
                    outcome.detail(),
                ))
            }
        }
    }
}
