use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line tally printed after the last step
#[derive(Debug, Clone, Default)]
pub struct ResultSummary {
    applied: usize,
    skipped: usize,
    failed: usize,
    dry_run: bool,
}

impl ResultSummary {
    pub fn new(applied: usize, skipped: usize, failed: usize) -> Self {
        Self {
            applied,
            skipped,
            failed,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = if self.failed == 0 {
            Icon::Success
        } else {
            Icon::Warning
        };
        let verb = if self.dry_run { "would apply" } else { "applied" };

        let mut line = format!(
            "{} {} {}, {} skipped",
            icon.colored(supports_color, supports_unicode),
            self.applied,
            verb,
            self.skipped
        );
        if self.failed > 0 {
            let failed = ColoredText::warning(format!("{} failed", self.failed));
            line.push_str(&format!(", {}", failed.render(supports_color)));
        }
        line.push('\n');
        line
    }
}
