use crossterm::style::Stylize;

use crate::ui::theme;
use tsinit::OutcomeStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Arrow,
    Init,
    Diff,
}

impl Icon {
    /// Icon for a finished step. Failures are warnings: the run goes on.
    pub fn for_outcome(status: OutcomeStatus) -> Self {
        match status {
            OutcomeStatus::Applied => Icon::Success,
            OutcomeStatus::Skipped => Icon::Skipped,
            OutcomeStatus::Failed => Icon::Warning,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Skipped) => theme::icons::SKIPPED,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Init) => theme::icons::INIT,
            (true, Icon::Diff) => theme::icons::DIFF,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Skipped) => theme::icons_ascii::SKIPPED,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Init) => theme::icons_ascii::INIT,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Init | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
