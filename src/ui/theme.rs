use crossterm::style::Color;

use tsinit::PipelineStage;

/// Design tokens for the tsinit CLI.
///
/// - Five semantic colors (`colors::*`) plus one accent
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
    /// #D946EF
    pub const ACCENT: Color = Color::Magenta;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SKIPPED: &str = "○";
    pub const ARROW: &str = "↳";
    pub const INIT: &str = "⚙";
    pub const DIFF: &str = "Δ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const SKIPPED: &str = "[SKIP]";
    pub const ARROW: &str = "[>]";
    pub const INIT: &str = "[INIT]";
    pub const DIFF: &str = "[DIFF]";
}

/// Color of a step's progress line.
pub fn stage_color(stage: PipelineStage) -> Color {
    match stage {
        PipelineStage::ConfigEnsured => colors::WARNING,
        PipelineStage::Installing => colors::INFO,
        PipelineStage::ScriptsPatched => colors::ERROR,
        PipelineStage::EntryRewritten => colors::ACCENT,
        PipelineStage::SourceRelocated => colors::SUCCESS,
        PipelineStage::Idle | PipelineStage::CompileTriggered => colors::DIM,
    }
}
