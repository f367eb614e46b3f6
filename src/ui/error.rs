use tsinit::TsinitError;

use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Short hint for errors the user can fix on the spot.
fn fix_hint(err: &TsinitError) -> Option<&'static str> {
    match err {
        TsinitError::InvalidPackageList { .. } => {
            Some("Set install.packages to a list, e.g. packages = [\"typescript\"]")
        }
        TsinitError::InvalidConfig { .. } => Some("Fix the settings file or remove it"),
        TsinitError::ProjectNotFound { .. } => {
            Some("Run inside a React Native project or pass --path <dir>")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<TsinitError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::new("init", format!("{:#}", err)));
        return;
    }

    let caps = detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
}
