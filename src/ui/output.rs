use tsinit::config::{ConfigWarning, EnvWarning};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "{} Unknown settings key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!("{} Unknown settings key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_env_warnings(warnings: &[EnvWarning], ui: &UiContext) {
    if ui.json {
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        eprintln!("{} {}", icon, w);
        eprintln!("   Valid values: {}\n", w.valid_values.join(", "));
    }
}
