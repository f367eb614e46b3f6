use is_terminal::IsTerminal;

/// What the attached terminal can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

pub(crate) fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let width = size.map(|(w, _)| w).unwrap_or(80);
    TerminalCapabilities {
        supports_color,
        supports_unicode,
        is_ci,
        width,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "BITRISE_IO",
        "CIRCLECI",
        "BUILDKITE",
        "APPCENTER_BUILD_ID",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Windows consoles don't set a locale variable.
    cfg!(windows) || get_env("WT_SESSION").is_some() || !KEYS.iter().any(|k| get_env(k).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool, size: Option<(u16, u16)>) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty, size)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(
            &[("NO_COLOR", "1"), ("TERM", "xterm-256color")],
            true,
            Some((120, 40)),
        );
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps(&[("CI", "true"), ("TERM", "xterm-256color")], true, None);
        assert!(c.is_ci);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true, None);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_requires_a_tty_for_color() {
        let c = caps(&[("TERM", "xterm-256color")], false, Some((100, 30)));
        assert!(!c.supports_color);
        assert_eq!(c.width, 100);
    }

    #[test]
    fn detect_c_locale_disables_unicode() {
        let c = caps(&[("LANG", "C"), ("TERM", "xterm")], true, None);
        assert_eq!(c.supports_unicode, cfg!(windows));
    }

    #[test]
    fn detect_utf8_locale_enables_unicode() {
        let c = caps(&[("LANG", "en_US.UTF-8")], true, None);
        assert!(c.supports_unicode);
    }
}
