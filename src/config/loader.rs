//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, FallbackPolicy};
use crate::error::{TsinitError, TsinitResult};

use super::env_validator::{levenshtein, EnvVarValidator, EnvWarning};
use super::types::Settings;

/// Settings file looked up in the project root
pub const PROJECT_SETTINGS_FILE: &str = "tsinit.toml";

/// Where the effective settings came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl SettingsSource {
    pub fn describe(&self) -> String {
        match self {
            SettingsSource::Project(path) | SettingsSource::User(path) => {
                path.display().to_string()
            }
            SettingsSource::Defaults => "built-in defaults".to_string(),
        }
    }
}

/// Settings after file lookup and environment overrides
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
    pub warnings: Vec<ConfigWarning>,
    /// Environment overrides that were rejected
    pub env_warnings: Vec<EnvWarning>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TsinitResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TsinitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Resolve settings for a project using the real environment.
pub fn resolve(project_root: &Path) -> TsinitResult<ResolvedSettings> {
    resolve_with(project_root, user_settings_path(), |key| {
        std::env::var(key).ok()
    })
}

/// Resolve settings with an explicit user settings path and environment.
pub fn resolve_with(
    project_root: &Path,
    user_path: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> TsinitResult<ResolvedSettings> {
    let project_path = project_root.join(PROJECT_SETTINGS_FILE);

    let (settings, source, warnings) = if project_path.is_file() {
        let (settings, warnings) = load_with_warnings(&project_path)?;
        (settings, SettingsSource::Project(project_path), warnings)
    } else if let Some(user_path) = user_path.filter(|p| p.is_file()) {
        let (settings, warnings) = load_with_warnings(&user_path)?;
        (settings, SettingsSource::User(user_path), warnings)
    } else {
        (Settings::default(), SettingsSource::Defaults, Vec::new())
    };

    let (settings, env_warnings) = with_env_overrides_from(settings, get_env);
    Ok(ResolvedSettings {
        settings,
        source,
        warnings,
        env_warnings,
    })
}

/// `$XDG_CONFIG_HOME/tsinit/config.toml`, else the platform config dir.
pub fn user_settings_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("tsinit").join("config.toml"))
}

const FALLBACK_POLICIES: &[&str] = &["on-failure", "on-spawn-error"];
const SWITCH_VALUES: &[&str] = &["1", "0", "true", "false", "yes", "no", "on", "off"];

/// Apply environment variable overrides (TSINIT_* prefix).
///
/// Values that do not parse keep whatever the file said and are returned
/// as warnings.
pub fn with_env_overrides_from(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Settings, Vec<EnvWarning>) {
    let mut warnings = Vec::new();

    // TSINIT_PACKAGES (comma-separated, empty disables the install)
    if let Some(packages) = get_env("TSINIT_PACKAGES") {
        let list = packages
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| toml::Value::String(s.to_string()))
            .collect();
        settings.install.packages = toml::Value::Array(list);
    }

    if let Some(primary) = get_env("TSINIT_PRIMARY").filter(|s| !s.trim().is_empty()) {
        settings.install.primary = primary.trim().to_string();
    }

    if let Some(fallback) = get_env("TSINIT_FALLBACK").filter(|s| !s.trim().is_empty()) {
        settings.install.fallback = fallback.trim().to_string();
    }

    if let Some(policy) = get_env("TSINIT_FALLBACK_POLICY") {
        match EnvVarValidator::new("TSINIT_FALLBACK_POLICY", FALLBACK_POLICIES)
            .parse(&policy, |s| s.parse::<FallbackPolicy>().ok())
        {
            Ok(policy) => settings.install.fallback_policy = policy,
            Err(warning) => warnings.push(warning),
        }
    }

    if let Some(root_dir) = get_env("TSINIT_ROOT_DIR").filter(|s| !s.trim().is_empty()) {
        settings.compiler_options.root_dir = root_dir.trim().to_string();
    }

    if let Some(out_dir) = get_env("TSINIT_OUT_DIR").filter(|s| !s.trim().is_empty()) {
        settings.compiler_options.out_dir = out_dir.trim().to_string();
    }

    if let Some(compile) = get_env("TSINIT_COMPILE") {
        match EnvVarValidator::new("TSINIT_COMPILE", SWITCH_VALUES).parse(&compile, parse_switch) {
            Ok(enabled) => settings.compile.enabled = enabled,
            Err(warning) => warnings.push(warning),
        }
    }

    (settings, warnings)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "files",
        "build_config",
        "manifest",
        "entry",
        "app_source",
        "app_target_name",
        "compiler_options",
        "root_dir",
        "out_dir",
        "install",
        "packages",
        "primary",
        "fallback",
        "fallback_policy",
        "compile",
        "enabled",
        "command",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
