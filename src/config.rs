use std::collections::BTreeMap;
use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub builtins: BuiltinsConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub prompt: String,
    /// Stage name that ends the session.
    #[serde(default)]
    pub exit_keyword: String,
    #[serde(default)]
    pub log_level: String,
    /// Log destination; a leading `~` is expanded.
    #[serde(default)]
    pub log_file: String,
}

impl Settings {
    /// The configured level, falling back to `warn` on an unknown name.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).into_owned())
    }
}

/// Which built-ins shadow real executables, and under what names.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct BuiltinsConfig {
    #[serde(default)]
    pub enabled: Vec<String>,
    /// Subtracted from `enabled`; those names run as external programs.
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Alias name → built-in name.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    builtins: BuiltinsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    prompt: Option<String>,
    exit_keyword: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct BuiltinsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    enabled: Vec<String>,
    #[serde(default)]
    disabled: Vec<String>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    remove_enabled: Vec<String>,
    #[serde(default)]
    remove_disabled: Vec<String>,
    #[serde(default)]
    remove_aliases: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

/// Same as [`merge_list`], for keyed tables. Later keys win.
fn merge_map(
    base: &mut BTreeMap<String, String>,
    add: BTreeMap<String, String>,
    remove: &[String],
    replace: bool,
) {
    if replace {
        *base = add;
    } else {
        base.retain(|key, _| !remove.contains(key));
        base.extend(add);
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/richsh/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/richsh/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/richsh/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        // logging is configured from the result, so report straight to stderr
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("richsh: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.prompt {
            self.settings.prompt = v;
        }
        if let Some(v) = s.exit_keyword {
            self.settings.exit_keyword = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }

        let b = overlay.builtins;
        merge_list(
            &mut self.builtins.enabled,
            b.enabled,
            &b.remove_enabled,
            b.replace,
        );
        merge_list(
            &mut self.builtins.disabled,
            b.disabled,
            &b.remove_disabled,
            b.replace,
        );
        merge_map(
            &mut self.builtins.aliases,
            b.aliases,
            &b.remove_aliases,
            b.replace,
        );
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), toml::de::Error> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert!(!config.builtins.enabled.is_empty());
        assert!(config.builtins.disabled.is_empty());
        assert!(config.builtins.aliases.is_empty());
    }

    #[test]
    fn default_settings() {
        let config = Config::default_config();
        assert_eq!(config.settings.prompt, "> ");
        assert_eq!(config.settings.exit_keyword, "exit");
        assert_eq!(config.settings.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn default_builtins() {
        let config = Config::default_config();
        for name in ["echo", "cat", "wc", "pwd"] {
            assert!(config.builtins.enabled.contains(&name.to_string()));
        }
    }

    #[test]
    fn log_path_expands_tilde() {
        let config = Config::default_config();
        let path = config.settings.log_path();
        if std::env::var_os("HOME").is_some() {
            assert!(!path.to_string_lossy().starts_with('~'));
        }
        assert!(path.ends_with(".local/share/richsh/session.log"));
    }

    #[test]
    fn unknown_level_falls_back() {
        let settings = Settings {
            log_level: "chatty".into(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Warn);
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_overrides_scalars() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
            [settings]
            prompt = "$ "
            log_level = "debug"
        "#,
            )
            .unwrap();
        assert_eq!(config.settings.prompt, "$ ");
        assert_eq!(config.settings.level_filter(), LevelFilter::Debug);
        // untouched scalars keep their defaults
        assert_eq!(config.settings.exit_keyword, "exit");
    }

    #[test]
    fn overlay_disables_builtin() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
            [builtins]
            disabled = ["cat"]
        "#,
            )
            .unwrap();
        assert!(config.builtins.enabled.contains(&"cat".to_string()));
        assert_eq!(config.builtins.disabled, vec!["cat"]);
    }

    #[test]
    fn overlay_removes_enabled() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
            [builtins]
            remove_enabled = ["pwd"]
        "#,
            )
            .unwrap();
        assert!(!config.builtins.enabled.contains(&"pwd".to_string()));
        assert!(config.builtins.enabled.contains(&"echo".to_string()));
    }

    #[test]
    fn overlay_replace_builtins() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
            [builtins]
            replace = true
            enabled = ["echo"]
        "#,
            )
            .unwrap();
        assert_eq!(config.builtins.enabled, vec!["echo"]);
    }

    #[test]
    fn overlay_adds_and_removes_aliases() {
        let mut config = Config::default_config();
        config
            .apply_overlay_str(
                r#"
            [builtins.aliases]
            print_args = "echo"
            count = "wc"
        "#,
            )
            .unwrap();
        config
            .apply_overlay_str(
                r#"
            [builtins]
            remove_aliases = ["count"]
        "#,
            )
            .unwrap();
        assert_eq!(config.builtins.aliases.len(), 1);
        assert_eq!(config.builtins.aliases["print_args"], "echo");
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        let before = config.builtins.enabled.len();
        config
            .apply_overlay_str(
                r#"
            [builtins]
            enabled = ["echo"]
        "#,
            )
            .unwrap();
        assert_eq!(config.builtins.enabled.len(), before);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let mut config = Config::default_config();
        config.apply_overlay_str("").unwrap();
        assert_eq!(config.settings.prompt, "> ");
        assert_eq!(config.builtins.enabled.len(), 4);
    }

    #[test]
    fn bad_overlay_is_error() {
        let mut config = Config::default_config();
        assert!(config.apply_overlay_str("[settings\n").is_err());
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = Config::default_config();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("exit_keyword"));
    }
}
