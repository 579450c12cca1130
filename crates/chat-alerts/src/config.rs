//! Alert configuration: built-in defaults with environment overrides.

use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Chat";
const DEFAULT_ICON: &str = "/icon-192.png";
const DEFAULT_BADGE: &str = "/badge-72.png";

/// Runtime alert configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    pub title: String,
    pub icon: String,
    pub badge: String,
    pub enabled: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            icon: DEFAULT_ICON.into(),
            badge: DEFAULT_BADGE.into(),
            enabled: true,
        }
    }
}

impl AlertConfig {
    /// Load configuration from `CHAT_ALERT_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Missing or blank
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str, default: &str| -> String {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => v.trim().to_string(),
                _ => default.to_string(),
            }
        };

        Self {
            title: g("CHAT_ALERT_TITLE", DEFAULT_TITLE),
            icon: g("CHAT_ALERT_ICON", DEFAULT_ICON),
            badge: g("CHAT_ALERT_BADGE", DEFAULT_BADGE),
            enabled: !g("CHAT_ALERT_ENABLED", "true").eq_ignore_ascii_case("false"),
        }
    }
}

const DOTENV_CANDIDATES: [&str; 3] = [".env", "../.env", "../../.env"];

/// Load the first `.env` found near the working directory into the
/// process environment.
pub fn load_dotenv() -> Option<PathBuf> {
    let candidates = DOTENV_CANDIDATES.map(Path::new);
    let loaded = load_dotenv_from(&candidates);
    if loaded.is_none() {
        tracing::info!("No .env file found, using system environment variables");
    }
    loaded
}

/// Load the first readable file of `candidates`. Variables already set in
/// the environment win.
pub fn load_dotenv_from(candidates: &[&Path]) -> Option<PathBuf> {
    for path in candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {}", path.display());
            return Some(path.to_path_buf());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AlertConfig::from_lookup(|_| None);
        assert_eq!(config, AlertConfig::default());
        assert!(config.enabled);
    }

    #[test]
    fn overrides_apply() {
        let config = AlertConfig::from_lookup(lookup_from(&[
            ("CHAT_ALERT_TITLE", "Suporte"),
            ("CHAT_ALERT_ICON", "/logo.png"),
            ("CHAT_ALERT_ENABLED", "FALSE"),
        ]));
        assert_eq!(config.title, "Suporte");
        assert_eq!(config.icon, "/logo.png");
        assert_eq!(config.badge, DEFAULT_BADGE);
        assert!(!config.enabled);
    }

    #[test]
    fn dotenv_feeds_overrides() {
        let dir = std::env::temp_dir().join(format!("chat-alerts-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(".env");
        std::fs::write(&file, "CHAT_ALERT_DOTENV_CHECK_TITLE=Atendimento\n").unwrap();
        let missing = dir.join("missing.env");

        let loaded = load_dotenv_from(&[missing.as_path(), file.as_path()]);
        assert_eq!(loaded.as_deref(), Some(file.as_path()));
        assert_eq!(
            std::env::var("CHAT_ALERT_DOTENV_CHECK_TITLE").as_deref(),
            Ok("Atendimento")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn dotenv_without_files_loads_nothing() {
        let missing = std::env::temp_dir().join("chat-alerts-no-such-dir/.env");
        assert_eq!(load_dotenv_from(&[missing.as_path()]), None);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AlertConfig::from_lookup(lookup_from(&[("CHAT_ALERT_TITLE", "   ")]));
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}
