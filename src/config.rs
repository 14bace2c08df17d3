use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "STOCKSCOPE_BASE_URL";
pub const LOG_ENV: &str = "STOCKSCOPE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Catppuccin,
    Nord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub search_debounce_ms: u64,
    pub news_debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub max_retries: u32,
    pub news_fetch_limit: u32,
    pub notice_duration_ms: u64,
    pub theme: ThemeName,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            search_debounce_ms: 300,
            news_debounce_ms: 500,
            request_timeout_ms: 10_000,
            max_retries: 3,
            news_fetch_limit: 10,
            notice_duration_ms: 5_000,
            theme: ThemeName::default(),
            log_file: None,
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("stockscope");
        path
    })
}

impl AppConfig {
    /// Loads `~/.config/stockscope/config.toml`, then applies environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = get_config_dir()
            .map(|dir| dir.join("config.toml"))
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// A missing file yields the defaults; a malformed one is logged and ignored.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                Self::default()
            }
        }
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
    }

    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub fn news_debounce(&self) -> Duration {
        Duration::from_millis(self.news_debounce_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Log file location; the terminal is owned by the UI.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        home::home_dir()
            .map(|mut path| {
                path.push(".local");
                path.push("state");
                path.push("stockscope");
                path.push("stockscope.log");
                path
            })
            .unwrap_or_else(|| std::env::temp_dir().join("stockscope.log"))
    }
}
