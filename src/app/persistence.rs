use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const NAMESPACE: &str = "news_";

/// Key for the last executed news search.
pub const LAST_SEARCH: &str = "lastSearch";

/// Small key/value store for panel preferences, kept as one toml table.
///
/// A store without a path is disabled: loads return `None` and saves are
/// dropped. Failures are logged and never surface to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn default_location() -> Self {
        Self {
            path: get_preferences_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.read_all()?;
        let value = entries.get(&namespaced(key))?.clone();
        match value.try_into() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable preference");
                None
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let Some(path) = &self.path else {
            return;
        };

        let value = match toml::Value::try_from(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "could not encode preference");
                return;
            }
        };

        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(namespaced(key), value);

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let result = toml::to_string(&entries)
            .map_err(|e| e.to_string())
            .and_then(|content| std::fs::write(path, content).map_err(|e| e.to_string()));
        if let Err(e) = result {
            tracing::warn!(key, path = %path.display(), error = %e, "could not save preference");
        }
    }

    fn read_all(&self) -> Option<BTreeMap<String, toml::Value>> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read preferences");
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed preferences file");
                None
            }
        }
    }
}

fn namespaced(key: &str) -> String {
    format!("{NAMESPACE}{key}")
}

pub fn get_preferences_path() -> Option<PathBuf> {
    crate::config::get_config_dir().map(|mut path| {
        path.push("preferences.toml");
        path
    })
}
