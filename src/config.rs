//! Controller configuration: storage key, marker class, and element ids.
//!
//! The defaults match the page markup the controller ships with. Pages that
//! use different ids can pass a JSON override to `hydrate_with_config`.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_MARKER_CLASS: &str = "dark";
pub const DEFAULT_ROOT_ID: &str = "body";
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field was present but empty.
    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },

    /// A class name or element id contained whitespace.
    #[error("config field '{field}' must not contain whitespace")]
    Invalid { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// Class applied to the root element while dark mode is active.
    pub marker_class: String,
    /// Id of the root display element.
    pub root_id: String,
    /// Id of the optional toggle control.
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            root_id: DEFAULT_ROOT_ID.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override. Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and the [`ThemeConfig::validate`] errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON override, falling back to the defaults when it is invalid.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("theme: {e}, using defaults");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] for a blank field and
    /// [`ConfigError::Invalid`] when the marker class or an element id
    /// contains whitespace (`classList` rejects such tokens).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key, false),
            ("marker_class", &self.marker_class, true),
            ("root_id", &self.root_id, true),
            ("toggle_id", &self.toggle_id, true),
        ];
        for (field, value, token) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
            if token && value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid { field });
            }
        }
        Ok(())
    }
}
