//! Configuration types for the file input widget.
//!
//! A [`WidgetConfig`] is supplied once per widget instance and never changes
//! afterwards. Every field is required; a config file that omits one of the
//! hint or button keys fails to load rather than falling back to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Immutable configuration for one file input widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WidgetConfig {
    /// Display label.
    pub title: String,

    /// Placeholder shown when no file is selected.
    pub default_text: String,

    /// Accepted MIME type, either exact (`application/pdf`) or a category
    /// prefix ending in `/` (`image/`).
    pub file_type: String,

    /// Upper bound on accepted file size, in bytes.
    pub max_file_size: u64,

    /// When true, selection is inert.
    pub disabled: bool,

    /// Hint messages keyed by validity.
    pub hint_text: HintText,

    /// Button labels keyed by phase.
    pub button_states: ButtonStates,
}

/// Hint messages shown under the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HintText {
    pub default: String,
    pub format_error: String,
    pub max_size_error: String,
}

/// Labels for the three-state button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonStates {
    pub default: String,
    pub upload: String,
    pub delete: String,
}

/// Key into [`HintText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKey {
    Default,
    FormatError,
    MaxSizeError,
}

impl HintKey {
    /// All keys in declaration order.
    pub const ALL: [HintKey; 3] = [Self::Default, Self::FormatError, Self::MaxSizeError];

    /// The key as it appears in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FormatError => "formatError",
            Self::MaxSizeError => "maxSizeError",
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into [`ButtonStates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Nothing chosen yet.
    Default,
    /// A file was chosen but failed validation; acts as cancel/retry.
    Upload,
    /// A valid file is chosen.
    Delete,
}

impl ButtonState {
    /// The key as it appears in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Upload => "upload",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HintText {
    /// Look up a hint by key.
    pub fn get(&self, key: HintKey) -> &str {
        match key {
            HintKey::Default => &self.default,
            HintKey::FormatError => &self.format_error,
            HintKey::MaxSizeError => &self.max_size_error,
        }
    }
}

impl ButtonStates {
    /// Look up a button label by state.
    pub fn get(&self, state: ButtonState) -> &str {
        match state {
            ButtonState::Default => &self.default,
            ButtonState::Upload => &self.upload,
            ButtonState::Delete => &self.delete,
        }
    }
}

impl WidgetConfig {
    /// Check the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidMaxFileSize);
        }
        if self.file_type.trim().is_empty() {
            return Err(ConfigError::EmptyFileType);
        }
        Ok(())
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), title = %config.title, "Loaded widget config");
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json_pretty()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON, including missing keys.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// `maxFileSize` must be greater than zero.
    #[error("maxFileSize must be greater than zero")]
    InvalidMaxFileSize,

    /// `fileType` must name at least one type.
    #[error("fileType must not be empty")]
    EmptyFileType,
}
