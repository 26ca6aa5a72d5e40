//! Console game configuration.

use crate::view::Glyphs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_reversi::EndPolicy;
use tracing::{debug, info, instrument};

/// Configuration for a console game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// What happens when the player to move is blocked.
    #[serde(default)]
    end_policy: EndPolicy,

    /// Symbols used to draw the board.
    #[serde(default)]
    glyphs: Glyphs,

    /// Print row and column indices around the board.
    #[serde(default)]
    show_coordinates: bool,

    /// List the legal moves under each prompt.
    #[serde(default)]
    show_hints: bool,
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;

        info!(end_policy = %config.end_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the end-of-game policy when one is given.
    pub fn with_end_policy(mut self, policy: Option<EndPolicy>) -> Self {
        if let Some(policy) = policy {
            self.end_policy = policy;
        }
        self
    }

    /// Turns the coordinate header on when `enabled`; never turns it off.
    pub fn with_coordinates(mut self, enabled: bool) -> Self {
        self.show_coordinates |= enabled;
        self
    }

    /// Turns move hints on when `enabled`; never turns them off.
    pub fn with_hints(mut self, enabled: bool) -> Self {
        self.show_hints |= enabled;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            end_policy: EndPolicy::default(),
            glyphs: Glyphs::default(),
            show_coordinates: false,
            show_hints: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ConsoleConfig::from_toml("").unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ConsoleConfig::from_toml(
            r#"
            end_policy = "stop-on-first-blocked"

            [glyphs]
            empty = "."
            "#,
        )
        .unwrap();
        assert_eq!(*config.end_policy(), EndPolicy::StopOnFirstBlocked);
        assert_eq!(*config.glyphs(), Glyphs::new('.', 'X', 'O'));
        assert!(!*config.show_coordinates());
    }

    #[test]
    fn test_bad_policy_is_error() {
        let err = ConsoleConfig::from_toml(r#"end_policy = "sudden-death""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides() {
        let config = ConsoleConfig::default()
            .with_end_policy(Some(EndPolicy::StopOnFirstBlocked))
            .with_coordinates(true)
            .with_hints(false);
        assert_eq!(*config.end_policy(), EndPolicy::StopOnFirstBlocked);
        assert!(*config.show_coordinates());
        assert!(!*config.show_hints());

        let unchanged = config.clone().with_end_policy(None);
        assert_eq!(unchanged, config);
    }
}
