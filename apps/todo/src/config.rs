//! Configuration for the creation form.
//!
//! Loaded from environment variables. The defaults keep the buffer after
//! submit, accept empty text and echo the buffer beneath the form. Command
//! line flags may override individual fields afterwards.

use std::env;
use thiserror::Error;

/// Environment variable for [`FormConfig::reset_on_submit`]
pub const RESET_ON_SUBMIT_VAR: &str = "TODO_RESET_ON_SUBMIT";
/// Environment variable for [`FormConfig::reject_empty`]
pub const REJECT_EMPTY_VAR: &str = "TODO_REJECT_EMPTY";
/// Environment variable for [`FormConfig::echo_buffer`]
pub const ECHO_BUFFER_VAR: &str = "TODO_ECHO_BUFFER";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held something other than a boolean
    #[error("Invalid boolean for {name}: {value:?} (expected true/false, 1/0, yes/no, on/off)")]
    InvalidBool {
        /// Variable name
        name: String,
        /// Offending value
        value: String,
    },
}

/// Behaviour switches for the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Clear the buffer after a successful submit (default: false)
    pub reset_on_submit: bool,
    /// Refuse to dispatch an empty buffer (default: false)
    pub reject_empty: bool,
    /// Render the buffer text beneath the form (default: true)
    pub echo_buffer: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_on_submit: false,
            reject_empty: false,
            echo_buffer: true,
        }
    }
}

impl FormConfig {
    /// Load configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] if a variable is set to something
    /// that is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] if a value is not a boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| match lookup(name) {
            Some(value) => parse_bool(name, &value),
            None => Ok(default),
        };

        Ok(Self {
            reset_on_submit: flag(RESET_ON_SUBMIT_VAR, defaults.reset_on_submit)?,
            reject_empty: flag(REJECT_EMPTY_VAR, defaults.reject_empty)?,
            echo_buffer: flag(ECHO_BUFFER_VAR, defaults.echo_buffer)?,
        })
    }

    /// Set whether the buffer is cleared after submit
    #[must_use]
    pub const fn with_reset_on_submit(mut self, reset: bool) -> Self {
        self.reset_on_submit = reset;
        self
    }

    /// Set whether empty submissions are rejected
    #[must_use]
    pub const fn with_reject_empty(mut self, reject: bool) -> Self {
        self.reject_empty = reject;
        self
    }

    /// Set whether the buffer is echoed beneath the form
    #[must_use]
    pub const fn with_echo_buffer(mut self, echo: bool) -> Self {
        self.echo_buffer = echo;
        self
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
