//! Site configuration resolved once at startup.
//!
//! # Responsibility
//! - Hold the deployment base path used to address static media assets.
//! - Join relative asset names onto that base path.
//!
//! # Invariants
//! - `base_path` is non-empty and always ends with `/`.
//! - Configuration is injected explicitly; nothing here reads the environment.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Site configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base path is empty after trimming.
    EmptyBasePath,
    /// Base path contains whitespace or a `..` segment.
    InvalidBasePath(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBasePath => write!(f, "base path cannot be empty"),
            Self::InvalidBasePath(value) => write!(f, "invalid base path: `{value}`"),
        }
    }
}

impl Error for ConfigError {}

/// Runtime site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    /// Builds a configuration from a raw base path.
    ///
    /// Surrounding whitespace is trimmed and a trailing `/` is appended when
    /// missing, so `"/portfolio"` and `"/portfolio/"` are equivalent.
    ///
    /// # Errors
    /// - `EmptyBasePath` for blank input.
    /// - `InvalidBasePath` when the path has inner whitespace or `..` segments.
    pub fn new(base_path: &str) -> Result<Self, ConfigError> {
        let trimmed = base_path.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        if trimmed.chars().any(char::is_whitespace) || trimmed.split('/').any(|seg| seg == "..")
        {
            return Err(ConfigError::InvalidBasePath(trimmed.to_string()));
        }

        let mut normalized = trimmed.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        Ok(Self {
            base_path: normalized,
        })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves a relative asset name against the base path.
    ///
    /// A leading `/` on `asset` is ignored so it cannot escape the base.
    pub fn resolve_asset(&self, asset: &str) -> String {
        format!("{}{}", self.base_path, asset.trim_start_matches('/'))
    }
}
