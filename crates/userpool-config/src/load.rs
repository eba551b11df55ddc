// crates/userpool-config/src/load.rs
// ============================================================================
// Module: Configuration Loading
// Description: Bounded reading of TOML or JSON configuration files.
// Purpose: Supply raw configuration documents with strict size and path limits.
// Dependencies: serde_json, toml
// ============================================================================

//! ## Overview
//! Configuration files are untrusted input. Loading resolves the path from
//! the caller, the `USERPOOL_PLAN_CONFIG` environment variable, or the
//! default `userpool.toml`, enforces path, size, and encoding limits, and
//! parses by extension: `.json` as JSON, anything else as TOML. The result
//! is a raw JSON document; nothing is validated here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use userpool_core::CompositionResult;

use crate::error::ConfigError;
use crate::pipeline::plan;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "userpool.toml";
/// Environment variable overriding the configuration path.
pub const CONFIG_ENV_VAR: &str = "USERPOOL_PLAN_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl RawFormat {
    /// Picks the format from a file extension (`.json` or TOML otherwise).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Raw configuration document with the path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Resolved source path.
    pub path: PathBuf,
    /// Parsed document.
    pub document: Value,
}

impl RawConfig {
    /// Loads a raw document using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path, size, encoding, or syntax is rejected.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Limit("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Limit("config file must be utf-8".to_string()))?;
        let document = parse_document(content, RawFormat::from_path(&resolved))?;
        Ok(Self {
            path: resolved,
            document,
        })
    }

    /// Validates and composes the loaded document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every violation found.
    pub fn plan(&self) -> Result<CompositionResult, ConfigError> {
        Ok(plan(&self.document)?)
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a document in the given format into a JSON value.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on syntax errors.
pub fn parse_document(content: &str, format: RawFormat) -> Result<Value, ConfigError> {
    match format {
        RawFormat::Json => {
            serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
        }
        RawFormat::Toml => {
            toml::from_str::<Value>(content).map_err(|err| ConfigError::Parse(err.to_string()))
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Limit("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Limit("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Limit("config path component too long".to_string()));
        }
    }
    Ok(())
}
