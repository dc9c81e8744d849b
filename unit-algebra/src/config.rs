//! Library settings.
//!
//! Settings are read from TOML. Every field has a default, so an empty document is valid:
//!
//! ```toml
//! [comparison]
//! relative_tolerance = 1e-9
//! absolute_tolerance = 0.0
//!
//! [registry]
//! synthesize_defaults = true
//! ```
//!
//! Loaded settings take effect where they are passed: the `[registry]` table through
//! [`init_registry`](crate::registry::init_registry) or
//! [`build_registry`](crate::registry::build_registry), the `[comparison]` table through
//! [`Quantity::approx_eq_with`](crate::Quantity::approx_eq_with).
//! [`Quantity::approx_eq`](crate::Quantity::approx_eq) always uses the defaults.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub comparison: ComparisonSettings,
    #[serde(default)]
    pub registry: RegistrySettings,
}

/// Tolerances used by [`Quantity::approx_eq_with`](crate::Quantity::approx_eq_with).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    #[serde(default = "default_relative_tolerance")]
    pub relative_tolerance: f64,
    #[serde(default)]
    pub absolute_tolerance: f64,
}

/// Converter registry settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Synthesize converters for exponentiated and composite shapes on first lookup.
    #[serde(default = "default_true")]
    pub synthesize_defaults: bool,
}

fn default_relative_tolerance() -> f64 {
    1e-9
}

fn default_true() -> bool {
    true
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            relative_tolerance: default_relative_tolerance(),
            absolute_tolerance: 0.0,
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            synthesize_defaults: true,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Returns
    /// * `Ok(Settings)` if the file was read, parsed and validated
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> ConfigResult<()> {
        let ComparisonSettings {
            relative_tolerance,
            absolute_tolerance,
        } = self.comparison;
        for (name, tolerance) in [
            ("relative_tolerance", relative_tolerance),
            ("absolute_tolerance", absolute_tolerance),
        ] {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "comparison.{name} must be a finite non-negative number, got {tolerance}"
                )));
            }
        }
        Ok(())
    }
}
