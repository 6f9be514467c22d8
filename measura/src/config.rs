//! Registry configuration file support.
//!
//! Extra units are declared in TOML and applied with [`crate::UnitRegistry::apply_config`]:
//!
//! ```toml
//! # A new base dimension with its primitive unit.
//! [[base]]
//! symbol = "bit"
//! name = "bit"
//! dimension = "information"
//! prefixable = true
//!
//! # Units defined against any registered unit.
//! [[unit]]
//! symbol = "B"
//! name = "byte"
//! of = "bit"
//! factor = 8.0
//! prefixable = true
//!
//! [[unit]]
//! symbol = "°Ré"
//! name = "reaumur"
//! of = "K"
//! factor = 1.25
//! offset = 273.15
//! ```
//!
//! `offset` makes the unit affine (`value_in(of) = factor × value + offset`); affine units cannot be prefixable.

use measura_core::{UnitError, UnitResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Unit definitions loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// New base units (`[[base]]` tables).
    #[serde(default, rename = "base")]
    pub bases: Vec<BaseUnitSettings>,
    /// Units defined from registered ones (`[[unit]]` tables).
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitSettings>,
}

/// A primitive unit of a (possibly new) base dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseUnitSettings {
    /// Symbol the unit is registered and displayed under.
    pub symbol: String,
    /// Optional long name, also used to name prefixed variants.
    #[serde(default)]
    pub name: Option<String>,
    /// Base dimension: an SI symbol or name (`"L"`, `"length"`) or any other name for a custom dimension.
    pub dimension: String,
    /// Register the 24 metric-prefixed variants as well.
    #[serde(default)]
    pub prefixable: bool,
    /// Extra lookup names.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A unit defined as `factor × of (+ offset)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSettings {
    /// Symbol the unit is registered and displayed under.
    pub symbol: String,
    /// Optional long name, also used to name prefixed variants.
    #[serde(default)]
    pub name: Option<String>,
    /// Registered name of the unit this one is defined from.
    pub of: String,
    /// Multiplier relative to `of`.
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Offset in units of `of`; non-zero makes the unit affine.
    #[serde(default)]
    pub offset: f64,
    /// Register the 24 metric-prefixed variants as well.
    #[serde(default)]
    pub prefixable: bool,
    /// Extra lookup names.
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn default_factor() -> f64 {
    1.0
}

impl RegistryConfig {
    /// Load a registry configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RegistryConfig)` if successful
    /// * `Err(UnitError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> UnitResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            UnitError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        content.parse()
    }

    /// `true` when the configuration declares nothing.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty() && self.units.is_empty()
    }
}

impl FromStr for RegistryConfig {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
            .map_err(|e| UnitError::Config(format!("Failed to parse config file: {}", e)))
    }
}
