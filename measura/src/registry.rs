//! Name → unit registry.
//!
//! A [`UnitRegistry`] maps symbols, long names and aliases to [`Unit`] values. It is an ordinary value: build one,
//! extend it from a [`RegistryConfig`], and look units up by name. The process-wide builtin catalog lives behind
//! [`crate::builtin_registry`].
//!
//! Registration never overwrites. A name already bound to a physically different unit keeps its first definition
//! and the new binding is dropped with a `warn!`.

use crate::config::{BaseUnitSettings, RegistryConfig, UnitSettings};
use measura_core::{BaseDimension, DimensionVector, Prefix, Unit, UnitError, UnitResult};
use std::collections::HashMap;
use std::path::Path;

/// A lookup table of units keyed by symbol, name or alias.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
}

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the builtin catalog (SI, temperature scales, customary and astronomical units).
    ///
    /// ```rust
    /// use measura::UnitRegistry;
    /// let registry = UnitRegistry::builtin().unwrap();
    /// assert!(registry.contains("km"));
    /// assert!(registry.contains("kilometer"));
    /// assert!(registry.contains("°F"));
    /// ```
    pub fn builtin() -> UnitResult<Self> {
        let mut registry = Self::new();
        crate::units::register_builtin(&mut registry)?;
        log::debug!("built builtin unit registry with {} names", registry.len());
        Ok(registry)
    }

    /// Builtin catalog extended with the units of a TOML configuration file.
    ///
    /// # Errors
    ///
    /// [`UnitError::Config`] when the file cannot be read, parsed or applied.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> UnitResult<Self> {
        let config = RegistryConfig::from_file(path)?;
        let mut registry = Self::builtin()?;
        registry.apply_config(&config)?;
        Ok(registry)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a unit up by symbol, name or alias.
    ///
    /// # Errors
    ///
    /// [`UnitError::UnknownUnit`] when nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> UnitResult<Unit> {
        self.get(name)
            .cloned()
            .ok_or_else(|| UnitError::UnknownUnit(name.to_string()))
    }

    /// Borrowing lookup.
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Number of registered names (symbols, names and aliases).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    fn insert(&mut self, name: &str, unit: &Unit) -> bool {
        match self.units.get(name) {
            Some(existing) if existing == unit => true,
            Some(existing) => {
                log::warn!(
                    "unit name '{}' already bound to {:?}; ignoring {:?}",
                    name,
                    existing,
                    unit
                );
                false
            }
            None => {
                self.units.insert(name.to_string(), unit.clone());
                true
            }
        }
    }

    fn symbol_of(unit: &Unit) -> UnitResult<&str> {
        unit.symbol().ok_or_else(|| {
            UnitError::Config(format!("cannot register anonymous unit '{}'", unit))
        })
    }

    /// Registers `unit` under its symbol. Returns `false` if the symbol was already taken by a different unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::Config`] for an anonymous unit (no symbol).
    pub fn define(&mut self, unit: &Unit) -> UnitResult<bool> {
        let symbol = Self::symbol_of(unit)?;
        Ok(self.insert(symbol, unit))
    }

    /// Registers `unit` under its symbol and a long name.
    ///
    /// # Errors
    ///
    /// [`UnitError::Config`] for an anonymous unit.
    pub fn define_named(&mut self, unit: &Unit, name: &str) -> UnitResult<bool> {
        let defined = self.define(unit)?;
        self.alias(name, unit);
        Ok(defined)
    }

    /// Binds an extra name to `unit`. Returns `false` if the name was taken by a different unit.
    pub fn alias(&mut self, name: &str, unit: &Unit) -> bool {
        self.insert(name, unit)
    }

    /// Registers all 24 prefixed variants of `unit`.
    ///
    /// Each variant is bound to its symbol (`km`), to `prefix name + name` when a long name is given
    /// (`kilometer`), and micro variants also to a `u` spelling (`um`). Returns the number of symbols bound.
    ///
    /// ```rust
    /// use measura::{DimensionVector, Unit, UnitRegistry};
    /// let mut registry = UnitRegistry::new();
    /// let bit = Unit::base("bit", DimensionVector::dimensionless());
    /// assert_eq!(registry.define_metric_family(&bit, Some("bit")).unwrap(), 24);
    /// assert!(registry.contains("kbit"));
    /// assert!(registry.contains("kilobit"));
    /// assert!(registry.contains("ubit"));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`UnitError::Config`] for an anonymous unit.
    /// - [`UnitError::InvalidAffineComposition`] for an affine unit.
    pub fn define_metric_family(&mut self, unit: &Unit, name: Option<&str>) -> UnitResult<usize> {
        let symbol = Self::symbol_of(unit)?;
        let mut bound = 0;
        for prefix in Prefix::ALL {
            let prefixed = Unit::prefixed(prefix, unit)?;
            if self.define(&prefixed)? {
                bound += 1;
            }
            if prefix == Prefix::Micro {
                self.alias(&format!("u{}", symbol), &prefixed);
            }
            if let Some(name) = name {
                self.alias(&format!("{}{}", prefix.name(), name), &prefixed);
            }
        }
        log::trace!("registered metric family of '{}' ({} symbols)", symbol, bound);
        Ok(bound)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds the base units and units of `config`, in file order.
    ///
    /// `[[base]]` entries are applied before `[[unit]]` entries, so units may refer to any configured base.
    ///
    /// # Errors
    ///
    /// - [`UnitError::UnknownUnit`] when a unit refers to an unregistered `of` unit.
    /// - Construction errors ([`UnitError::InvalidScaleFactor`], …) for invalid factors or offsets.
    pub fn apply_config(&mut self, config: &RegistryConfig) -> UnitResult<()> {
        for base in &config.bases {
            self.apply_base(base)?;
        }
        for unit in &config.units {
            self.apply_unit(unit)?;
        }
        log::debug!(
            "applied unit configuration: {} base units, {} units",
            config.bases.len(),
            config.units.len()
        );
        Ok(())
    }

    fn apply_base(&mut self, settings: &BaseUnitSettings) -> UnitResult<()> {
        let dimension = DimensionVector::of(BaseDimension::from_name(&settings.dimension));
        let unit = Unit::base(settings.symbol.as_str(), dimension);
        self.register_settings(
            &unit,
            settings.name.as_deref(),
            settings.prefixable,
            &settings.aliases,
        )
    }

    fn apply_unit(&mut self, settings: &UnitSettings) -> UnitResult<()> {
        let of = self.lookup(&settings.of)?;
        let unit = if settings.offset != 0.0 {
            Unit::affine(settings.symbol.as_str(), &of, settings.factor, settings.offset)?
        } else {
            Unit::scaled(settings.symbol.as_str(), &of, settings.factor)?
        };
        self.register_settings(
            &unit,
            settings.name.as_deref(),
            settings.prefixable,
            &settings.aliases,
        )
    }

    fn register_settings(
        &mut self,
        unit: &Unit,
        name: Option<&str>,
        prefixable: bool,
        aliases: &[String],
    ) -> UnitResult<()> {
        match name {
            Some(name) => self.define_named(unit, name)?,
            None => self.define(unit)?,
        };
        for alias in aliases {
            self.alias(alias, unit);
        }
        if prefixable {
            self.define_metric_family(unit, name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::base("m", DimensionVector::length())
    }

    #[test]
    fn test_define_and_lookup() {
        let mut registry = UnitRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.define_named(&meter(), "meter").unwrap());
        assert_eq!(registry.lookup("m").unwrap(), meter());
        assert_eq!(registry.lookup("meter").unwrap(), meter());
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("furlong").unwrap_err(),
            UnitError::UnknownUnit("furlong".into())
        );
    }

    #[test]
    fn test_anonymous_units_are_rejected() {
        let mut registry = UnitRegistry::new();
        let v = meter().divide(&Unit::base("s", DimensionVector::time())).unwrap();
        assert!(matches!(registry.define(&v), Err(UnitError::Config(_))));
    }

    #[test]
    fn test_conflict_keeps_first() {
        let mut registry = UnitRegistry::new();
        registry.define(&meter()).unwrap();
        let impostor = Unit::base("m", DimensionVector::mass());
        assert!(!registry.define(&impostor).unwrap());
        assert_eq!(registry.lookup("m").unwrap().dimension(), &DimensionVector::length());
    }

    #[test]
    fn test_redefining_same_unit_is_noop() {
        let mut registry = UnitRegistry::new();
        registry.define(&meter()).unwrap();
        assert!(registry.define(&meter().with_symbol("m")).unwrap());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_metric_family() {
        let mut registry = UnitRegistry::new();
        registry.define_named(&meter(), "meter").unwrap();
        assert_eq!(registry.define_metric_family(&meter(), Some("meter")).unwrap(), 24);
        let km = registry.lookup("kilometer").unwrap();
        assert_eq!(km.symbol(), Some("km"));
        assert_eq!(km.scale(), 1_000.0);
        assert_eq!(registry.lookup("um").unwrap(), registry.lookup("µm").unwrap());
        // 1 + 1 names for meter, 24 symbols, 24 long names, 1 micro alias
        assert_eq!(registry.len(), 51);
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = UnitRegistry::new();
        registry.define(&meter()).unwrap();
        registry.alias("metre", &meter());
        registry.alias("meter", &meter());
        assert_eq!(registry.names(), vec!["m", "meter", "metre"]);
    }

    #[test]
    fn test_apply_config() {
        let config: RegistryConfig = r#"
            [[base]]
            symbol = "bit"
            name = "bit"
            dimension = "information"
            prefixable = true

            [[unit]]
            symbol = "B"
            name = "byte"
            of = "bit"
            factor = 8.0
            prefixable = true
            aliases = ["octet"]
        "#
        .parse()
        .unwrap();

        let mut registry = UnitRegistry::new();
        registry.apply_config(&config).unwrap();

        let byte = registry.lookup("octet").unwrap();
        assert_eq!(byte.scale(), 8.0);
        assert_eq!(
            byte.dimension(),
            &DimensionVector::of(BaseDimension::custom("information"))
        );
        assert_eq!(registry.lookup("kilobyte").unwrap().scale(), 8_000.0);
        assert!(registry.contains("Mbit"));
    }

    #[test]
    fn test_apply_config_unknown_base() {
        let config: RegistryConfig = r#"
            [[unit]]
            symbol = "smoot"
            of = "m"
            factor = 1.7018
        "#
        .parse()
        .unwrap();
        let err = UnitRegistry::new().apply_config(&config).unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("m".into()));
    }
}
