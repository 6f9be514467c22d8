//! SI base units.
//!
//! The canonical unit of each SI base dimension has scale 1: every other unit of that dimension reduces to it.
//! Mass is the one irregular ladder: the kilogram is canonical, and prefixes apply to the gram (`1 g = 1e-3 kg`).
//!
//! ```rust
//! use measura::{convert, unit_from_name};
//!
//! let mg = unit_from_name("mg").unwrap();
//! let kg = unit_from_name("kilogram").unwrap();
//! assert!((convert(5e6, &mg, &kg).unwrap() - 5.0).abs() < 1e-12);
//! ```

use super::{add, add_family};
use crate::registry::UnitRegistry;
use measura_core::{DimensionVector, Unit, UnitResult};

/// Metre, SI unit of length.
pub fn meter() -> Unit {
    Unit::base("m", DimensionVector::length())
}

/// Kilogram, SI unit of mass.
pub fn kilogram() -> Unit {
    Unit::base("kg", DimensionVector::mass())
}

/// Gram (`1e-3 kg`), the unit metric prefixes apply to for mass.
pub fn gram() -> UnitResult<Unit> {
    Unit::scaled("g", &kilogram(), 1e-3)
}

/// Second, SI unit of time.
pub fn second() -> Unit {
    Unit::base("s", DimensionVector::time())
}

/// Ampere, SI unit of electric current.
pub fn ampere() -> Unit {
    Unit::base("A", DimensionVector::current())
}

/// Kelvin, SI unit of thermodynamic temperature.
pub fn kelvin() -> Unit {
    Unit::base("K", DimensionVector::temperature())
}

/// Mole, SI unit of amount of substance.
pub fn mole() -> Unit {
    Unit::base("mol", DimensionVector::amount())
}

/// Candela, SI unit of luminous intensity.
pub fn candela() -> Unit {
    Unit::base("cd", DimensionVector::luminous_intensity())
}

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    add_family(registry, &meter(), "meter", &["metre"])?;
    add_family(registry, &second(), "second", &["sec"])?;
    add_family(registry, &ampere(), "ampere", &["amp"])?;
    add_family(registry, &kelvin(), "kelvin", &[])?;
    add_family(registry, &mole(), "mole", &[])?;
    add_family(registry, &candela(), "candela", &[])?;

    // kg is registered first so the gram ladder's "kg" and "kilogram" resolve to the canonical unit.
    add(registry, &kilogram(), "kilogram", &[])?;
    add_family(registry, &gram()?, "gram", &[])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn registry() -> UnitRegistry {
        let mut registry = UnitRegistry::new();
        register(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_base_units_have_unit_scale() {
        for unit in [meter(), kilogram(), second(), ampere(), kelvin(), mole(), candela()] {
            assert!(unit.is_base());
            assert_eq!(unit.scale(), 1.0);
        }
    }

    #[test]
    fn test_gram_ladder() {
        let registry = registry();
        assert_eq!(registry.lookup("kg").unwrap(), kilogram());
        assert_eq!(registry.lookup("kilogram").unwrap().symbol(), Some("kg"));
        assert_relative_eq!(registry.lookup("mg").unwrap().scale(), 1e-6);
        assert_relative_eq!(registry.lookup("Mg").unwrap().scale(), 1e3);
        assert!(registry.contains("microgram"));
        assert!(registry.contains("ug"));
    }

    #[test]
    fn test_prefixed_names() {
        let registry = registry();
        assert_eq!(registry.lookup("km").unwrap(), registry.lookup("kilometer").unwrap());
        assert_eq!(registry.lookup("metre").unwrap(), meter());
        assert_relative_eq!(registry.lookup("ns").unwrap().scale(), 1e-9);
        assert!(registry.contains("mmol"));
        assert!(registry.contains("mK"));
    }
}
