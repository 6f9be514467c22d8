//! Temperature scales.
//!
//! Celsius and Fahrenheit are affine over the kelvin; Rankine is a plain scaling of it.
//!
//! - `°C`: `K = °C + 273.15`
//! - `°F`: `K = 5/9 × °F + 45967/180` (so that `32 °F = 273.15 K`)
//! - `°R`: `K = 5/9 × °R`
//!
//! Affine scales convert correctly but cannot be composed (`°C × °C` is an error) or prefixed.
//!
//! ```rust
//! use measura::{convert, unit_from_name};
//!
//! let c = unit_from_name("°C").unwrap();
//! let f = unit_from_name("degF").unwrap();
//! assert!((convert(100.0, &c, &f).unwrap() - 212.0).abs() < 1e-9);
//! assert!(c.multiply(&c).is_err());
//! ```

use super::add;
use crate::registry::UnitRegistry;
use measura_core::{Unit, UnitResult};

/// Offset of the Celsius zero in kelvin.
pub const CELSIUS_ZERO: f64 = 273.15;

/// Kelvin per degree Fahrenheit (and per degree Rankine).
pub const FAHRENHEIT_FACTOR: f64 = 5.0 / 9.0;

/// Kelvin at 0 °F (`459.67 × 5/9`).
pub const FAHRENHEIT_ZERO: f64 = 45967.0 / 180.0;

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    let kelvin = registry.lookup("K")?;

    let celsius = Unit::affine("°C", &kelvin, 1.0, CELSIUS_ZERO)?;
    let fahrenheit = Unit::affine("°F", &kelvin, FAHRENHEIT_FACTOR, FAHRENHEIT_ZERO)?;
    let rankine = Unit::scaled("°R", &kelvin, FAHRENHEIT_FACTOR)?;

    add(registry, &celsius, "celsius", &["degC"])?;
    add(registry, &fahrenheit, "fahrenheit", &["degF"])?;
    add(registry, &rankine, "rankine", &["degR"])?;
    Ok(())
}
