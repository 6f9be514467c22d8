//! Astronomical lengths.
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Light-year (ly)** is derived from the exact speed of light `c = 299_792_458 m/s` and one Julian year
//!   (`365.25 d`, `d = 86400 s`).
//! - **Parsec (pc)** is defined from au via `pc = au × 648000 / π`; kpc, Mpc and Gpc are prefixed parsecs.
//!
//! ```rust
//! use measura::{convert, unit_from_name};
//!
//! let au = unit_from_name("au").unwrap();
//! let km = unit_from_name("km").unwrap();
//! assert!((convert(1.0, &au, &km).unwrap() - 149_597_870.7).abs() < 1e-6);
//! ```

use super::add;
use crate::registry::UnitRegistry;
use core::f64::consts::PI;
use measura_core::{Prefix, Unit, UnitResult};

/// Metres per astronomical unit (exact).
pub const AU_IN_METERS: f64 = 149_597_870_700.0;

/// Speed of light in m/s (exact).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    let m = registry.lookup("m")?;
    let year = registry.lookup("yr")?;

    let au = Unit::scaled("au", &m, AU_IN_METERS)?;
    let light_year = Unit::scaled("ly", &m, SPEED_OF_LIGHT * year.scale())?;
    let parsec = Unit::scaled("pc", &au, 648_000.0 / PI)?;

    add(registry, &au, "astronomical_unit", &["AU"])?;
    add(registry, &light_year, "light_year", &[])?;
    add(registry, &parsec, "parsec", &[])?;
    for (prefix, name) in [
        (Prefix::Kilo, "kiloparsec"),
        (Prefix::Mega, "megaparsec"),
        (Prefix::Giga, "gigaparsec"),
    ] {
        add(registry, &Unit::prefixed(prefix, &parsec)?, name, &[])?;
    }
    Ok(())
}
