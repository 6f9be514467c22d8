//! US customary and imperial units.
//!
//! Definitions follow the 1959 international yard and pound agreement:
//!
//! - **Length**: `in = 0.0254 m` exactly; foot, yard and mile derived from it; nautical mile `= 1852 m`.
//! - **Mass**: `lb = 0.45359237 kg` exactly; `oz = lb / 16`.
//! - **Volume**: US liquid gallon `= 231 in^3 = 3.785411784 L`.
//! - **Force and pressure**: pound-force `= lb × 9.80665 m/s^2`; `psi = lbf / in^2`.
//! - **Speed**: miles per hour, knot (`nmi / h`).
//!
//! ```rust
//! use measura::{convert, unit_from_name};
//!
//! let mi = unit_from_name("mile").unwrap();
//! let km = unit_from_name("km").unwrap();
//! assert!((convert(1.0, &mi, &km).unwrap() - 1.609344).abs() < 1e-12);
//! ```

use super::add;
use crate::registry::UnitRegistry;
use measura_core::{Unit, UnitResult};

/// Metres per international inch (exact).
pub const INCH_IN_METERS: f64 = 0.0254;

/// Kilograms per avoirdupois pound (exact).
pub const POUND_IN_KILOGRAMS: f64 = 0.453_592_37;

/// Standard gravity in m/s² (exact).
pub const STANDARD_GRAVITY: f64 = 9.806_65;

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    let m = registry.lookup("m")?;
    let kg = registry.lookup("kg")?;
    let s = registry.lookup("s")?;
    let h = registry.lookup("h")?;
    let litre = registry.lookup("L")?;

    let inch = Unit::scaled("in", &m, INCH_IN_METERS)?;
    let foot = Unit::scaled("ft", &inch, 12.0)?;
    let yard = Unit::scaled("yd", &foot, 3.0)?;
    let mile = Unit::scaled("mi", &yard, 1_760.0)?;
    let nautical_mile = Unit::scaled("nmi", &m, 1_852.0)?;
    add(registry, &inch, "inch", &["inches"])?;
    add(registry, &foot, "foot", &["feet"])?;
    add(registry, &yard, "yard", &["yards"])?;
    add(registry, &mile, "mile", &["miles"])?;
    add(registry, &nautical_mile, "nautical_mile", &[])?;

    let pound = Unit::scaled("lb", &kg, POUND_IN_KILOGRAMS)?;
    let ounce = Unit::scaled("oz", &pound, 1.0 / 16.0)?;
    add(registry, &pound, "pound", &["lbs"])?;
    add(registry, &ounce, "ounce", &[])?;

    let gallon = Unit::scaled("gal", &litre, 3.785_411_784)?;
    add(registry, &gallon, "gallon", &[])?;

    let gravity = m.divide(&s.powi(2)?)?;
    let pound_force = pound
        .multiply(&Unit::scaled("g0", &gravity, STANDARD_GRAVITY)?)?
        .with_symbol("lbf");
    let psi = pound_force.divide(&inch.powi(2)?)?.with_symbol("psi");
    add(registry, &pound_force, "pound_force", &[])?;
    add(registry, &psi, "pounds_per_square_inch", &[])?;

    let mph = mile.divide(&h)?.with_symbol("mph");
    let knot = nautical_mile.divide(&h)?.with_symbol("kn");
    add(registry, &mph, "miles_per_hour", &[])?;
    add(registry, &knot, "knot", &["kt"])?;
    Ok(())
}
