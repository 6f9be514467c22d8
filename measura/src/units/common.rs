//! Non-SI units accepted for use with the SI, plus a few common energy units.
//!
//! - **Time**: minute, hour, day, week and the Julian year (`365.25 d`).
//! - **Volume and area**: litre (`1e-3 m^3`, with metric family), hectare.
//! - **Mass**: tonne (`1000 kg`).
//! - **Length**: ångström (`1e-10 m`).
//! - **Pressure**: bar (with metric family), standard atmosphere (`101325 Pa`).
//! - **Energy**: electronvolt (exact since the 2019 SI redefinition), thermochemical calorie (`4.184 J`),
//!   watt-hour, British thermal unit (`1055 J`), erg (`1e-7 J`).
//! - **Angle**: degree, arcminute, arcsecond.

use super::{add, add_family};
use crate::registry::UnitRegistry;
use core::f64::consts::PI;
use measura_core::{Quantity, Unit, UnitResult};

/// Joules per electronvolt (exact).
pub const ELECTRONVOLT_IN_JOULES: f64 = 1.602_176_634e-19;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    register_time(registry)?;

    let m = registry.lookup("m")?;
    let kg = registry.lookup("kg")?;
    let pa = registry.lookup("Pa")?;
    let j = registry.lookup("J")?;
    let w = registry.lookup("W")?;
    let h = registry.lookup("h")?;
    let rad = registry.lookup("rad")?;

    let litre = Unit::scaled("L", &m.powi(3)?, 1e-3)?;
    add_family(registry, &litre, "liter", &["litre", "l"])?;
    add(registry, &Unit::scaled("ha", &m.powi(2)?, 1e4)?, "hectare", &[])?;
    add(registry, &Unit::scaled("t", &kg, 1e3)?, "tonne", &["metric_ton"])?;
    add(registry, &Unit::scaled("Å", &m, 1e-10)?, "angstrom", &[])?;

    add_family(registry, &Unit::scaled("bar", &pa, 1e5)?, "bar", &[])?;
    add(registry, &Unit::scaled("atm", &pa, 101_325.0)?, "atmosphere", &[])?;

    let ev = Unit::scaled("eV", &j, ELECTRONVOLT_IN_JOULES)?;
    add_family(registry, &ev, "electronvolt", &[])?;
    add_family(registry, &Unit::scaled("cal", &j, 4.184)?, "calorie", &[])?;
    add_family(registry, &w.multiply(&h)?.with_symbol("Wh"), "watthour", &[])?;
    let btu = Quantity::new(1055.0, j.clone()).as_unit("BTU")?;
    add(registry, &btu, "british_thermal_unit", &["Btu"])?;
    add(registry, &Unit::scaled("erg", &j, 1e-7)?, "erg", &[])?;

    let degree = Unit::scaled("deg", &rad, PI / 180.0)?;
    add(registry, &degree, "degree", &["°"])?;
    add(registry, &Unit::scaled("arcmin", &degree, 1.0 / 60.0)?, "arcminute", &[])?;
    add(registry, &Unit::scaled("arcsec", &degree, 1.0 / 3600.0)?, "arcsecond", &[])?;
    Ok(())
}

fn register_time(registry: &mut UnitRegistry) -> UnitResult<()> {
    let s = registry.lookup("s")?;
    let minute = Unit::scaled("min", &s, 60.0)?;
    let hour = Unit::scaled("h", &minute, 60.0)?;
    let day = Unit::scaled("d", &hour, 24.0)?;
    let week = Unit::scaled("wk", &day, 7.0)?;
    let year = Unit::scaled("yr", &day, DAYS_PER_JULIAN_YEAR)?;

    add(registry, &minute, "minute", &[])?;
    add(registry, &hour, "hour", &["hr"])?;
    add(registry, &day, "day", &[])?;
    add(registry, &week, "week", &[])?;
    add(registry, &year, "year", &["a", "julian_year"])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use measura_core::convert;

    fn registry() -> UnitRegistry {
        let mut registry = UnitRegistry::new();
        crate::units::si_base::register(&mut registry).unwrap();
        crate::units::si_derived::register(&mut registry).unwrap();
        register(&mut registry).unwrap();
        registry
    }

    fn to(registry: &UnitRegistry, value: f64, from: &str, target: &str) -> f64 {
        convert(
            value,
            &registry.lookup(from).unwrap(),
            &registry.lookup(target).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_time_ladder() {
        let registry = registry();
        assert_relative_eq!(to(&registry, 1.0, "h", "s"), 3_600.0);
        assert_relative_eq!(to(&registry, 1.0, "wk", "d"), 7.0);
        assert_relative_eq!(to(&registry, 1.0, "yr", "s"), 31_557_600.0);
    }

    #[test]
    fn test_volume_and_area() {
        let registry = registry();
        let m3 = registry.lookup("m").unwrap().powi(3).unwrap();
        assert_relative_eq!(
            convert(1.0, &m3, &registry.lookup("liter").unwrap()).unwrap(),
            1_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(to(&registry, 250.0, "mL", "L"), 0.25, max_relative = 1e-12);
        let m2 = registry.lookup("m").unwrap().powi(2).unwrap();
        assert_relative_eq!(
            convert(1.0, &registry.lookup("ha").unwrap(), &m2).unwrap(),
            1e4
        );
    }

    #[test]
    fn test_energy_units() {
        let registry = registry();
        assert_relative_eq!(to(&registry, 1.0, "kWh", "MJ"), 3.6, max_relative = 1e-12);
        assert_relative_eq!(to(&registry, 1.0, "kcal", "J"), 4_184.0, max_relative = 1e-12);
        assert_relative_eq!(to(&registry, 1.0, "BTU", "J"), 1_055.0);
        assert_relative_eq!(to(&registry, 1.0, "J", "erg"), 1e7, max_relative = 1e-12);
        assert_relative_eq!(
            to(&registry, 1.0, "MeV", "J"),
            1.602_176_634e-13,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_pressure_and_angle() {
        let registry = registry();
        assert_relative_eq!(to(&registry, 1.0, "atm", "mbar"), 1_013.25, max_relative = 1e-12);
        assert_relative_eq!(to(&registry, 180.0, "deg", "rad"), PI, max_relative = 1e-12);
        assert_relative_eq!(to(&registry, 1.0, "deg", "arcsec"), 3_600.0, max_relative = 1e-12);
    }
}
