//! Named SI derived units.
//!
//! Each unit is composed from the base units and renamed, so its reduction is exact by construction
//! (`J = N m = kg m^2 s^-2`). All of them except the steradian also get their metric family.
//!
//! ```rust
//! use measura::{dimension, unit_from_name};
//!
//! let kj = unit_from_name("kJ").unwrap();
//! assert_eq!(kj.dimension(), &dimension::common::energy());
//! assert_eq!(kj.scale(), 1_000.0);
//! ```

use super::{add, add_family};
use crate::registry::UnitRegistry;
use measura_core::UnitResult;

pub(crate) fn register(registry: &mut UnitRegistry) -> UnitResult<()> {
    let m = registry.lookup("m")?;
    let kg = registry.lookup("kg")?;
    let s = registry.lookup("s")?;
    let a = registry.lookup("A")?;
    let mol = registry.lookup("mol")?;
    let cd = registry.lookup("cd")?;
    let m2 = m.powi(2)?;

    let hertz = s.invert()?.with_symbol("Hz");
    let newton = kg.multiply(&m)?.divide(&s.powi(2)?)?.with_symbol("N");
    let pascal = newton.divide(&m2)?.with_symbol("Pa");
    let joule = newton.multiply(&m)?.with_symbol("J");
    let watt = joule.divide(&s)?.with_symbol("W");
    let coulomb = a.multiply(&s)?.with_symbol("C");
    let volt = watt.divide(&a)?.with_symbol("V");
    let farad = coulomb.divide(&volt)?.with_symbol("F");
    let ohm = volt.divide(&a)?.with_symbol("Ω");
    let siemens = ohm.invert()?.with_symbol("S");
    let weber = volt.multiply(&s)?.with_symbol("Wb");
    let tesla = weber.divide(&m2)?.with_symbol("T");
    let henry = weber.divide(&a)?.with_symbol("H");
    let gray = joule.divide(&kg)?.with_symbol("Gy");
    let sievert = joule.divide(&kg)?.with_symbol("Sv");
    let becquerel = s.invert()?.with_symbol("Bq");
    let katal = mol.divide(&s)?.with_symbol("kat");
    let radian = m.divide(&m)?.with_symbol("rad");
    let steradian = m2.divide(&m2)?.with_symbol("sr");
    let lumen = cd.multiply(&steradian)?.with_symbol("lm");
    let lux = lumen.divide(&m2)?.with_symbol("lx");

    add_family(registry, &hertz, "hertz", &[])?;
    add_family(registry, &newton, "newton", &[])?;
    add_family(registry, &pascal, "pascal", &[])?;
    add_family(registry, &joule, "joule", &[])?;
    add_family(registry, &watt, "watt", &[])?;
    add_family(registry, &coulomb, "coulomb", &[])?;
    add_family(registry, &volt, "volt", &[])?;
    add_family(registry, &farad, "farad", &[])?;
    add_family(registry, &ohm, "ohm", &["Ohm"])?;
    add_family(registry, &siemens, "siemens", &[])?;
    add_family(registry, &weber, "weber", &[])?;
    add_family(registry, &tesla, "tesla", &[])?;
    add_family(registry, &henry, "henry", &[])?;
    add_family(registry, &gray, "gray", &[])?;
    add_family(registry, &sievert, "sievert", &[])?;
    add_family(registry, &becquerel, "becquerel", &[])?;
    add_family(registry, &katal, "katal", &[])?;
    add_family(registry, &lumen, "lumen", &[])?;
    add_family(registry, &lux, "lux", &[])?;
    add_family(registry, &radian, "radian", &[])?;
    add(registry, &steradian, "steradian", &[])?;
    Ok(())
}
