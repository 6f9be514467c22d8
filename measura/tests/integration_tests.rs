//! Integration-level tests for the `measura` facade crate.

use measura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::io::Write;

fn unit(name: &str) -> Unit {
    unit_from_name(name).unwrap()
}

fn q(value: f64, name: &str) -> Quantity {
    Quantity::new(value, unit(name))
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilometer_to_meter() {
    assert_eq!(convert(1.0, &unit("km"), &unit("m")).unwrap(), 1_000.0);
}

#[test]
fn celsius_to_kelvin() {
    let c = unit("°C");
    let k = unit("K");
    assert_relative_eq!(convert(0.0, &c, &k).unwrap(), 273.15);
    assert_relative_eq!(convert(100.0, &c, &k).unwrap(), 373.15);
}

#[test]
fn fahrenheit_roundtrip_through_celsius() {
    let f = unit("°F");
    let c = unit("°C");
    assert_abs_diff_eq!(convert(98.6, &f, &c).unwrap(), 37.0, epsilon = 1e-9);
    assert_abs_diff_eq!(convert(37.0, &c, &f).unwrap(), 98.6, epsilon = 1e-9);
}

#[test]
fn incompatible_conversion_fails() {
    let err = convert(1.0, &unit("m"), &unit("s")).unwrap_err();
    assert!(matches!(err, UnitError::IncompatibleUnits { .. }));
    assert!(!are_compatible(&unit("m"), &unit("s")));
    assert!(are_compatible(&unit("ft"), &unit("ly")));
}

#[test]
fn composed_speed_converts_to_mph() {
    let kmh = unit("km").divide(&unit("h")).unwrap();
    let speed = Quantity::new(100.0, kmh);
    let mph = speed.convert_to(&unit("mph")).unwrap();
    assert_relative_eq!(mph.value(), 62.137_119_223_733_4, max_relative = 1e-12);
}

#[test]
fn energy_equivalences() {
    let j = unit("J");
    let n_m = unit("N").multiply(&unit("m")).unwrap();
    assert_eq!(j, n_m);
    assert_eq!(dimension_of(&j), &dimension::common::energy());
    assert_relative_eq!(convert(1.0, &unit("kWh"), &j).unwrap(), 3.6e6);
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn speed_from_distance_and_time() {
    let v = q(10.0, "m").div(&q(2.0, "s")).unwrap();
    assert_eq!(v.value(), 5.0);
    assert_eq!(v.dimension(), &dimension::common::velocity());
}

#[test]
fn divide_by_zero_seconds() {
    let err = q(5.0, "m").div(&q(0.0, "s")).unwrap_err();
    assert_eq!(err, UnitError::DivisionByZero);
}

#[test]
fn add_meters_and_seconds_fails() {
    let err = q(1.0, "m").add(&q(1.0, "s")).unwrap_err();
    assert!(matches!(err, UnitError::DimensionMismatch { .. }));
}

#[test]
fn scalar_division_by_zero_fails() {
    assert_eq!(q(5.0, "m").div_scalar(0.0).unwrap_err(), UnitError::DivisionByZero);
    assert_eq!(q(5.0, "m").div_scalar(2.0).unwrap(), q(2.5, "m"));
}

#[test]
fn whole_hours_in_minutes() {
    let (hours, rest) = q(130.0, "min").divmod(&q(1.0, "h")).unwrap();
    assert_eq!(hours, 2.0);
    assert_eq!(rest.value(), 10.0);
    assert_eq!(rest.unit().symbol(), Some("min"));
    assert_eq!(q(-10.0, "min").rem(&q(1.0, "h")).unwrap().value(), 50.0);
}

#[test]
fn celsius_squared_fails() {
    let c = unit("°C");
    assert!(matches!(
        c.multiply(&c),
        Err(UnitError::InvalidAffineComposition(_))
    ));
    assert!(matches!(
        q(20.0, "°C").mul(&q(2.0, "m")),
        Err(UnitError::InvalidAffineComposition(_))
    ));
}

#[test]
fn mixed_unit_sum_and_comparison() {
    let total = q(1.0, "mi").add(&q(1.0, "km")).unwrap();
    assert_eq!(total.unit().symbol(), Some("mi"));
    assert_relative_eq!(total.value(), 1.0 + 1_000.0 / 1_609.344, max_relative = 1e-12);
    assert_eq!(q(1.0, "mi").compare(&q(1.0, "km")).unwrap(), Ordering::Greater);
    assert!(q(1.0, "ft") < q(1.0, "m"));
    assert_relative_eq!(
        q(1.0, "ft").convert_to(&unit("in")).unwrap().value(),
        12.0,
        max_relative = 1e-12
    );
}

#[test]
fn kinetic_energy() {
    let mass = q(2.0, "kg");
    let speed = q(3.0, "m").div(&q(1.0, "s")).unwrap();
    let energy = &mass.mul(&speed.powi(2).unwrap()).unwrap() * 0.5;
    let joules = energy.convert_to(&unit("J")).unwrap();
    assert_relative_eq!(joules.value(), 9.0, max_relative = 1e-12);
    assert_eq!(energy.to_string(), "9 kg m^2 s^-2");
}

#[test]
fn define_btu_from_quantity() {
    let btu = q(1055.0, "J").as_unit("BTU").unwrap();
    assert_eq!(btu, unit("BTU"));
    assert_relative_eq!(q(3.0, "BTU").convert_to(&unit("kJ")).unwrap().value(), 3.165, max_relative = 1e-12);
}

#[test]
fn dimensionless_collapse() {
    let ratio = q(3.0, "km").div(&q(500.0, "m")).unwrap();
    assert!(ratio.unit().is_dimensionless());
    assert_relative_eq!(ratio.into_scalar().unwrap(), 6.0, max_relative = 1e-12);
    assert!(q(1.0, "m").into_scalar().is_err());
}

#[test]
fn rational_powers() {
    let area = q(9.0, "m").mul(&q(4.0, "m")).unwrap();
    let side = area.sqrt().unwrap();
    assert_eq!(side.value(), 6.0);
    assert_eq!(side.dimension(), &DimensionVector::length());

    let root_hz = unit("Hz").sqrt().unwrap();
    assert_eq!(
        root_hz.dimension().exponent(&BaseDimension::Time),
        Exponent::new(-1, 2)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry and configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn builtin_registry_is_shared() {
    let a = builtin_registry().unwrap();
    let b = builtin_registry().unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(a.len() > 500);
    for name in [
        "m", "kg", "g", "s", "A", "K", "mol", "cd", "Hz", "N", "Pa", "J", "W", "C", "V", "F", "Ω", "S", "Wb",
        "T", "H", "Gy", "Sv", "Bq", "kat", "lm", "lx", "rad", "sr", "°C", "°F", "°R", "min", "h", "d", "wk",
        "yr", "in", "ft", "yd", "mi", "nmi", "lb", "oz", "gal", "au", "ly", "pc", "L", "t", "bar", "atm", "psi",
        "eV", "cal", "BTU", "erg", "Wh", "kWh", "Å", "ha",
    ] {
        assert!(a.contains(name), "missing builtin unit {}", name);
    }
}

#[test]
fn unknown_unit_name() {
    assert_eq!(
        unit_from_name("parsnip").unwrap_err(),
        UnitError::UnknownUnit("parsnip".into())
    );
}

#[test]
fn registry_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
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

[[unit]]
symbol = "°Ré"
name = "reaumur"
of = "K"
factor = 1.25
offset = 273.15
"#
    )
    .unwrap();

    let registry = UnitRegistry::from_config_file(file.path()).unwrap();
    assert!(registry.contains("km"));

    let mb = registry.lookup("MB").unwrap();
    let kbit = registry.lookup("kilobit").unwrap();
    assert_relative_eq!(convert(1.0, &mb, &kbit).unwrap(), 8_000.0, max_relative = 1e-12);

    let bandwidth = mb.divide(&registry.lookup("s").unwrap()).unwrap();
    assert_eq!(bandwidth.dimension().to_string(), "T^-1 information");

    let re = registry.lookup("reaumur").unwrap();
    let c = registry.lookup("°C").unwrap();
    assert_abs_diff_eq!(convert(80.0, &re, &c).unwrap(), 100.0, epsilon = 1e-9);
}

#[test]
fn registry_config_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[unit]]\nsymbol = \"x\"\nof = \"nope\"").unwrap();
    assert_eq!(
        UnitRegistry::from_config_file(file.path()).unwrap_err(),
        UnitError::UnknownUnit("nope".into())
    );
    assert!(matches!(
        UnitRegistry::from_config_file("/does/not/exist.toml"),
        Err(UnitError::Config(_))
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn dimension_vector_serde() {
    let d = unit("W").dimension().clone();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"M":"1","L":"2","T":"-3"}"#);
    let back: DimensionVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

const LENGTHS: [&str; 8] = ["m", "km", "mm", "in", "ft", "mi", "au", "pc"];

proptest! {
    #[test]
    fn prop_length_roundtrip(v in -1e6..1e6f64, i in 0usize..8, j in 0usize..8) {
        let a = unit(LENGTHS[i]);
        let b = unit(LENGTHS[j]);
        let back = convert(convert(v, &a, &b).unwrap(), &b, &a).unwrap();
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn prop_add_commutes_across_units(a in -1e3..1e3f64, b in -1e3..1e3f64, i in 0usize..8, j in 0usize..8) {
        let p = q(a, LENGTHS[i]);
        let r = q(b, LENGTHS[j]);
        let pr = p.add(&r).unwrap().to_base_value();
        let rp = r.add(&p).unwrap().to_base_value();
        prop_assert!((pr - rp).abs() <= 1e-9 * pr.abs().max(rp.abs()).max(1.0));
    }

    #[test]
    fn prop_dimension_of_product(i in 0usize..8, j in 0usize..8) {
        let a = unit(LENGTHS[i]);
        let b = unit(["s", "kg", "K", "N", "J", "Hz", "V", "mol"][j]);
        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.dimension().clone(), a.dimension().multiply(b.dimension()));
    }
}
