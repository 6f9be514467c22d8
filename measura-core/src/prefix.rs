//! SI decimal prefixes.

use core::fmt;

/// An SI decimal prefix (quetta‑ 10³⁰ … quecto‑ 10⁻³⁰).
///
/// Prefixes only build units through [`crate::Unit::prefixed`]; they are not units themselves.
///
/// ```rust
/// use measura_core::Prefix;
/// assert_eq!(Prefix::Kilo.symbol(), "k");
/// assert_eq!(Prefix::Micro.factor(), 1e-6);
/// assert_eq!(Prefix::from_symbol("M"), Some(Prefix::Mega));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// 10³⁰
    Quetta,
    /// 10²⁷
    Ronna,
    /// 10²⁴
    Yotta,
    /// 10²¹
    Zetta,
    /// 10¹⁸
    Exa,
    /// 10¹⁵
    Peta,
    /// 10¹²
    Tera,
    /// 10⁹
    Giga,
    /// 10⁶
    Mega,
    /// 10³
    Kilo,
    /// 10²
    Hecto,
    /// 10¹
    Deca,
    /// 10⁻¹
    Deci,
    /// 10⁻²
    Centi,
    /// 10⁻³
    Milli,
    /// 10⁻⁶
    Micro,
    /// 10⁻⁹
    Nano,
    /// 10⁻¹²
    Pico,
    /// 10⁻¹⁵
    Femto,
    /// 10⁻¹⁸
    Atto,
    /// 10⁻²¹
    Zepto,
    /// 10⁻²⁴
    Yocto,
    /// 10⁻²⁷
    Ronto,
    /// 10⁻³⁰
    Quecto,
}

impl Prefix {
    /// Every prefix, largest first.
    pub const ALL: [Prefix; 24] = [
        Prefix::Quetta,
        Prefix::Ronna,
        Prefix::Yotta,
        Prefix::Zetta,
        Prefix::Exa,
        Prefix::Peta,
        Prefix::Tera,
        Prefix::Giga,
        Prefix::Mega,
        Prefix::Kilo,
        Prefix::Hecto,
        Prefix::Deca,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Pico,
        Prefix::Femto,
        Prefix::Atto,
        Prefix::Zepto,
        Prefix::Yocto,
        Prefix::Ronto,
        Prefix::Quecto,
    ];

    /// Printable symbol (`"k"`, `"µ"`, `"da"`, …).
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Quetta => "Q",
            Prefix::Ronna => "R",
            Prefix::Yotta => "Y",
            Prefix::Zetta => "Z",
            Prefix::Exa => "E",
            Prefix::Peta => "P",
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Hecto => "h",
            Prefix::Deca => "da",
            Prefix::Deci => "d",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::Femto => "f",
            Prefix::Atto => "a",
            Prefix::Zepto => "z",
            Prefix::Yocto => "y",
            Prefix::Ronto => "r",
            Prefix::Quecto => "q",
        }
    }

    /// Lower-case prefix name (`"kilo"`, `"micro"`, …).
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Quetta => "quetta",
            Prefix::Ronna => "ronna",
            Prefix::Yotta => "yotta",
            Prefix::Zetta => "zetta",
            Prefix::Exa => "exa",
            Prefix::Peta => "peta",
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Hecto => "hecto",
            Prefix::Deca => "deca",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
            Prefix::Femto => "femto",
            Prefix::Atto => "atto",
            Prefix::Zepto => "zepto",
            Prefix::Yocto => "yocto",
            Prefix::Ronto => "ronto",
            Prefix::Quecto => "quecto",
        }
    }

    /// Power of ten applied by this prefix.
    pub const fn power_of_ten(self) -> i32 {
        match self {
            Prefix::Quetta => 30,
            Prefix::Ronna => 27,
            Prefix::Yotta => 24,
            Prefix::Zetta => 21,
            Prefix::Exa => 18,
            Prefix::Peta => 15,
            Prefix::Tera => 12,
            Prefix::Giga => 9,
            Prefix::Mega => 6,
            Prefix::Kilo => 3,
            Prefix::Hecto => 2,
            Prefix::Deca => 1,
            Prefix::Deci => -1,
            Prefix::Centi => -2,
            Prefix::Milli => -3,
            Prefix::Micro => -6,
            Prefix::Nano => -9,
            Prefix::Pico => -12,
            Prefix::Femto => -15,
            Prefix::Atto => -18,
            Prefix::Zepto => -21,
            Prefix::Yocto => -24,
            Prefix::Ronto => -27,
            Prefix::Quecto => -30,
        }
    }

    /// Multiplier applied by this prefix.
    ///
    /// Literal constants rather than `10f64.powi(n)`, which drifts for negative powers.
    pub const fn factor(self) -> f64 {
        match self {
            Prefix::Quetta => 1e30,
            Prefix::Ronna => 1e27,
            Prefix::Yotta => 1e24,
            Prefix::Zetta => 1e21,
            Prefix::Exa => 1e18,
            Prefix::Peta => 1e15,
            Prefix::Tera => 1e12,
            Prefix::Giga => 1e9,
            Prefix::Mega => 1e6,
            Prefix::Kilo => 1e3,
            Prefix::Hecto => 1e2,
            Prefix::Deca => 1e1,
            Prefix::Deci => 1e-1,
            Prefix::Centi => 1e-2,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
            Prefix::Pico => 1e-12,
            Prefix::Femto => 1e-15,
            Prefix::Atto => 1e-18,
            Prefix::Zepto => 1e-21,
            Prefix::Yocto => 1e-24,
            Prefix::Ronto => 1e-27,
            Prefix::Quecto => 1e-30,
        }
    }

    /// Looks a prefix up by symbol. `"u"` is accepted for micro.
    pub fn from_symbol(symbol: &str) -> Option<Prefix> {
        if symbol == "u" || symbol == "μ" {
            return Some(Prefix::Micro);
        }
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }

    /// Looks a prefix up by name (`"kilo"`).
    pub fn from_name(name: &str) -> Option<Prefix> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
