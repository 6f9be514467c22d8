//! Dimension vectors over the SI base dimensions.
//!
//! Every physical quantity has a dimension expressed as a product of powers of base dimensions:
//!
//! - M: Mass (kilogram)
//! - L: Length (metre)
//! - T: Time (second)
//! - I: Electric current (ampere)
//! - Θ: Thermodynamic temperature (kelvin)
//! - N: Amount of substance (mole)
//! - J: Luminous intensity (candela)
//!
//! plus any number of [`BaseDimension::Custom`] dimensions (information, currency, …).
//!
//! Exponents are exact rationals ([`Exponent`]), so `sqrt(L²) == L` holds exactly.
//!
//! ```rust
//! use measura_core::dimension::{self, DimensionVector};
//!
//! let velocity = DimensionVector::length().divide(&DimensionVector::time());
//! assert_eq!(velocity, dimension::common::velocity());
//! assert_eq!(velocity.to_string(), "L T^-1");
//! ```

use crate::Exponent;
use core::fmt;
use core::ops::{Div, Mul};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A base dimension: one axis of a [`DimensionVector`].
///
/// The declaration order fixes the display order (`M L T I Θ N J`, custom dimensions last).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
    /// Mass [M].
    Mass,
    /// Length [L].
    Length,
    /// Time [T].
    Time,
    /// Electric current [I].
    Current,
    /// Thermodynamic temperature [Θ].
    Temperature,
    /// Amount of substance [N].
    Amount,
    /// Luminous intensity [J].
    LuminousIntensity,
    /// A user-defined base dimension, identified by name.
    ///
    /// Build it with [`BaseDimension::custom`]; a `Custom` holding an SI symbol or name does not compare equal to
    /// the SI dimension and will not survive a serde round-trip.
    Custom(Arc<str>),
}

impl BaseDimension {
    /// The SI base dimensions, in display order.
    pub const SI: [BaseDimension; 7] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Creates a custom base dimension.
    ///
    /// A name that is an SI symbol or name (`"L"`, `"length"`) resolves to the SI dimension instead, so a custom
    /// dimension never shadows an SI one and the serialized form stays unambiguous.
    ///
    /// ```rust
    /// use measura_core::BaseDimension;
    /// assert_eq!(BaseDimension::custom("length"), BaseDimension::Length);
    /// assert!(matches!(BaseDimension::custom("information"), BaseDimension::Custom(_)));
    /// ```
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Self::si_named(&name).unwrap_or(BaseDimension::Custom(name))
    }

    fn si_named(name: &str) -> Option<Self> {
        Self::SI
            .iter()
            .find(|base| base.symbol() == name || base.name() == name)
            .cloned()
    }

    /// Dimension symbol used for display (`"L"`, `"Θ"`, or the custom name).
    pub fn symbol(&self) -> &str {
        match self {
            BaseDimension::Mass => "M",
            BaseDimension::Length => "L",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
            BaseDimension::Custom(name) => name.as_ref(),
        }
    }

    /// Human-readable name (`"length"`, `"temperature"`, …).
    pub fn name(&self) -> &str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount",
            BaseDimension::LuminousIntensity => "luminous_intensity",
            BaseDimension::Custom(name) => name.as_ref(),
        }
    }

    /// Resolves a symbol or name to a base dimension.
    ///
    /// Anything that is not an SI symbol or name becomes a [`BaseDimension::Custom`] dimension.
    ///
    /// ```rust
    /// use measura_core::BaseDimension;
    /// assert_eq!(BaseDimension::from_name("Θ"), BaseDimension::Temperature);
    /// assert_eq!(BaseDimension::from_name("length"), BaseDimension::Length);
    /// assert_eq!(BaseDimension::from_name("information"), BaseDimension::custom("information"));
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::si_named(name).unwrap_or_else(|| BaseDimension::Custom(name.into()))
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Immutable vector of exponents over base dimensions.
///
/// Stored sparsely: zero exponents are never kept, so two vectors are equal exactly when every exponent
/// (implicit zeros included) matches. The empty vector is the dimension of dimensionless quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector {
    exponents: BTreeMap<BaseDimension, Exponent>,
}

impl DimensionVector {
    /// The dimensionless vector (all exponents zero).
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single base dimension to the first power.
    pub fn of(base: BaseDimension) -> Self {
        Self::from_pairs([(base, Exponent::one())])
    }

    /// Builds a vector from `(base, exponent)` pairs.
    ///
    /// Repeated bases accumulate; entries that cancel to zero are dropped.
    ///
    /// # Panics
    ///
    /// If accumulating a repeated base overflows an [`Exponent`].
    pub fn from_pairs<I, E>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (BaseDimension, E)>,
        E: Into<Exponent>,
    {
        let mut out = Self::default();
        for (base, exponent) in pairs {
            if out.accumulate(&base, exponent.into()).is_none() {
                overflow("from_pairs");
            }
        }
        out
    }

    /// Mass [M].
    pub fn mass() -> Self {
        Self::of(BaseDimension::Mass)
    }

    /// Length [L].
    pub fn length() -> Self {
        Self::of(BaseDimension::Length)
    }

    /// Time [T].
    pub fn time() -> Self {
        Self::of(BaseDimension::Time)
    }

    /// Electric current [I].
    pub fn current() -> Self {
        Self::of(BaseDimension::Current)
    }

    /// Thermodynamic temperature [Θ].
    pub fn temperature() -> Self {
        Self::of(BaseDimension::Temperature)
    }

    /// Amount of substance [N].
    pub fn amount() -> Self {
        Self::of(BaseDimension::Amount)
    }

    /// Luminous intensity [J].
    pub fn luminous_intensity() -> Self {
        Self::of(BaseDimension::LuminousIntensity)
    }

    fn accumulate(&mut self, base: &BaseDimension, exponent: Exponent) -> Option<()> {
        let sum = self.exponent(base).checked_add(&exponent)?;
        if sum.is_zero() {
            self.exponents.remove(base);
        } else {
            self.exponents.insert(base.clone(), sum);
        }
        Some(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────

    /// Multiplies dimensions (adds exponents): `[A] × [B]`.
    ///
    /// # Panics
    ///
    /// If an exponent overflows; see [`DimensionVector::checked_multiply`].
    pub fn multiply(&self, other: &Self) -> Self {
        self.checked_multiply(other)
            .unwrap_or_else(|| overflow("multiply"))
    }

    /// Reciprocal (negates all exponents): `[A]⁻¹`.
    ///
    /// # Panics
    ///
    /// If an exponent overflows; see [`DimensionVector::checked_invert`].
    pub fn invert(&self) -> Self {
        self.checked_invert().unwrap_or_else(|| overflow("invert"))
    }

    /// Divides dimensions (subtracts exponents): `[A] / [B]`.
    ///
    /// # Panics
    ///
    /// If an exponent overflows; see [`DimensionVector::checked_divide`].
    pub fn divide(&self, other: &Self) -> Self {
        self.checked_divide(other)
            .unwrap_or_else(|| overflow("divide"))
    }

    /// Raises to a rational power (scales all exponents): `[A]^p`.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Exponent};
    /// let area = DimensionVector::length().power(2);
    /// assert_eq!(area.power(Exponent::new(1, 2)), DimensionVector::length());
    /// ```
    ///
    /// # Panics
    ///
    /// If an exponent overflows; see [`DimensionVector::checked_power`].
    pub fn power(&self, exponent: impl Into<Exponent>) -> Self {
        self.checked_power(exponent)
            .unwrap_or_else(|| overflow("power"))
    }

    /// [`DimensionVector::multiply`], or `None` when an exponent leaves the range of [`Exponent`].
    pub fn checked_multiply(&self, other: &Self) -> Option<Self> {
        let mut out = self.clone();
        for (base, exponent) in &other.exponents {
            out.accumulate(base, *exponent)?;
        }
        Some(out)
    }

    /// [`DimensionVector::invert`], or `None` when an exponent cannot be negated.
    pub fn checked_invert(&self) -> Option<Self> {
        let exponents = self
            .exponents
            .iter()
            .map(|(base, exponent)| Some((base.clone(), Exponent::zero().checked_sub(exponent)?)))
            .collect::<Option<_>>()?;
        Some(Self { exponents })
    }

    /// [`DimensionVector::divide`], or `None` on exponent overflow.
    pub fn checked_divide(&self, other: &Self) -> Option<Self> {
        self.checked_multiply(&other.checked_invert()?)
    }

    /// [`DimensionVector::power`], or `None` on exponent overflow.
    ///
    /// ```rust
    /// use measura_core::DimensionVector;
    /// let huge = DimensionVector::length().power(1_i64 << 32);
    /// assert!(huge.checked_power(1_i64 << 32).is_none());
    /// ```
    pub fn checked_power(&self, exponent: impl Into<Exponent>) -> Option<Self> {
        let exponent = exponent.into();
        if exponent.is_zero() {
            return Some(Self::dimensionless());
        }
        let exponents = self
            .exponents
            .iter()
            .map(|(base, e)| Some((base.clone(), e.checked_mul(&exponent)?)))
            .collect::<Option<_>>()?;
        Some(Self { exponents })
    }

    /// Exact equality, implicit zeros included.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Introspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Exponent of `base` (zero when absent).
    pub fn exponent(&self, base: &BaseDimension) -> Exponent {
        self.exponents
            .get(base)
            .copied()
            .unwrap_or_else(Exponent::zero)
    }

    /// `true` for the zero vector.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    /// `true` when every exponent is an integer.
    pub fn is_integral(&self) -> bool {
        self.exponents.values().all(|e| e.is_integer())
    }

    /// Iterates over the non-zero `(base, exponent)` terms in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&BaseDimension, &Exponent)> {
        self.exponents.iter()
    }
}

#[cold]
fn overflow(operation: &str) -> ! {
    panic!("dimension exponent overflow in DimensionVector::{}", operation)
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        for (i, (base, exponent)) in self.exponents.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if exponent.is_one() {
                write!(f, "{}", base)?;
            } else {
                write!(f, "{}^{}", base, exponent)?;
            }
        }
        Ok(())
    }
}

impl Mul for &DimensionVector {
    type Output = DimensionVector;
    fn mul(self, rhs: Self) -> DimensionVector {
        self.multiply(rhs)
    }
}

impl Mul for DimensionVector {
    type Output = DimensionVector;
    fn mul(self, rhs: Self) -> DimensionVector {
        self.multiply(&rhs)
    }
}

impl Div for &DimensionVector {
    type Output = DimensionVector;
    fn div(self, rhs: Self) -> DimensionVector {
        self.divide(rhs)
    }
}

impl Div for DimensionVector {
    type Output = DimensionVector;
    fn div(self, rhs: Self) -> DimensionVector {
        self.divide(&rhs)
    }
}

impl From<BaseDimension> for DimensionVector {
    fn from(base: BaseDimension) -> Self {
        Self::of(base)
    }
}

/// Common derived dimensions.
pub mod common {
    use super::{BaseDimension, DimensionVector};

    fn dim<const N: usize>(pairs: [(BaseDimension, i64); N]) -> DimensionVector {
        DimensionVector::from_pairs(pairs)
    }

    /// Area [L²].
    pub fn area() -> DimensionVector {
        dim([(BaseDimension::Length, 2)])
    }

    /// Volume [L³].
    pub fn volume() -> DimensionVector {
        dim([(BaseDimension::Length, 3)])
    }

    /// Velocity [L T⁻¹].
    pub fn velocity() -> DimensionVector {
        dim([(BaseDimension::Length, 1), (BaseDimension::Time, -1)])
    }

    /// Acceleration [L T⁻²].
    pub fn acceleration() -> DimensionVector {
        dim([(BaseDimension::Length, 1), (BaseDimension::Time, -2)])
    }

    /// Frequency [T⁻¹].
    pub fn frequency() -> DimensionVector {
        dim([(BaseDimension::Time, -1)])
    }

    /// Force [M L T⁻²].
    pub fn force() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 1),
            (BaseDimension::Time, -2),
        ])
    }

    /// Energy [M L² T⁻²].
    pub fn energy() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 2),
            (BaseDimension::Time, -2),
        ])
    }

    /// Power [M L² T⁻³].
    pub fn power() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 2),
            (BaseDimension::Time, -3),
        ])
    }

    /// Pressure [M L⁻¹ T⁻²].
    pub fn pressure() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, -1),
            (BaseDimension::Time, -2),
        ])
    }

    /// Electric charge [I T].
    pub fn charge() -> DimensionVector {
        dim([(BaseDimension::Time, 1), (BaseDimension::Current, 1)])
    }

    /// Voltage [M L² T⁻³ I⁻¹].
    pub fn voltage() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 2),
            (BaseDimension::Time, -3),
            (BaseDimension::Current, -1),
        ])
    }

    /// Resistance [M L² T⁻³ I⁻²].
    pub fn resistance() -> DimensionVector {
        dim([
            (BaseDimension::Mass, 1),
            (BaseDimension::Length, 2),
            (BaseDimension::Time, -3),
            (BaseDimension::Current, -2),
        ])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BaseDimension, DimensionVector, Exponent};
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::collections::BTreeMap;

    impl Serialize for DimensionVector {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.exponents.len()))?;
            for (base, exponent) in &self.exponents {
                map.serialize_entry(base.symbol(), &exponent.to_string())?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for DimensionVector {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
            let mut pairs = Vec::with_capacity(raw.len());
            for (name, exponent) in raw {
                let exponent: Exponent = exponent.trim().parse().map_err(|_| {
                    de::Error::custom(format!(
                        "invalid exponent '{}' for dimension '{}'",
                        exponent, name
                    ))
                })?;
                pairs.push((BaseDimension::from_name(&name), exponent));
            }
            Ok(DimensionVector::from_pairs(pairs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn energy() -> DimensionVector {
        common::energy()
    }

    #[test]
    fn test_dimensionless_is_empty() {
        let d = DimensionVector::dimensionless();
        assert!(d.is_dimensionless());
        assert_eq!(d.to_string(), "1");
    }

    #[test]
    fn test_multiply_adds_exponents() {
        let force = common::force();
        let work = force.multiply(&DimensionVector::length());
        assert_eq!(work, energy());
    }

    #[test]
    fn test_cancellation_drops_terms() {
        let l = DimensionVector::length();
        let ratio = l.divide(&l);
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio.iter().count(), 0);
    }

    #[test]
    fn test_invert_negates() {
        let f = common::frequency();
        assert_eq!(f.invert(), DimensionVector::time());
        assert_eq!(f.invert().invert(), f);
    }

    #[test]
    fn test_power_rational() {
        let area = common::area();
        let side = area.power(Exponent::new(1, 2));
        assert_eq!(side, DimensionVector::length());

        let root_l = DimensionVector::length().power(Exponent::new(1, 2));
        assert_eq!(root_l.exponent(&BaseDimension::Length), Exponent::new(1, 2));
        assert!(!root_l.is_integral());
        assert_eq!(root_l.to_string(), "L^1/2");
    }

    #[test]
    fn test_power_zero_is_dimensionless() {
        assert!(energy().power(0).is_dimensionless());
    }

    #[test]
    fn test_equals_with_implicit_zeros() {
        let a = DimensionVector::from_pairs([
            (BaseDimension::Length, 1),
            (BaseDimension::Mass, 0),
        ]);
        assert!(a.equals(&DimensionVector::length()));
        assert!(!a.equals(&DimensionVector::time()));
    }

    #[test]
    fn test_from_pairs_accumulates() {
        let d = DimensionVector::from_pairs([
            (BaseDimension::Time, -1),
            (BaseDimension::Time, -1),
            (BaseDimension::Length, 1),
        ]);
        assert_eq!(d, common::acceleration());
    }

    #[test]
    fn test_display_order() {
        assert_eq!(energy().to_string(), "M L^2 T^-2");
        assert_eq!(common::voltage().to_string(), "M L^2 T^-3 I^-1");
    }

    #[test]
    fn test_custom_dimension() {
        let bits = DimensionVector::of(BaseDimension::custom("information"));
        let rate = bits.divide(&DimensionVector::time());
        assert_eq!(rate.to_string(), "T^-1 information");
        assert_ne!(rate, common::frequency());
        assert_eq!(
            BaseDimension::from_name("information"),
            BaseDimension::custom("information")
        );
    }

    #[test]
    fn test_from_name_resolves_si() {
        for base in BaseDimension::SI {
            assert_eq!(BaseDimension::from_name(base.symbol()), base);
            assert_eq!(BaseDimension::from_name(base.name()), base);
        }
    }

    #[test]
    fn test_custom_never_shadows_si() {
        assert_eq!(BaseDimension::custom("L"), BaseDimension::Length);
        assert_eq!(BaseDimension::custom("temperature"), BaseDimension::Temperature);
        assert_eq!(
            DimensionVector::of(BaseDimension::custom("length")),
            DimensionVector::length()
        );
    }

    #[test]
    fn test_checked_power_overflow() {
        let big = DimensionVector::length().power(1_i64 << 32);
        assert_eq!(big.exponent(&BaseDimension::Length), Exponent::from_integer(1 << 32));
        assert_eq!(big.checked_power(1_i64 << 32), None);
        assert_eq!(big.checked_power(2), Some(DimensionVector::length().power(1_i64 << 33)));
    }

    #[test]
    fn test_checked_multiply_overflow() {
        let near_max = DimensionVector::from_pairs([(BaseDimension::Time, i64::MAX)]);
        assert_eq!(near_max.checked_multiply(&DimensionVector::time()), None);
        assert!(near_max.checked_divide(&DimensionVector::time()).is_some());
        assert_eq!(
            near_max.checked_invert().map(|d| d.exponent(&BaseDimension::Time)),
            Some(Exponent::from_integer(-i64::MAX))
        );
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow")]
    fn test_unchecked_power_overflow_panics() {
        let big = DimensionVector::length().power(1_i64 << 32);
        let _ = big.power(1_i64 << 32);
    }

    #[test]
    fn test_operators() {
        let l = DimensionVector::length();
        let t = DimensionVector::time();
        assert_eq!(&l / &t, common::velocity());
        assert_eq!(l.clone() * l, common::area());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_with_fractional_exponent() {
        let d = energy().multiply(&DimensionVector::length().power(Exponent::new(1, 2)));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"M":"1","L":"5/2","T":"-2"}"#);
        let back: DimensionVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_custom_dimension() {
        let d = DimensionVector::of(BaseDimension::custom("information"))
            .divide(&DimensionVector::time());
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"T":"-1","information":"1"}"#);
        let back: DimensionVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    fn arb_dimension() -> impl Strategy<Value = DimensionVector> {
        prop::collection::vec((0usize..7, -4i64..=4), 0..6).prop_map(|terms| {
            DimensionVector::from_pairs(
                terms
                    .into_iter()
                    .map(|(i, e)| (BaseDimension::SI[i].clone(), e)),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_multiply_commutes(a in arb_dimension(), b in arb_dimension()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn prop_divide_by_self_is_dimensionless(a in arb_dimension()) {
            prop_assert!(a.divide(&a).is_dimensionless());
        }

        #[test]
        fn prop_power_distributes(a in arb_dimension(), p in -3i64..=3, q in 1i64..=3) {
            let exponent = Exponent::new(p, q);
            let squared = a.multiply(&a);
            prop_assert_eq!(squared.power(exponent), a.power(exponent * Exponent::from_integer(2)));
        }
    }
}
