//! Runtime units: construction, composition and reduction to base units.
//!
//! A [`Unit`] is an immutable, cheaply clonable handle. Its reduction to canonical base units
//! (`value_in_base = scale × value + offset`) is computed once, at construction. The composition record
//! ([`UnitKind`]) is kept only for display and introspection.
//!
//! ```rust
//! use measura_core::{DimensionVector, Prefix, Unit};
//!
//! let meter = Unit::base("m", DimensionVector::length());
//! let second = Unit::base("s", DimensionVector::time());
//! let km = Unit::prefixed(Prefix::Kilo, &meter).unwrap();
//!
//! let speed = km.divide(&second).unwrap();
//! assert_eq!(speed.to_string(), "km s^-1");
//! assert_eq!(speed.scale(), 1_000.0);
//! ```

use crate::dimension::DimensionVector;
use crate::error::{UnitError, UnitResult};
use crate::prefix::Prefix;
use crate::Exponent;
use core::fmt;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use std::sync::Arc;

/// How a unit was built. Used for display and introspection only; the reduction never walks it.
#[derive(Clone, Debug)]
pub enum UnitKind {
    /// A primitive unit: scale 1, offset 0.
    Base,
    /// `1 unit = factor × base`.
    Scaled {
        /// Unit being scaled.
        base: Unit,
        /// Multiplier relative to `base`.
        factor: f64,
    },
    /// A metric prefix applied to `base`.
    Prefixed {
        /// The applied prefix.
        prefix: Prefix,
        /// Unit being prefixed.
        base: Unit,
    },
    /// `value_in_base = factor × value + offset` (temperature scales).
    Affine {
        /// Underlying linear unit.
        base: Unit,
        /// Multiplier relative to `base`.
        factor: f64,
        /// Offset in units of `base`.
        offset: f64,
    },
    /// Product of powers of other units.
    Derived {
        /// `(unit, exponent)` factors; exponents are never zero.
        terms: Vec<(Unit, Exponent)>,
    },
}

struct UnitData {
    symbol: Option<Arc<str>>,
    dimension: DimensionVector,
    scale: f64,
    offset: f64,
    kind: UnitKind,
}

/// A unit of measure, defined at runtime.
///
/// Cloning is a reference-count bump. Equality is *physical*: two units are equal when they share dimension, scale
/// and offset, regardless of symbol or how they were composed.
///
/// ```rust
/// use measura_core::{DimensionVector, Unit};
///
/// let kg = Unit::base("kg", DimensionVector::mass());
/// let m = Unit::base("m", DimensionVector::length());
/// let s = Unit::base("s", DimensionVector::time());
///
/// let newton = kg.multiply(&m).unwrap().divide(&s.powi(2).unwrap()).unwrap().with_symbol("N");
/// let joule = newton.multiply(&m).unwrap().with_symbol("J");
/// let newton_meter = newton.multiply(&m).unwrap();
///
/// assert_eq!(joule, newton_meter);
/// assert_eq!(joule.to_string(), "J");
/// assert_eq!(newton_meter.to_string(), "N m");
/// ```
#[derive(Clone)]
pub struct Unit(Arc<UnitData>);

impl Unit {
    fn from_data(data: UnitData) -> Self {
        Unit(Arc::new(data))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// A primitive unit of `dimension` (scale 1, offset 0).
    pub fn base(symbol: impl Into<Arc<str>>, dimension: DimensionVector) -> Self {
        Self::from_data(UnitData {
            symbol: Some(symbol.into()),
            dimension,
            scale: 1.0,
            offset: 0.0,
            kind: UnitKind::Base,
        })
    }

    /// The anonymous dimensionless unit `1`.
    pub fn dimensionless() -> Self {
        Self::from_data(UnitData {
            symbol: None,
            dimension: DimensionVector::dimensionless(),
            scale: 1.0,
            offset: 0.0,
            kind: UnitKind::Derived { terms: Vec::new() },
        })
    }

    /// A unit equal to `factor` of `base`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] if `base` carries an offset.
    /// - [`UnitError::InvalidScaleFactor`] if `factor` is zero, NaN or infinite.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let ft = Unit::scaled("ft", &m, 0.3048).unwrap();
    /// assert_eq!(ft.to_base(10.0), 3.048);
    /// assert!(Unit::scaled("bad", &m, 0.0).is_err());
    /// ```
    pub fn scaled(symbol: impl Into<Arc<str>>, base: &Unit, factor: f64) -> UnitResult<Self> {
        let symbol = symbol.into();
        base.require_linear(|| format!("cannot scale affine unit '{}' into '{}'", base, symbol))?;
        check_factor(factor)?;
        Ok(Self::from_data(UnitData {
            symbol: Some(symbol),
            dimension: base.dimension().clone(),
            scale: base.scale() * factor,
            offset: 0.0,
            kind: UnitKind::Scaled {
                base: base.clone(),
                factor,
            },
        }))
    }

    /// Applies a metric prefix to `base`. The symbol is the prefix symbol followed by the base symbol.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidAffineComposition`] if `base` carries an offset.
    pub fn prefixed(prefix: Prefix, base: &Unit) -> UnitResult<Self> {
        base.require_linear(|| format!("cannot apply prefix '{}' to affine unit '{}'", prefix, base))?;
        Ok(Self::from_data(UnitData {
            symbol: Some(format!("{}{}", prefix.symbol(), base).into()),
            dimension: base.dimension().clone(),
            scale: base.scale() * prefix.factor(),
            offset: 0.0,
            kind: UnitKind::Prefixed {
                prefix,
                base: base.clone(),
            },
        }))
    }

    /// An affine unit: `value_in(base) = factor × value + offset`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] if `base` is itself affine.
    /// - [`UnitError::InvalidScaleFactor`] for a zero or non-finite `factor`.
    /// - [`UnitError::InvalidOffset`] for a non-finite `offset`.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Unit};
    /// let k = Unit::base("K", DimensionVector::temperature());
    /// let f = Unit::affine("°F", &k, 5.0 / 9.0, 45967.0 / 180.0).unwrap();
    /// assert!((f.to_base(32.0) - 273.15).abs() < 1e-12);
    /// assert!(Unit::affine("x", &f, 1.0, 1.0).is_err());
    /// ```
    pub fn affine(
        symbol: impl Into<Arc<str>>,
        base: &Unit,
        factor: f64,
        offset: f64,
    ) -> UnitResult<Self> {
        let symbol = symbol.into();
        base.require_linear(|| format!("cannot chain affine unit '{}' onto affine unit '{}'", symbol, base))?;
        check_factor(factor)?;
        if !offset.is_finite() {
            return Err(UnitError::InvalidOffset(offset));
        }
        Ok(Self::from_data(UnitData {
            symbol: Some(symbol),
            dimension: base.dimension().clone(),
            scale: base.scale() * factor,
            offset: base.scale() * offset,
            kind: UnitKind::Affine {
                base: base.clone(),
                factor,
                offset,
            },
        }))
    }

    /// All 24 prefixed variants of `base`, largest prefix first.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Unit};
    /// let g = Unit::base("g", DimensionVector::mass());
    /// let family = Unit::metric_family(&g).unwrap();
    /// assert_eq!(family.len(), 24);
    /// assert!(family.iter().any(|u| u.symbol() == Some("µg")));
    /// ```
    pub fn metric_family(base: &Unit) -> UnitResult<Vec<Unit>> {
        Prefix::ALL
            .into_iter()
            .map(|prefix| Unit::prefixed(prefix, base))
            .collect()
    }

    /// Same reduction under a new display symbol (`kg m^2 s^-2` → `J`).
    ///
    /// The composition record is kept, but the renamed unit behaves as an atom when composed further.
    pub fn with_symbol(&self, symbol: impl Into<Arc<str>>) -> Self {
        Self::from_data(UnitData {
            symbol: Some(symbol.into()),
            dimension: self.0.dimension.clone(),
            scale: self.0.scale,
            offset: self.0.offset,
            kind: self.0.kind.clone(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Composition
    // ─────────────────────────────────────────────────────────────────────────

    /// Product of two units.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] if either operand carries an offset.
    /// - [`UnitError::InvalidScaleFactor`] if the product scale overflows to infinity or underflows to zero.
    /// - [`UnitError::ExponentOverflow`] if a dimension exponent overflows.
    pub fn multiply(&self, other: &Unit) -> UnitResult<Unit> {
        self.require_linear(|| format!("cannot multiply affine unit '{}'", self))?;
        other.require_linear(|| format!("cannot multiply by affine unit '{}'", other))?;

        let dimension = self
            .dimension()
            .checked_multiply(other.dimension())
            .ok_or_else(|| exponent_overflow(format!("({}) * ({})", self, other)))?;
        let mut terms = self.terms();
        terms.extend(other.terms());
        let unit = compose(terms, dimension, self.scale() * other.scale())?;
        log::trace!("composed {} = ({}) * ({})", unit, self, other);
        Ok(unit)
    }

    /// Quotient of two units.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] if either operand carries an offset.
    /// - [`UnitError::DivisionByZero`] if `other` has a zero scale.
    /// - [`UnitError::InvalidScaleFactor`] if the quotient scale overflows to infinity or underflows to zero.
    /// - [`UnitError::ExponentOverflow`] if a dimension exponent overflows.
    pub fn divide(&self, other: &Unit) -> UnitResult<Unit> {
        self.require_linear(|| format!("cannot divide affine unit '{}'", self))?;
        other.require_linear(|| format!("cannot divide by affine unit '{}'", other))?;
        if other.scale() == 0.0 {
            return Err(UnitError::DivisionByZero);
        }

        let overflowed = || exponent_overflow(format!("({}) / ({})", self, other));
        let dimension = self
            .dimension()
            .checked_divide(other.dimension())
            .ok_or_else(overflowed)?;
        let mut terms = self.terms();
        for (unit, exponent) in other.terms() {
            let negated = Exponent::zero().checked_sub(&exponent).ok_or_else(overflowed)?;
            terms.push((unit, negated));
        }
        let unit = compose(terms, dimension, self.scale() / other.scale())?;
        log::trace!("composed {} = ({}) / ({})", unit, self, other);
        Ok(unit)
    }

    /// Multiplicative inverse (`Hz` from `s`).
    ///
    /// # Errors
    ///
    /// Same as [`Unit::divide`] with a dimensionless numerator.
    pub fn invert(&self) -> UnitResult<Unit> {
        Unit::dimensionless().divide(self)
    }

    /// Raises the unit to a rational power.
    ///
    /// Exponent 1 returns the unit unchanged (affine units included); exponent 0 yields the dimensionless unit.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] for an affine unit and any exponent other than 1.
    /// - [`UnitError::InvalidExponentiation`] for a negative scale and a non-integer exponent.
    /// - [`UnitError::InvalidScaleFactor`] if the raised scale overflows to infinity or underflows to zero.
    /// - [`UnitError::ExponentOverflow`] if a dimension or term exponent overflows.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Exponent, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let area = m.powi(2).unwrap();
    /// assert_eq!(area.to_string(), "m^2");
    /// assert_eq!(area.power(Exponent::new(1, 2)).unwrap().to_string(), "m");
    /// ```
    pub fn power(&self, exponent: impl Into<Exponent>) -> UnitResult<Unit> {
        let exponent = exponent.into();
        if exponent.is_one() {
            return Ok(self.clone());
        }
        self.require_linear(|| format!("cannot raise affine unit '{}' to {}", self, exponent))?;
        if exponent.is_zero() {
            return Ok(Unit::dimensionless());
        }

        let overflowed = || exponent_overflow(format!("({})^{}", self, exponent));
        let dimension = self
            .dimension()
            .checked_power(exponent)
            .ok_or_else(overflowed)?;
        let terms = self
            .terms()
            .into_iter()
            .map(|(unit, e)| Some((unit, e.checked_mul(&exponent)?)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(overflowed)?;
        let scale = raise(self.scale(), exponent)?;
        let unit = compose(terms, dimension, scale)?;
        log::trace!("composed {} = ({})^{}", unit, self, exponent);
        Ok(unit)
    }

    /// Integer power.
    pub fn powi(&self, exponent: i64) -> UnitResult<Unit> {
        self.power(exponent)
    }

    /// Square root.
    pub fn sqrt(&self) -> UnitResult<Unit> {
        self.power(Exponent::new(1, 2))
    }

    /// Cube root.
    pub fn cbrt(&self) -> UnitResult<Unit> {
        self.power(Exponent::new(1, 3))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Introspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Display symbol; `None` for anonymous derived units.
    pub fn symbol(&self) -> Option<&str> {
        self.0.symbol.as_deref()
    }

    /// Dimension of the unit.
    pub fn dimension(&self) -> &DimensionVector {
        &self.0.dimension
    }

    /// Multiplier to canonical base units.
    pub fn scale(&self) -> f64 {
        self.0.scale
    }

    /// Offset (in canonical base units) added after scaling.
    pub fn offset(&self) -> f64 {
        self.0.offset
    }

    /// How this unit was built.
    pub fn kind(&self) -> &UnitKind {
        &self.0.kind
    }

    /// `true` when the unit carries a non-zero offset.
    pub fn is_affine(&self) -> bool {
        self.0.offset != 0.0
    }

    /// `true` when the unit's dimension vector is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.0.dimension.is_dimensionless()
    }

    /// `true` for primitive units.
    pub fn is_base(&self) -> bool {
        matches!(self.0.kind, UnitKind::Base)
    }

    /// Factors of this unit as `(unit, exponent)` pairs.
    ///
    /// Anonymous derived units expose their terms; any other unit is a single term with exponent 1.
    pub fn terms(&self) -> Vec<(Unit, Exponent)> {
        match (&self.0.symbol, &self.0.kind) {
            (None, UnitKind::Derived { terms }) => terms.clone(),
            _ => vec![(self.clone(), Exponent::one())],
        }
    }

    /// Value in canonical base units.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        self.0.scale * value + self.0.offset
    }

    /// Value in this unit from canonical base units.
    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        (value - self.0.offset) / self.0.scale
    }

    fn require_linear(&self, message: impl FnOnce() -> String) -> UnitResult<()> {
        if self.is_affine() {
            Err(UnitError::InvalidAffineComposition(message()))
        } else {
            Ok(())
        }
    }
}

fn check_factor(factor: f64) -> UnitResult<()> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(UnitError::InvalidScaleFactor(factor));
    }
    Ok(())
}

fn exponent_overflow(expression: String) -> UnitError {
    UnitError::ExponentOverflow(expression)
}

/// Merges like terms and builds the resulting unit.
///
/// A product that reduces to a single atom to the first power is that atom. The composed scale must stay finite
/// and non-zero.
fn compose(terms: Vec<(Unit, Exponent)>, dimension: DimensionVector, scale: f64) -> UnitResult<Unit> {
    check_factor(scale)?;
    let mut merged: Vec<(Unit, Exponent)> = Vec::with_capacity(terms.len());
    for (unit, exponent) in terms {
        match merged
            .iter_mut()
            .find(|(seen, _)| seen.symbol() == unit.symbol() && *seen == unit)
        {
            Some((seen, total)) => {
                *total = total
                    .checked_add(&exponent)
                    .ok_or_else(|| exponent_overflow(format!("{}^({} + {})", seen, total, exponent)))?;
            }
            None => merged.push((unit, exponent)),
        }
    }
    merged.retain(|(_, exponent)| !exponent.is_zero());

    if merged.len() == 1 && merged[0].1.is_one() {
        return Ok(merged[0].0.clone());
    }
    Ok(Unit::from_data(UnitData {
        symbol: None,
        dimension,
        scale,
        offset: 0.0,
        kind: UnitKind::Derived { terms: merged },
    }))
}

/// Raises `base` to a rational `exponent` over the reals.
///
/// Square and cube roots use `sqrt`/`cbrt` so that perfect powers stay exact.
pub(crate) fn raise(base: f64, exponent: Exponent) -> UnitResult<f64> {
    if base == 0.0 && exponent < Exponent::zero() {
        return Err(UnitError::DivisionByZero);
    }
    let numer = *exponent.numer();
    if exponent.is_integer() {
        return Ok(powi_i64(base, numer));
    }
    if base < 0.0 {
        return Err(UnitError::InvalidExponentiation { base, exponent });
    }
    let root = match *exponent.denom() {
        2 => base.sqrt(),
        3 => base.cbrt(),
        denom => base.powf(1.0 / denom as f64),
    };
    Ok(powi_i64(root, numer))
}

fn powi_i64(base: f64, exponent: i64) -> f64 {
    match i32::try_from(exponent) {
        Ok(n) => base.powi(n),
        Err(_) => base.powf(exponent as f64),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free constructors
// ─────────────────────────────────────────────────────────────────────────────

/// Shorthand for [`Unit::base`].
pub fn base_unit(symbol: impl Into<Arc<str>>, dimension: DimensionVector) -> Unit {
    Unit::base(symbol, dimension)
}

/// Shorthand for [`Unit::scaled`].
pub fn scaled_unit(symbol: impl Into<Arc<str>>, base: &Unit, factor: f64) -> UnitResult<Unit> {
    Unit::scaled(symbol, base, factor)
}

/// Shorthand for [`Unit::prefixed`].
pub fn prefixed_unit(prefix: Prefix, base: &Unit) -> UnitResult<Unit> {
    Unit::prefixed(prefix, base)
}

/// Shorthand for [`Unit::affine`].
pub fn affine_unit(
    symbol: impl Into<Arc<str>>,
    base: &Unit,
    factor: f64,
    offset: f64,
) -> UnitResult<Unit> {
    Unit::affine(symbol, base, factor, offset)
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.dimension == other.0.dimension
                && self.0.scale == other.0.scale
                && self.0.offset == other.0.offset)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return f.write_str(symbol);
        }
        let terms = self.terms();
        if terms.is_empty() {
            return f.write_str("1");
        }
        for (i, (unit, exponent)) in terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if exponent.is_one() {
                write!(f, "{}", unit)?;
            } else {
                write!(f, "{}^{}", unit, exponent)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("display", &self.to_string())
            .field("dimension", &self.0.dimension.to_string())
            .field("scale", &self.0.scale)
            .field("offset", &self.0.offset)
            .finish()
    }
}
