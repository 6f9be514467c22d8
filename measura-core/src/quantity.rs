//! Quantity type and its operations.

use crate::convert::convert;
use crate::dimension::DimensionVector;
use crate::error::{UnitError, UnitResult};
use crate::unit::{raise, Unit};
use crate::Exponent;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Mul, Neg};

/// A number tagged with a [`Unit`].
///
/// Quantities are immutable values; every operation returns a new quantity. Dimension checks happen at runtime and
/// surface as [`UnitError`]s.
///
/// # Examples
///
/// ```rust
/// use measura_core::{DimensionVector, Quantity, Unit};
///
/// let m = Unit::base("m", DimensionVector::length());
/// let s = Unit::base("s", DimensionVector::time());
///
/// let d = Quantity::new(10.0, m.clone());
/// let t = Quantity::new(2.0, s.clone());
/// let v = d.div(&t).unwrap();
/// assert_eq!(v.value(), 5.0);
/// assert_eq!(v.to_string(), "5 m s^-1");
///
/// assert!(d.add(&t).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity of `value` in `unit`.
    #[inline]
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A plain number in the dimensionless unit `1`.
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension of the quantity's unit.
    pub fn dimension(&self) -> &DimensionVector {
        self.unit.dimension()
    }

    /// Splits the quantity into value and unit.
    pub fn into_parts(self) -> (f64, Unit) {
        (self.value, self.unit)
    }

    /// Value expressed in canonical base units (offset applied).
    pub fn to_base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    fn with_value(&self, value: f64) -> Self {
        Self::new(value, self.unit.clone())
    }

    fn require_same_dimension(&self, other: &Quantity) -> UnitResult<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                left: self.dimension().clone(),
                right: other.dimension().clone(),
            })
        }
    }

    /// `other` expressed in this quantity's unit.
    fn value_of(&self, other: &Quantity) -> UnitResult<f64> {
        self.require_same_dimension(other)?;
        convert(other.value, &other.unit, &self.unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checked arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum in this quantity's unit.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Prefix, Quantity, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let km = Unit::prefixed(Prefix::Kilo, &m).unwrap();
    /// let total = Quantity::new(1.0, km).add(&Quantity::new(250.0, m)).unwrap();
    /// assert_eq!(total.value(), 1.25);
    /// assert_eq!(total.unit().symbol(), Some("km"));
    /// ```
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] when the dimensions differ.
    pub fn add(&self, other: &Quantity) -> UnitResult<Quantity> {
        let rhs = self.value_of(other)?;
        Ok(self.with_value(self.value + rhs))
    }

    /// Difference in this quantity's unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] when the dimensions differ.
    pub fn sub(&self, other: &Quantity) -> UnitResult<Quantity> {
        let rhs = self.value_of(other)?;
        Ok(self.with_value(self.value - rhs))
    }

    /// Product; the unit is the product of both units.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidAffineComposition`] if either unit is affine.
    pub fn mul(&self, other: &Quantity) -> UnitResult<Quantity> {
        let unit = self.unit.multiply(&other.unit)?;
        Ok(Quantity::new(self.value * other.value, unit))
    }

    /// Quotient; the unit is the quotient of both units.
    ///
    /// # Errors
    ///
    /// - [`UnitError::DivisionByZero`] when `other` is zero.
    /// - [`UnitError::InvalidAffineComposition`] if either unit is affine.
    pub fn div(&self, other: &Quantity) -> UnitResult<Quantity> {
        if other.value == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        let unit = self.unit.divide(&other.unit)?;
        Ok(Quantity::new(self.value / other.value, unit))
    }

    /// Raises value and unit to a rational power.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Quantity, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let area = Quantity::new(3.0, m).powi(2).unwrap();
    /// assert_eq!(area.value(), 9.0);
    /// assert_eq!(area.sqrt().unwrap().value(), 3.0);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] for an affine unit (exponent ≠ 1).
    /// - [`UnitError::InvalidExponentiation`] for a negative value (or scale) and a non-integer exponent.
    /// - [`UnitError::DivisionByZero`] for a zero value and a negative exponent.
    pub fn pow(&self, exponent: impl Into<Exponent>) -> UnitResult<Quantity> {
        let exponent = exponent.into();
        let unit = self.unit.power(exponent)?;
        let value = raise(self.value, exponent)?;
        Ok(Quantity::new(value, unit))
    }

    /// Integer power.
    pub fn powi(&self, exponent: i64) -> UnitResult<Quantity> {
        self.pow(exponent)
    }

    /// Square root.
    pub fn sqrt(&self) -> UnitResult<Quantity> {
        self.pow(Exponent::new(1, 2))
    }

    /// Orders two quantities of the same dimension.
    ///
    /// `other` is converted into this quantity's unit, then compared with [`f64::total_cmp`].
    ///
    /// # Errors
    ///
    /// [`UnitError::DimensionMismatch`] when the dimensions differ.
    pub fn compare(&self, other: &Quantity) -> UnitResult<Ordering> {
        let rhs = self.value_of(other)?;
        Ok(self.value.total_cmp(&rhs))
    }

    /// Converts to another unit of the same dimension.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Quantity, Unit};
    /// let k = Unit::base("K", DimensionVector::temperature());
    /// let c = Unit::affine("°C", &k, 1.0, 273.15).unwrap();
    /// let boiling = Quantity::new(100.0, c).convert_to(&k).unwrap();
    /// assert!((boiling.value() - 373.15).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// [`UnitError::IncompatibleUnits`] when the dimensions differ.
    pub fn convert_to(&self, target: &Unit) -> UnitResult<Quantity> {
        let value = convert(self.value, &self.unit, target)?;
        Ok(Quantity::new(value, target.clone()))
    }

    /// Divides the value by a plain number, keeping the unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::DivisionByZero`] when `rhs` is zero.
    pub fn div_scalar(&self, rhs: f64) -> UnitResult<Quantity> {
        if rhs == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(self.with_value(self.value / rhs))
    }

    /// Quotient rounded toward negative infinity; the unit is the quotient of both units.
    ///
    /// Like [`Quantity::div`], the value is floored in the composed unit, so `3 km // 500 m` is `0 km m^-1`. Convert
    /// first, or use [`Quantity::divmod`], to count whole multiples.
    ///
    /// # Errors
    ///
    /// Same as [`Quantity::div`].
    pub fn div_floor(&self, other: &Quantity) -> UnitResult<Quantity> {
        Ok(self.div(other)?.floor())
    }

    /// Floored remainder of `self / other` after converting `other` into this quantity's unit.
    ///
    /// The result takes the sign of `other`: `-1 m mod 3 m` is `2 m`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::DimensionMismatch`] when the dimensions differ.
    /// - [`UnitError::DivisionByZero`] when `other` is zero.
    pub fn rem(&self, other: &Quantity) -> UnitResult<Quantity> {
        Ok(self.divmod(other)?.1)
    }

    /// Whole multiples of `other` in `self` (floored) and the remainder, in this quantity's unit.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Prefix, Quantity, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let km = Unit::prefixed(Prefix::Kilo, &m).unwrap();
    /// let (count, rest) = Quantity::new(1.25, km).divmod(&Quantity::new(500.0, m)).unwrap();
    /// assert_eq!(count, 2.0);
    /// assert!((rest.value() - 0.25).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`UnitError::DimensionMismatch`] when the dimensions differ.
    /// - [`UnitError::DivisionByZero`] when `other` is zero.
    pub fn divmod(&self, other: &Quantity) -> UnitResult<(f64, Quantity)> {
        let rhs = self.value_of(other)?;
        if rhs == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        let (quotient, remainder) = floor_divmod(self.value, rhs);
        Ok((quotient, self.with_value(remainder)))
    }

    /// Multiplicative inverse: `2 s` → `0.5 s^-1`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::DivisionByZero`] when the value is zero.
    /// - [`UnitError::InvalidAffineComposition`] for an affine unit.
    pub fn recip(&self) -> UnitResult<Quantity> {
        Quantity::dimensionless(1.0).div(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rounding and sign
    // ─────────────────────────────────────────────────────────────────────────

    /// Absolute value, same unit.
    pub fn abs(&self) -> Quantity {
        self.with_value(self.value.abs())
    }

    /// Largest integer value not greater than this one, same unit.
    pub fn floor(&self) -> Quantity {
        self.with_value(self.value.floor())
    }

    /// Smallest integer value not less than this one, same unit.
    pub fn ceil(&self) -> Quantity {
        self.with_value(self.value.ceil())
    }

    /// Nearest integer value (half away from zero), same unit.
    pub fn round(&self) -> Quantity {
        self.with_value(self.value.round())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collapsing and naming
    // ─────────────────────────────────────────────────────────────────────────

    /// Collapses a dimensionless quantity to a plain number, applying the unit scale.
    ///
    /// ```rust
    /// use measura_core::{DimensionVector, Prefix, Quantity, Unit};
    /// let m = Unit::base("m", DimensionVector::length());
    /// let km = Unit::prefixed(Prefix::Kilo, &m).unwrap();
    /// let ratio = km.divide(&m).unwrap();
    /// assert_eq!(Quantity::new(2.0, ratio).into_scalar().unwrap(), 2_000.0);
    /// ```
    ///
    /// # Errors
    ///
    /// [`UnitError::NotDimensionless`] when the quantity has a dimension.
    pub fn into_scalar(&self) -> UnitResult<f64> {
        if !self.unit.is_dimensionless() {
            return Err(UnitError::NotDimensionless(self.dimension().clone()));
        }
        Ok(self.unit.to_base(self.value))
    }

    /// Turns this quantity into a named unit: `1055 J` → `BTU`.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidAffineComposition`] for an affine unit.
    /// - [`UnitError::InvalidScaleFactor`] when the value is zero or not finite.
    pub fn as_unit(&self, symbol: &str) -> UnitResult<Unit> {
        if self.unit.is_affine() {
            return Err(UnitError::InvalidAffineComposition(format!(
                "cannot define '{}' from a quantity in affine unit '{}'",
                symbol, self.unit
            )));
        }
        Unit::scaled(symbol, &self.unit, self.value)
    }

    /// Renders as `"{value} {unit}"`, or only the value for the unit `1`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

/// Floored division of `a` by a non-zero `b`: the remainder takes the sign of `b` and
/// `quotient × b + remainder ≈ a`.
fn floor_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 {
        if (remainder < 0.0) != (b < 0.0) {
            remainder += b;
            quotient -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(b);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        (floored + 1.0, remainder)
    } else {
        (floored, remainder)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────────────────────────────────────

// Scalar operators are implemented on `&Quantity` only; owned receivers must resolve `q.mul(..)`/`q.div(..)` to the
// checked inherent methods. Scalar division is `Quantity::div_scalar`.

impl PartialEq for Quantity {
    /// Equal dimensions and equal values in canonical base units.
    fn eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension() && self.to_base_value() == other.to_base_value()
    }
}

impl PartialOrd for Quantity {
    /// `None` across dimensions.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension() != other.dimension() {
            return None;
        }
        self.to_base_value().partial_cmp(&other.to_base_value())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        let unit = self.unit.to_string();
        if unit != "1" {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        self.with_value(self.value * rhs)
    }
}

impl Neg for &Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        self.with_value(-self.value)
    }
}

impl Mul<&Unit> for f64 {
    type Output = Quantity;
    /// `5.0 * &meter` builds a quantity.
    fn mul(self, rhs: &Unit) -> Quantity {
        Quantity::new(self, rhs.clone())
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self, rhs)
    }
}
