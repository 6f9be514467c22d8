//! Conversion between units of the same dimension.
//!
//! Every conversion goes through the canonical base representation:
//!
//! ```text
//! base   = from.scale × value + from.offset
//! result = (base − to.offset) / to.scale
//! ```
//!
//! The same algorithm serves linear and affine units; no pairwise conversion table exists.

use crate::dimension::DimensionVector;
use crate::error::{UnitError, UnitResult};
use crate::unit::Unit;

/// `true` when both units share a dimension, i.e. a conversion between them exists.
pub fn are_compatible(a: &Unit, b: &Unit) -> bool {
    a.dimension() == b.dimension()
}

/// Dimension of `unit`.
pub fn dimension_of(unit: &Unit) -> &DimensionVector {
    unit.dimension()
}

fn require_compatible(from: &Unit, to: &Unit) -> UnitResult<()> {
    if are_compatible(from, to) {
        return Ok(());
    }
    Err(UnitError::IncompatibleUnits {
        source_unit: from.to_string(),
        source_dimension: from.dimension().clone(),
        target_unit: to.to_string(),
        target_dimension: to.dimension().clone(),
    })
}

/// Converts `value` from one unit to another.
///
/// ```rust
/// use measura_core::{convert, DimensionVector, Prefix, Unit};
/// let m = Unit::base("m", DimensionVector::length());
/// let km = Unit::prefixed(Prefix::Kilo, &m).unwrap();
/// assert_eq!(convert(1.0, &km, &m).unwrap(), 1_000.0);
/// ```
///
/// # Errors
///
/// [`UnitError::IncompatibleUnits`] when the dimensions differ.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> UnitResult<f64> {
    require_compatible(from, to)?;
    let result = to.from_base(from.to_base(value));
    log::trace!("convert {} {} -> {} {}", value, from, result, to);
    Ok(result)
}

/// The affine map `to = factor × from + offset` between two compatible units.
///
/// Useful when many values are converted between the same pair of units.
///
/// ```rust
/// use measura_core::{Conversion, DimensionVector, Unit};
/// let k = Unit::base("K", DimensionVector::temperature());
/// let c = Unit::affine("°C", &k, 1.0, 273.15).unwrap();
/// let f = Unit::affine("°F", &k, 5.0 / 9.0, 45967.0 / 180.0).unwrap();
///
/// let c_to_f = Conversion::between(&c, &f).unwrap();
/// assert!((c_to_f.apply(100.0) - 212.0).abs() < 1e-9);
/// assert!((c_to_f.inverse().apply(32.0)).abs() < 1e-9);
/// assert!(!c_to_f.is_linear());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    factor: f64,
    offset: f64,
}

impl Conversion {
    /// The identity map.
    pub const IDENTITY: Conversion = Conversion {
        factor: 1.0,
        offset: 0.0,
    };

    /// Conversion parameters from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`UnitError::IncompatibleUnits`] when the dimensions differ.
    pub fn between(from: &Unit, to: &Unit) -> UnitResult<Conversion> {
        require_compatible(from, to)?;
        Ok(Conversion {
            factor: from.scale() / to.scale(),
            offset: (from.offset() - to.offset()) / to.scale(),
        })
    }

    /// Multiplier applied to the source value.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Offset added after scaling.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Applies the map to `value`.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.factor * value + self.offset
    }

    /// The reverse map (`to` back to `from`).
    pub fn inverse(&self) -> Conversion {
        Conversion {
            factor: 1.0 / self.factor,
            offset: -self.offset / self.factor,
        }
    }

    /// `true` when the map has no offset.
    pub fn is_linear(&self) -> bool {
        self.offset == 0.0
    }
}
