//! Error types for unit algebra, quantity arithmetic and conversions.

use crate::dimension::DimensionVector;
use crate::Exponent;

/// Result type for fallible unit and quantity operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Error type for unit and quantity operations.
///
/// Every variant is a deterministic function of the inputs: retrying the same operation reproduces the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// Additive or comparative operation between quantities of different dimensions.
    #[error("Dimension mismatch: [{left}] vs [{right}]")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: DimensionVector,
        /// Dimension of the right operand.
        right: DimensionVector,
    },

    /// Conversion between units of different dimensions.
    #[error("Incompatible units: cannot convert '{source_unit}' [{source_dimension}] to '{target_unit}' [{target_dimension}]")]
    IncompatibleUnits {
        /// Display form of the unit converted from.
        source_unit: String,
        /// Dimension of the unit converted from.
        source_dimension: DimensionVector,
        /// Display form of the unit converted to.
        target_unit: String,
        /// Dimension of the unit converted to.
        target_dimension: DimensionVector,
    },

    /// An affine (offset) unit was used in multiply/divide/power, or scaled/chained.
    #[error("Invalid affine composition: {0}")]
    InvalidAffineComposition(String),

    /// Division by a zero-valued quantity, a zero-scale unit, or zero raised to a negative power.
    #[error("Division by zero")]
    DivisionByZero,

    /// A negative value or scale raised to a non-integer power.
    #[error("Invalid exponentiation: {base} ^ {exponent} has no real value")]
    InvalidExponentiation {
        /// The value or scale being raised.
        base: f64,
        /// The requested exponent.
        exponent: Exponent,
    },

    /// A dimension or unit exponent left the range of [`Exponent`].
    #[error("Exponent overflow: {0}")]
    ExponentOverflow(String),

    /// A scale factor that is zero, NaN or infinite.
    #[error("Invalid scale factor: {0} (must be finite and non-zero)")]
    InvalidScaleFactor(f64),

    /// An affine offset that is NaN or infinite.
    #[error("Invalid offset: {0} (must be finite)")]
    InvalidOffset(f64),

    /// A dimensionful quantity was collapsed into a plain number.
    #[error("Not dimensionless: quantity has dimension [{0}]")]
    NotDimensionless(DimensionVector),

    /// A unit name is not known to the registry.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Registry configuration could not be read, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),
}
