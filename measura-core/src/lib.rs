//! Core dimension and unit algebra for runtime physical quantities.
//!
//! `measura-core` provides a small, dynamic units model:
//!
//! - A *dimension* is a [`DimensionVector`]: exact rational exponents over the SI base dimensions (plus custom ones).
//! - A *unit* is a [`Unit`] value carrying its dimension and its reduction to canonical base units
//!   (`value_in_base = scale × value + offset`).
//! - A value tagged with a unit is a [`Quantity`], backed by an `f64`.
//! - Conversion goes through the canonical base representation via [`convert()`].
//!
//! Most users should depend on `measura` (the facade crate), which adds a registry of predefined units.
//!
//! # What this crate solves
//!
//! - Runtime separation of dimensions (length vs time vs temperature, …), checked on every additive operation.
//! - Composition of units by multiplication, division and rational exponentiation, with exact dimension tracking.
//! - Metric prefixes and affine units (temperature scales) with a single conversion algorithm.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic on values (`Quantity` is `f64`).
//! - Parsing of quantity expressions such as `"5 km/h"`.
//! - Non-affine scales (decibels, pH, …).
//!
//! # Quick start
//!
//! ```rust
//! use measura_core::{DimensionVector, Quantity, Unit};
//!
//! let meter = Unit::base("m", DimensionVector::length());
//! let second = Unit::base("s", DimensionVector::time());
//! let kilometer = Unit::scaled("km", &meter, 1_000.0).unwrap();
//!
//! let d = Quantity::new(1.5, kilometer);
//! let t = Quantity::new(300.0, second);
//! let v = d.div(&t).unwrap();
//!
//! let mps = meter.divide(&Unit::base("s", DimensionVector::time())).unwrap();
//! assert!((v.convert_to(&mps).unwrap().value() - 5.0).abs() < 1e-12);
//! ```
//!
//! Affine units convert through their offset:
//!
//! ```rust
//! use measura_core::{convert, DimensionVector, Unit};
//!
//! let kelvin = Unit::base("K", DimensionVector::temperature());
//! let celsius = Unit::affine("°C", &kelvin, 1.0, 273.15).unwrap();
//! assert!((convert(100.0, &celsius, &kelvin).unwrap() - 373.15).abs() < 1e-12);
//! assert!(celsius.multiply(&celsius).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`DimensionVector`] (a map of dimension symbols to exponent strings).
//!
//! # Panics and errors
//!
//! Fallible operations return [`UnitResult`]. Unit and quantity operations do not panic on user input; every failure
//! is a [`UnitError`] surfaced at the point of the operation, exponent overflow included
//! ([`UnitError::ExponentOverflow`]). The infallible [`DimensionVector`] operators panic on exponent overflow; use
//! their `checked_*` variants when exponents are not under your control.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod convert;
pub mod dimension;
mod error;
mod prefix;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use convert::{are_compatible, convert, dimension_of, Conversion};
pub use dimension::{BaseDimension, DimensionVector};
pub use error::{UnitError, UnitResult};
pub use prefix::Prefix;
pub use quantity::Quantity;
pub use unit::{affine_unit, base_unit, prefixed_unit, scaled_unit, Unit, UnitKind};

/// Exact rational exponent used for dimensions and unit powers.
///
/// Integer exponents are the common case; roots such as `1/2` are kept exact so that dimension vectors built
/// along different derivation paths still compare equal.
pub type Exponent = num_rational::Ratio<i64>;
