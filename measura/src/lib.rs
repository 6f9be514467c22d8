//! Runtime physical quantities with dimensional analysis and unit conversion.
//!
//! `measura` is the user-facing crate in this workspace. It re-exports the full API from `measura-core` plus a
//! registry of predefined units (SI base and derived units with their metric families, temperature scales, common
//! non-SI units, US customary and astronomical units).
//!
//! The core idea is: a value is always a [`Quantity`], an `f64` tagged with a [`Unit`]. Units carry their dimension
//! and their reduction to canonical base units, so dimension checks and conversions happen at runtime.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (adding metres to seconds is an error, not a number).
//! - Makes conversion explicit and uniform, including affine temperature scales.
//! - Composes units freely (`kg m^2 s^-2`) with exact rational dimension exponents.
//! - Looks units up by symbol or name, and extends the catalog from TOML configuration.
//!
//! # What this crate does not try to solve
//!
//! - Parsing quantity expressions such as `"5 km/h"`; units are looked up by single names.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Compile-time unit checking: every check is a runtime [`UnitError`].
//!
//! # Quick start
//!
//! Convert between named units:
//!
//! ```rust
//! use measura::{convert, unit_from_name};
//!
//! let km = unit_from_name("km").unwrap();
//! let m = unit_from_name("m").unwrap();
//! assert_eq!(convert(1.0, &km, &m).unwrap(), 1_000.0);
//!
//! let c = unit_from_name("°C").unwrap();
//! let k = unit_from_name("K").unwrap();
//! assert!((convert(100.0, &c, &k).unwrap() - 373.15).abs() < 1e-12);
//! ```
//!
//! Compose quantities (velocity = length / time):
//!
//! ```rust
//! use measura::{dimension, unit_from_name, Quantity};
//!
//! let d = Quantity::new(10.0, unit_from_name("m").unwrap());
//! let t = Quantity::new(2.0, unit_from_name("s").unwrap());
//! let v = d.div(&t).unwrap();
//! assert_eq!(v.value(), 5.0);
//! assert_eq!(v.dimension(), &dimension::common::velocity());
//! ```
//!
//! Dimension errors are values, not panics:
//!
//! ```rust
//! use measura::{unit_from_name, Quantity, UnitError};
//!
//! let m = Quantity::new(1.0, unit_from_name("m").unwrap());
//! let s = Quantity::new(1.0, unit_from_name("s").unwrap());
//! assert!(matches!(m.add(&s), Err(UnitError::DimensionMismatch { .. })));
//! ```
//!
//! # Modules
//!
//! - [`registry`]: the [`UnitRegistry`] name → unit table.
//! - [`units`]: the builtin catalog, grouped by origin.
//! - [`config`]: TOML registry configuration.
//! - [`serde_with_unit`] (feature `serde`): `{"value", "unit"}` serialization for quantity fields.
//!
//! # Feature flags
//!
//! - `serde` (default): enables `serde` support for `DimensionVector` and the [`serde_with_unit`] helpers.
//!
//! # Panics and errors
//!
//! Fallible operations return [`UnitResult`]. The builtin registry is built once, on first use; should it fail to
//! build, every lookup reports the same error instead of panicking.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use once_cell::sync::Lazy;

pub use measura_core::*;

pub mod config;
pub mod registry;
#[cfg(feature = "serde")]
pub mod serde_with_unit;
pub mod units;

pub use config::{BaseUnitSettings, RegistryConfig, UnitSettings};
pub use registry::UnitRegistry;

static BUILTIN: Lazy<UnitResult<UnitRegistry>> = Lazy::new(UnitRegistry::builtin);

/// The process-wide builtin registry, built on first use and read-only afterwards.
///
/// # Errors
///
/// Returns the error that prevented the catalog from being built (never expected in practice).
pub fn builtin_registry() -> UnitResult<&'static UnitRegistry> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

/// Looks a unit up by symbol, name or alias in the builtin registry.
///
/// ```rust
/// use measura::{unit_from_name, UnitError};
/// assert_eq!(unit_from_name("kilometer").unwrap().symbol(), Some("km"));
/// assert_eq!(unit_from_name("furlong").unwrap_err(), UnitError::UnknownUnit("furlong".into()));
/// ```
///
/// # Errors
///
/// [`UnitError::UnknownUnit`] when the name is not registered.
pub fn unit_from_name(name: &str) -> UnitResult<Unit> {
    builtin_registry()?.lookup(name)
}
