//! Builtin unit catalog, grouped by origin.
//!
//! Each module registers its units into a [`UnitRegistry`]; later modules build on units registered by earlier
//! ones, so registration order matters.
//!
//! ## Modules
//!
//! - [`si_base`]: the seven SI base units, the gram ladder and their metric families.
//! - [`si_derived`]: the named SI derived units (N, J, W, Pa, …) and their metric families.
//! - [`temperature`]: affine temperature scales (°C, °F) and the Rankine scale.
//! - [`common`]: accepted non-SI units (minute, hour, litre, bar, electronvolt, …).
//! - [`customary`]: US customary / imperial length, mass, volume, force and pressure units.
//! - [`astronomical`]: astronomical unit, light-year and parsec.

pub mod astronomical;
pub mod common;
pub mod customary;
pub mod si_base;
pub mod si_derived;
pub mod temperature;

use crate::registry::UnitRegistry;
use measura_core::{Unit, UnitResult};

/// Registers the whole builtin catalog.
pub(crate) fn register_builtin(registry: &mut UnitRegistry) -> UnitResult<()> {
    si_base::register(registry)?;
    si_derived::register(registry)?;
    temperature::register(registry)?;
    common::register(registry)?;
    customary::register(registry)?;
    astronomical::register(registry)?;
    Ok(())
}

/// Registers `unit` under its symbol, `name` and `aliases`.
fn add(registry: &mut UnitRegistry, unit: &Unit, name: &str, aliases: &[&str]) -> UnitResult<()> {
    registry.define_named(unit, name)?;
    for alias in aliases {
        registry.alias(alias, unit);
    }
    Ok(())
}

/// Like [`add`], plus the unit's metric family named after `name`.
fn add_family(
    registry: &mut UnitRegistry,
    unit: &Unit,
    name: &str,
    aliases: &[&str],
) -> UnitResult<()> {
    add(registry, unit, name, aliases)?;
    registry.define_metric_family(unit, Some(name))?;
    Ok(())
}
