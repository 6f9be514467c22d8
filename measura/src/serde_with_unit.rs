//! Serde helpers for [`Quantity`] fields.
//!
//! Use with `#[serde(with = "measura::serde_with_unit")]`. A quantity serializes as a struct with `value` and
//! `unit` fields, the unit written as its display form and read back through [`crate::unit_from_name`]:
//!
//! ```rust
//! use measura::{unit_from_name, Quantity};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Reading {
//!     #[serde(with = "measura::serde_with_unit")]
//!     temperature: Quantity,
//! }
//!
//! let reading = Reading { temperature: Quantity::new(21.5, unit_from_name("°C").unwrap()) };
//! let json = serde_json::to_string(&reading).unwrap();
//! assert_eq!(json, r#"{"temperature":{"value":21.5,"unit":"°C"}}"#);
//!
//! let back: Reading = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.temperature.unit().symbol(), Some("°C"));
//! ```
//!
//! Only units of the builtin registry round-trip. Anonymous composed units serialize fine but their display form
//! (`"m s^-1"`) is not a registry name, and units added to a [`crate::UnitRegistry`] from configuration are not
//! visible to [`crate::unit_from_name`]; both fail to deserialize with an unknown-unit error. A missing `unit` field
//! reads as a dimensionless quantity.

use crate::{unit_from_name, Quantity};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::Deserialize;

/// Serializes a `Quantity` as a struct with `value` and `unit` fields.
///
/// # Example JSON Output
/// ```json
/// {"value": 42.5, "unit": "km"}
/// ```
pub fn serialize<S>(quantity: &Quantity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct("Quantity", 2)?;
    state.serialize_field("value", &quantity.value())?;
    state.serialize_field("unit", &quantity.unit().to_string())?;
    state.end()
}

/// Deserializes a `Quantity` from a struct with `value` and optionally `unit` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Quantity, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(field_identifier, rename_all = "lowercase")]
    enum Field {
        Value,
        Unit,
    }

    struct QuantityVisitor;

    impl<'de> Visitor<'de> for QuantityVisitor {
        type Value = Quantity;

        fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
            formatter.write_str("struct Quantity with value and unit fields")
        }

        fn visit_map<V>(self, mut map: V) -> Result<Quantity, V::Error>
        where
            V: MapAccess<'de>,
        {
            let mut value: Option<f64> = None;
            let mut unit: Option<String> = None;

            while let Some(key) = map.next_key()? {
                match key {
                    Field::Value => {
                        if value.is_some() {
                            return Err(de::Error::duplicate_field("value"));
                        }
                        value = Some(map.next_value()?);
                    }
                    Field::Unit => {
                        if unit.is_some() {
                            return Err(de::Error::duplicate_field("unit"));
                        }
                        unit = Some(map.next_value()?);
                    }
                }
            }

            let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
            match unit.as_deref() {
                None | Some("1") => Ok(Quantity::dimensionless(value)),
                Some(name) => {
                    let unit = unit_from_name(name).map_err(de::Error::custom)?;
                    Ok(Quantity::new(value, unit))
                }
            }
        }
    }

    deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor)
}
