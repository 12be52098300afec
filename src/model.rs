//! Response payloads of the Airly v2 API.
//!
//! Every record tolerates missing or `null` fields (they decode to zero values)
//! and ignores fields it does not know about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` as the field's zero value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_default")]
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub street: String,
    #[serde(deserialize_with = "null_default")]
    pub number: String,
    #[serde(deserialize_with = "null_default")]
    pub display_address1: String,
    #[serde(deserialize_with = "null_default")]
    pub display_address2: String,
}

/// Who funds an installation. Often partially filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub logo: String,
    #[serde(deserialize_with = "null_default")]
    pub link: String,
    #[serde(deserialize_with = "null_default")]
    pub display_name: String,
}

/// One physical sensor station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Installation {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_default")]
    pub address: Address,
    /// Meters above sea level.
    #[serde(deserialize_with = "null_default")]
    pub elevation: f64,
    /// Set for stations that belong to the Airly network itself.
    #[serde(deserialize_with = "null_default")]
    pub airly: bool,
    #[serde(deserialize_with = "null_default")]
    pub sponsor: Sponsor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub value: f64,
}

/// Aggregated air quality score (e.g. `AIRLY_CAQI`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub value: f64,
    #[serde(deserialize_with = "null_default")]
    pub level: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub advice: String,
    #[serde(deserialize_with = "null_default")]
    pub color: String,
}

/// How far a pollutant is from the limit set by a standard body (e.g. `WHO`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standard {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub pollutant: String,
    #[serde(deserialize_with = "null_default")]
    pub limit: f64,
    #[serde(deserialize_with = "null_default")]
    pub percent: f64,
}

/// Readings aggregated over `[from_date_time, till_date_time)`.
///
/// A missing or `null` timestamp decodes to the Unix epoch
/// (`1970-01-01T00:00:00.000Z`), which is `DateTime::<Utc>::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    #[serde(with = "crate::time::millis")]
    pub from_date_time: DateTime<Utc>,
    #[serde(with = "crate::time::millis")]
    pub till_date_time: DateTime<Utc>,
    #[serde(deserialize_with = "null_default")]
    pub values: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub indexes: Vec<Index>,
    #[serde(deserialize_with = "null_default")]
    pub standards: Vec<Standard>,
}

impl Measurement {
    /// Looks up a raw value by name, e.g. `"PM25"`.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|value| value.name == name)
            .map(|value| value.value)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|index| index.name == name)
    }
}

/// Envelope returned by every measurement endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    #[serde(deserialize_with = "null_default")]
    pub current: Measurement,
    #[serde(deserialize_with = "null_default")]
    pub history: Vec<Measurement>,
    #[serde(deserialize_with = "null_default")]
    pub forecast: Vec<Measurement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexType {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub levels: Vec<Level>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    /// Value range of the level as the API renders it, e.g. `"0-25"`.
    #[serde(deserialize_with = "null_default")]
    pub values: String,
    #[serde(deserialize_with = "null_default")]
    pub level: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementType {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "null_default")]
    pub unit: String,
}
