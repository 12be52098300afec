//! Timestamps as the Airly API writes them: RFC3339, millisecond precision, `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `#[serde(with = "crate::time::millis")]` for `DateTime<Utc>` fields.
pub(crate) mod millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    /// `null` decodes to `DateTime::<Utc>::default()`, the Unix epoch.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(DateTime::<Utc>::default());
        };
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid RFC3339 timestamp: {raw:?}")))
    }
}
