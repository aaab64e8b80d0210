//! Lenient deserializers for loosely typed backend fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

/// Reads a `u32` from a JSON number, a numeric string, an empty string or null.
///
/// Empty strings and null become `0`, matching how the request form coerces blank numeric
/// inputs before submission.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;

    let number = match value {
        None => 0,
        Some(NumberOrString::Unsigned(n)) => n,
        Some(NumberOrString::Signed(n)) => u64::try_from(n).map_err(serde::de::Error::custom)?,
        Some(NumberOrString::Float(n)) if n >= 0.0 => n.trunc() as u64,
        Some(NumberOrString::Float(n)) => {
            return Err(serde::de::Error::custom(format!("negative number {}", n)))
        }
        Some(NumberOrString::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0
            } else {
                text.parse::<u64>().map_err(serde::de::Error::custom)?
            }
        }
    };

    u32::try_from(number).map_err(serde::de::Error::custom)
}

/// Like [`lenient_u32`] but keeps "absent" distinct from zero.
pub fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;

    match value {
        None => Ok(None),
        Some(NumberOrString::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrString::Unsigned(n)) => u32::try_from(n).map(Some).map_err(serde::de::Error::custom),
        Some(NumberOrString::Signed(n)) => u32::try_from(n).map(Some).map_err(serde::de::Error::custom),
        Some(NumberOrString::Float(n)) if n >= 0.0 => Ok(Some(n.trunc() as u32)),
        Some(NumberOrString::Float(n)) => Err(serde::de::Error::custom(format!("negative number {}", n))),
        Some(NumberOrString::Text(text)) => text
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Reads an optional string, treating null as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a boolean flag that some backends send as `0`/`1` or `"true"`/`"false"`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(n)) => n != 0,
        Some(Flag::Text(text)) => matches!(text.trim(), "true" | "1"),
    })
}

/// Parses a timestamp in any of the shapes the backend has been seen to emit.
///
/// Accepts RFC 3339, naive `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and bare
/// dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Reads an optional timestamp; unparseable values become `None` rather than failing the record.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_timestamp))
}
