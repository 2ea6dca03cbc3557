//! Lenient decoders for backend payloads.
//!
//! Decimal columns arrive as JSON numbers or as numeric strings (`"12.50"`),
//! boolean columns as `true`, `1` or `"1"`, timestamps as RFC 3339 or as
//! `YYYY-MM-DD HH:MM:SS` without a zone. Use these with
//! `#[serde(deserialize_with = "...")]` on wire DTOs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagLike {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn number_from(raw: NumberLike) -> Result<f64, String> {
    match raw {
        NumberLike::Number(n) => Ok(n),
        NumberLike::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberLike::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("expected a decimal, got {s:?}")),
    }
}

fn flag_from(raw: FlagLike) -> Result<bool, String> {
    match raw {
        FlagLike::Bool(b) => Ok(b),
        FlagLike::Number(n) => Ok(n != 0),
        FlagLike::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "active" | "enabled" => Ok(true),
            "0" | "false" | "no" | "inactive" | "disabled" | "" => Ok(false),
            other => Err(format!("expected a boolean, got {other:?}")),
        },
    }
}

/// Number or numeric string → `f64`. `null` is rejected.
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    number_from(NumberLike::deserialize(deserializer)?).map_err(D::Error::custom)
}

/// Like [`decimal`], but `null` becomes `None`.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberLike>::deserialize(deserializer)? {
        Some(raw) => number_from(raw).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Number or numeric string → `f64`, with `null` read as zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_decimal(deserializer)?.unwrap_or(0.0))
}

/// `true` / `1` / `"1"` / `"true"` / `"active"` → `bool`, `null` → `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagLike>::deserialize(deserializer)? {
        Some(raw) => flag_from(raw).map_err(D::Error::custom),
        None => Ok(false),
    }
}

/// Like [`flag`], but `null` becomes `None`.
pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagLike>::deserialize(deserializer)? {
        Some(raw) => flag_from(raw).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Timestamp in any of the backend's formats; `null` or `""` → `None`.
///
/// Zone-less values are read as UTC.
pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp {raw:?}"))),
    }
}

/// Calendar date (`2024-03-01`), also accepting a full timestamp and keeping
/// its date part; `null` or `""` → `None`.
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .or_else(|| parse_timestamp(&raw).map(|ts| ts.date_naive()))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unrecognized date {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "decimal")]
        price: f64,
        #[serde(default, deserialize_with = "opt_decimal")]
        cost: Option<f64>,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
    }

    #[test]
    fn reads_numeric_strings() {
        let row: Row = serde_json::from_str(r#"{"price":"12.50","cost":null,"active":"1"}"#).unwrap();
        assert_eq!(row.price, 12.5);
        assert_eq!(row.cost, None);
        assert!(row.active);
    }

    #[test]
    fn reads_plain_numbers_and_missing_fields() {
        let row: Row = serde_json::from_str(r#"{"price":3,"cost":1.25}"#).unwrap();
        assert_eq!(row.price, 3.0);
        assert_eq!(row.cost, Some(1.25));
        assert!(!row.active);
    }

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "opt_timestamp")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "opt_date")]
        on: Option<NaiveDate>,
    }

    #[test]
    fn reads_backend_timestamps() {
        let a: Stamped = serde_json::from_str(r#"{"at":"2024-03-01T10:30:00Z","on":"2024-03-01"}"#).unwrap();
        let b: Stamped = serde_json::from_str(r#"{"at":"2024-03-01 10:30:00","on":"2024-03-01T23:00:00Z"}"#).unwrap();
        assert_eq!(a.at, b.at);
        assert_eq!(a.on, b.on);

        let empty: Stamped = serde_json::from_str(r#"{"at":"","on":null}"#).unwrap();
        assert!(empty.at.is_none() && empty.on.is_none());

        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Toggle {
        #[serde(default, deserialize_with = "opt_flag")]
        on: Option<bool>,
    }

    #[test]
    fn optional_flag_keeps_absence() {
        let missing: Toggle = serde_json::from_str("{}").unwrap();
        let off: Toggle = serde_json::from_str(r#"{"on":"inactive"}"#).unwrap();
        assert_eq!(missing.on, None);
        assert_eq!(off.on, Some(false));
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"price":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"price":1,"active":"maybe"}"#).is_err());
    }
}
