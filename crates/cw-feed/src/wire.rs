//! Wire schema of `GET /asteroids/feed/`.
//!
//! The backend forwards the upstream feed's string-typed distances and
//! velocities, so numeric fields accept JSON numbers or numeric strings.
//! Anything the backend says about risk is ignored: risk is always derived
//! locally by [`NearEarthObject::new`].

use std::collections::HashSet;

use chrono::NaiveDate;
use cw_core::NearEarthObject;
use serde::{Deserialize, Deserializer};

use crate::error::FeedError;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_limited: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub diameter_km: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub velocity_km_s: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub miss_distance_km: f64,
    pub date: String,
    pub hazardous: bool,
}

impl FeedRecord {
    /// Validate and convert into a domain object.
    ///
    /// # Errors
    ///
    /// Returns a reason string for blank ids, negative or non-finite
    /// measurements, and dates that are not `YYYY-MM-DD`.
    pub fn into_object(self) -> Result<NearEarthObject, String> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err("blank id".into());
        }
        for (field, value) in [
            ("diameter_km", self.diameter_km),
            ("velocity_km_s", self.velocity_km_s),
            ("miss_distance_km", self.miss_distance_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{field} must be a non-negative number, got {value}"));
            }
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|e| format!("date '{}': {e}", self.date))?;

        let object = NearEarthObject::new(
            id,
            self.name,
            self.diameter_km,
            self.velocity_km_s,
            self.miss_distance_km,
            date,
            self.hazardous,
        );
        Ok(match self.name_limited.filter(|n| !n.trim().is_empty()) {
            Some(short) => object.with_name_limited(short),
            None => object,
        })
    }
}

/// Parse a feed body into objects.
///
/// The body must be a JSON array. Individual records that fail the schema are
/// dropped with a warning; if the array is non-empty and nothing survives,
/// the whole body is rejected. Ids are unique in the result: the first record
/// with a given id wins.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] when the body is not an array or no record is usable.
pub fn parse_feed(body: &[u8]) -> Result<Vec<NearEarthObject>, FeedError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| FeedError::Parse(format!("feed body is not a JSON array: {e}")))?;

    let total = values.len();
    let mut objects: Vec<NearEarthObject> = Vec::with_capacity(total);
    let mut seen = HashSet::with_capacity(total);
    let mut duplicates = 0usize;
    for (index, value) in values.into_iter().enumerate() {
        let record = match serde_json::from_value::<FeedRecord>(value) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(index, %error, "dropping feed record that does not match schema");
                continue;
            }
        };
        match record.into_object() {
            Ok(object) if seen.contains(&object.id) => duplicates += 1,
            Ok(object) => {
                seen.insert(object.id.clone());
                objects.push(object);
            }
            Err(reason) => {
                tracing::warn!(index, %reason, "dropping invalid feed record");
            }
        }
    }
    if duplicates > 0 {
        tracing::warn!(duplicates, "dropping feed records with repeated ids");
    }

    if total > 0 && objects.is_empty() {
        return Err(FeedError::Parse(format!(
            "none of the {total} feed records were usable"
        )));
    }
    Ok(objects)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("'{s}' is not a number: {e}"))),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Integer(u64),
        String(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Integer(n) => n.to_string(),
        Id::String(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::RiskLevel;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {
            "id": "3542519",
            "name": "(2010 PK9)",
            "date": "2024-02-15",
            "velocity_km_s": "21.7204",
            "miss_distance_km": "4120000.123",
            "diameter_km": 0.43,
            "hazardous": true,
            "risk_score": 40,
            "risk_level": "MEDIUM"
        },
        {
            "id": 2000433,
            "name": "433 Eros (A898 PA)",
            "name_limited": "Eros",
            "date": "2024-02-20",
            "velocity_km_s": 5.1,
            "miss_distance_km": 26000000,
            "diameter_km": "16.8",
            "hazardous": false
        }
    ]"#;

    #[test]
    fn parses_mixed_numeric_encodings() {
        let objects = parse_feed(FIXTURE.as_bytes()).unwrap();
        assert_eq!(objects.len(), 2);

        let first = &objects[0];
        assert_eq!(first.id, "3542519");
        assert!((first.velocity_km_s() - 21.7204).abs() < 1e-9);
        assert!((first.miss_distance_km() - 4_120_000.123).abs() < 1e-6);

        let second = &objects[1];
        assert_eq!(second.id, "2000433");
        assert_eq!(second.display_name(), "Eros");
        assert!((second.diameter_km - 16.8).abs() < 1e-9);
    }

    #[test]
    fn backend_risk_fields_are_recomputed() {
        let objects = parse_feed(FIXTURE.as_bytes()).unwrap();
        // hazardous + <5M + >20 km/s
        assert_eq!(objects[0].risk_level(), RiskLevel::High);
        assert_eq!(objects[0].risk_score(), 100);
        assert_eq!(objects[1].risk_level(), RiskLevel::Low);
        assert_eq!(objects[1].risk_score(), 0);
    }

    #[test]
    fn invalid_records_are_dropped() {
        let body = r#"[
            {"id": "ok", "name": "a", "date": "2024-01-01", "velocity_km_s": 1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": "neg", "name": "b", "date": "2024-01-01", "velocity_km_s": -1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": "date", "name": "c", "date": "Feb 1", "velocity_km_s": 1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": "  ", "name": "d", "date": "2024-01-01", "velocity_km_s": 1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": "nan", "name": "e", "date": "2024-01-01", "velocity_km_s": "NaN",
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"name": "missing id"}
        ]"#;
        let objects = parse_feed(body.as_bytes()).unwrap();
        let ids: Vec<_> = objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ok"]);
    }

    #[test]
    fn repeated_ids_keep_the_first_record() {
        let body = r#"[
            {"id": "7", "name": "first", "date": "2024-01-01", "velocity_km_s": 1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": 8, "name": "other", "date": "2024-01-01", "velocity_km_s": 1,
             "miss_distance_km": 1e8, "diameter_km": 0.1, "hazardous": false},
            {"id": 7, "name": "second", "date": "2024-01-01", "velocity_km_s": 25,
             "miss_distance_km": 1e6, "diameter_km": 0.1, "hazardous": true}
        ]"#;
        let objects = parse_feed(body.as_bytes()).unwrap();
        let ids: Vec<_> = objects
            .iter()
            .map(|o| (o.id.as_str(), o.name.as_str(), o.risk_level()))
            .collect();
        assert_eq!(
            ids,
            vec![("7", "first", RiskLevel::Low), ("8", "other", RiskLevel::Low)]
        );
    }

    #[test]
    fn non_array_body_is_rejected() {
        let err = parse_feed(br#"{"detail":"Authentication credentials were not provided."}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
        assert!(parse_feed(b"<html>").is_err());
    }

    #[test]
    fn all_invalid_records_reject_the_body() {
        let err = parse_feed(br#"[{"id": 1}, {"id": 2}]"#).unwrap_err();
        assert!(err.to_string().contains("none of the 2"));
    }

    #[test]
    fn empty_array_is_a_valid_empty_feed() {
        assert!(parse_feed(b"[]").unwrap().is_empty());
    }
}
