//! Turns one raw record into a clean [`Segment`] or rejects it.

use geo::{Coord, LineString};
use serde_json::Value;

use crate::loading::RawRecord;
use crate::model::Segment;

/// Display name used when a record has no usable street name.
pub const UNNAMED: &str = "Unnamed";
/// Connection-type code used when a record carries none.
pub const UNKNOWN_CONNECTION: &str = "UNKNOWN";

/// A successfully normalized record.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub segment: Segment,
    /// True when `fallback_id` was consumed. The caller advances its counter
    /// only in that case, so explicit ids never burn fallback ids.
    pub used_fallback_id: bool,
}

/// Validate and clean one raw record.
///
/// The record is rejected (`None`) when its coordinates field is missing or
/// not a sequence of pairs, or when fewer than two finite points survive
/// cleaning. Individual bad pairs are dropped silently; everything else is
/// defaulted, never rejected.
pub fn normalize(record: &RawRecord, fallback_id: i64) -> Option<Normalized> {
    let (id, used_fallback_id) = match explicit_id(&record.id) {
        Some(id) => (id, false),
        None => (fallback_id, true),
    };

    let street_name = match record.street_name.as_str() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNNAMED.to_string(),
    };

    let connection_type = match record.connection_type.as_str() {
        Some(code) => code.to_uppercase(),
        None => UNKNOWN_CONNECTION.to_string(),
    };

    let geometry = clean_coordinates(&record.coordinates)?;

    Some(Normalized {
        segment: Segment {
            id,
            street_name,
            connection_type,
            geometry,
        },
        used_fallback_id,
    })
}

/// An integer id taken verbatim, or a numeric string parsed as one.
fn explicit_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Clean the raw coordinate array, reading each pair as `[lon, lat]`. `None`
/// when the field is not an array of arrays or fewer than two valid points
/// remain.
fn clean_coordinates(value: &Value) -> Option<LineString<f64>> {
    let pairs = value.as_array()?;
    let mut points: Vec<Coord<f64>> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        // A non-array element makes the whole record malformed.
        let pair = pair.as_array()?;
        if pair.len() < 2 {
            continue;
        }
        let (Some(lon), Some(lat)) = (coerce_f64(&pair[0]), coerce_f64(&pair[1])) else {
            continue;
        };
        points.push(Coord { x: lon, y: lat });
    }
    if points.len() < 2 {
        return None;
    }
    Some(LineString::from(points))
}

/// A numeric value, or a numeric string, as a finite float.
fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    fn record(value: serde_json::Value) -> RawRecord {
        from_value(value).unwrap()
    }

    #[test]
    fn keeps_explicit_integer_id() {
        let rec = record(json!({
            "id": 42,
            "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
        }));
        let normalized = normalize(&rec, 7).unwrap();
        assert_eq!(normalized.segment.id, 42);
        assert!(!normalized.used_fallback_id);
    }

    #[test]
    fn parses_numeric_string_id() {
        let rec = record(json!({
            "id": "204",
            "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
        }));
        let normalized = normalize(&rec, 7).unwrap();
        assert_eq!(normalized.segment.id, 204);
        assert!(!normalized.used_fallback_id);
    }

    #[test]
    fn unusable_ids_consume_the_fallback() {
        for id in [json!(null), json!("main"), json!(4.5), json!([1])] {
            let rec = record(json!({
                "id": id,
                "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
            }));
            let normalized = normalize(&rec, 7).unwrap();
            assert_eq!(normalized.segment.id, 7);
            assert!(normalized.used_fallback_id);
        }
    }

    #[test]
    fn street_name_and_connection_type_default_to_sentinels() {
        let rec = record(json!({
            "street_name": "",
            "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
        }));
        let segment = normalize(&rec, 1).unwrap().segment;
        assert_eq!(segment.street_name, UNNAMED);
        assert_eq!(segment.connection_type, UNKNOWN_CONNECTION);
    }

    #[test]
    fn connection_type_is_uppercased() {
        let rec = record(json!({
            "connection_type": "ng",
            "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
        }));
        assert_eq!(normalize(&rec, 1).unwrap().segment.connection_type, "NG");
    }

    #[test]
    fn missing_or_malformed_coordinates_reject_the_record() {
        assert!(normalize(&record(json!({"id": 1})), 1).is_none());
        assert!(normalize(&record(json!({"coordinates": "oops"})), 1).is_none());
        // One non-array element poisons the whole sequence.
        let rec = record(json!({
            "coordinates": [[-122.68, 45.51], "oops", [-122.67, 45.52]],
        }));
        assert!(normalize(&rec, 1).is_none());
    }

    #[test]
    fn fewer_than_two_surviving_points_reject_the_record() {
        let rec = record(json!({"coordinates": [[1, 1]]}));
        assert!(normalize(&rec, 1).is_none());
        let rec = record(json!({
            "coordinates": [[-122.68, 45.51], ["NaN", 45.52]],
        }));
        assert!(normalize(&rec, 1).is_none());
    }

    #[test]
    fn bad_pairs_are_dropped_but_siblings_survive() {
        let rec = record(json!({
            "coordinates": [
                [-122.68, 45.51],
                ["inf", 45.0],
                [-122.67],
                ["-122.66", "45.53"],
            ],
        }));
        let segment = normalize(&rec, 1).unwrap().segment;
        let points: Vec<_> = segment.geometry.coords().collect();
        assert_eq!(points.len(), 2);
        assert!((points[1].x - -122.66).abs() < 1e-9);
        assert!((points[1].y - 45.53).abs() < 1e-9);
    }

    #[test]
    fn pairs_read_longitude_first() {
        let rec = record(json!({
            "coordinates": [[-122.68, 45.51], [-122.67, 45.52]],
        }));
        let segment = normalize(&rec, 1).unwrap().segment;
        let first = segment.geometry.coords().next().unwrap();
        assert!((first.x - -122.68).abs() < 1e-9);
        assert!((first.y - 45.51).abs() < 1e-9);
    }

    #[test]
    fn extra_pair_entries_are_ignored() {
        let rec = record(json!({
            "coordinates": [[-122.68, 45.51, 12.0], [-122.67, 45.52, 13.0]],
        }));
        assert!(normalize(&rec, 1).is_some());
    }
}
