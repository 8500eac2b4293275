//! Shared types, error enum, and the flight record consumed by every stage.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// All errors produced by milspot-core.
///
/// Only file loading and feed decoding can fail. Classification, scoring,
/// and summarization are total over any `FlightRecord`.
#[derive(Debug, Error)]
pub enum MilspotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("feed decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MilspotError>;

// ---------------------------------------------------------------------------
// Flight record
// ---------------------------------------------------------------------------

/// One aircraft position report from a single scan cycle.
///
/// Every field is optional on the wire. Missing or `null` values decode to
/// an empty string, zero, or `None` for coordinates, so no downstream check
/// ever has to deal with absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub callsign: String,
    /// ICAO-like type designator (e.g. `C17`, `B52H`).
    #[serde(
        default,
        alias = "aircraft_type",
        alias = "type",
        deserialize_with = "lenient_string"
    )]
    pub aircraft_code: String,
    #[serde(default, alias = "reg", deserialize_with = "lenient_string")]
    pub registration: String,
    #[serde(default, alias = "lat", deserialize_with = "lenient_coord")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lon", deserialize_with = "lenient_coord")]
    pub longitude: Option<f64>,
    /// Feet. 0 when unknown.
    #[serde(default, alias = "alt", deserialize_with = "lenient_int")]
    pub altitude: i32,
    /// Knots. 0 when unknown.
    #[serde(default, alias = "gspeed", deserialize_with = "lenient_int")]
    pub ground_speed: i32,
    #[serde(default, deserialize_with = "lenient_squawk")]
    pub squawk: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub painted_as: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub operating_as: String,
    /// Producer-supplied time value, passed through untouched.
    #[serde(default, deserialize_with = "lenient_opaque")]
    pub timestamp: Option<String>,
}

impl FlightRecord {
    /// Known position, or `None` when a coordinate is missing or the
    /// report sits at exactly (0, 0).
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if !(lat == 0.0 && lon == 0.0) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Best human label: callsign, then registration.
    pub fn label(&self) -> &str {
        if !self.callsign.is_empty() {
            &self.callsign
        } else if !self.registration.is_empty() {
            &self.registration
        } else {
            "Unknown"
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoding
// ---------------------------------------------------------------------------

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_int<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<i32, D::Error> {
    let v = match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    };
    Ok(v.map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(0))
}

fn lenient_coord<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<f64>, D::Error> {
    let v = match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(v.filter(|f| f.is_finite()))
}

fn lenient_squawk<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(code) => format!("{code:04}"),
            None => String::new(),
        },
        _ => String::new(),
    })
}

fn lenient_opaque<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
