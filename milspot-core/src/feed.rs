//! Feed decoding — turn a live-positions JSON payload into flight records.
//!
//! Accepts either a bare array of flight objects or the API envelope
//! `{"data": [...]}`. Entries that are not objects, or that fail to decode,
//! are skipped with a warning instead of failing the whole batch.
//!
//! Producers disagree on field names, and some send both spellings of the
//! same field. Each entry is folded onto one key per field before decoding.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{FlightRecord, MilspotError, Result};

/// Decode a feed payload. Only a payload that is not JSON at all, or has
/// no recognizable flight list, is an error.
pub fn parse_feed(json: &str) -> Result<Vec<FlightRecord>> {
    let root: Value = serde_json::from_str(json)?;
    let entries = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(MilspotError::Config(
                    "feed envelope 'data' is not an array".into(),
                ))
            }
        },
        _ => {
            return Err(MilspotError::Config(
                "feed payload is neither an array nor an object".into(),
            ))
        }
    };

    let mut flights = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        let Value::Object(mut fields) = entry else {
            continue;
        };
        collapse_aliases(&mut fields);
        match FlightRecord::deserialize(Value::Object(fields)) {
            Ok(f) => flights.push(f),
            Err(e) => warn!("feed: skipping entry {idx}: {e}"),
        }
    }
    Ok(flights)
}

/// Accepted spellings per field, canonical name first.
const FIELD_ALIASES: &[&[&str]] = &[
    &["aircraft_code", "aircraft_type", "type"],
    &["registration", "reg"],
    &["latitude", "lat"],
    &["longitude", "lon"],
    &["altitude", "alt"],
    &["ground_speed", "gspeed"],
];

/// Keep one value per field under its canonical key: the first non-null
/// spelling in `FIELD_ALIASES` order, else whichever was present.
fn collapse_aliases(fields: &mut Map<String, Value>) {
    for names in FIELD_ALIASES {
        let mut chosen: Option<Value> = None;
        for name in names.iter() {
            let Some(value) = fields.remove(*name) else {
                continue;
            };
            if chosen.as_ref().is_some_and(|v| !v.is_null()) {
                debug!("feed: ignoring duplicate field {name}");
            } else {
                chosen = Some(value);
            }
        }
        if let Some(value) = chosen {
            fields.insert(names[0].to_string(), value);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
