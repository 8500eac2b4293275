//! Interest scoring for flights already classified as military.
//!
//! score = base + category weight + hotspot bonus + loitering bonus
//!       + squawk-anomaly bonus
//!
//! All terms are non-negative and the sum saturates at `u32::MAX` rather
//! than wrapping. The same record always produces the same score.

use serde::Serialize;

use crate::catalog::{AircraftCategory, PatternCatalog};
use crate::classify::{Classifier, MilitarySignal};
use crate::types::FlightRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Loitering: below this altitude (ft)...
pub const LOITER_MAX_ALTITUDE_FT: i32 = 15_000;
/// ...and below this ground speed (kts).
pub const LOITER_MAX_SPEED_KTS: i32 = 250;

/// Emergency and military transponder codes that earn the squawk bonus.
pub const ANOMALOUS_SQUAWKS: &[&str] = &["7500", "7600", "7700", "7777", "0000", "1200"];

/// Low-and-slow profile typical of an orbit or surveillance track.
pub fn is_loitering(flight: &FlightRecord) -> bool {
    flight.altitude < LOITER_MAX_ALTITUDE_FT && flight.ground_speed < LOITER_MAX_SPEED_KTS
}

pub fn is_anomalous_squawk(squawk: &str) -> bool {
    ANOMALOUS_SQUAWKS.contains(&squawk.trim())
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Per-term view of a military flight's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub signal: MilitarySignal,
    /// Catalog weight of the classification signal. Informational only.
    pub signal_weight: u32,
    pub base: u32,
    pub category: Option<AircraftCategory>,
    pub category_points: u32,
    pub hotspot: Option<String>,
    pub hotspot_points: u32,
    pub loitering_points: u32,
    pub squawk_points: u32,
}

impl ScoreBreakdown {
    /// Sum of all terms. Saturates at `u32::MAX` for oversized catalog weights.
    pub fn total(&self) -> u32 {
        [
            self.category_points,
            self.hotspot_points,
            self.loitering_points,
            self.squawk_points,
        ]
        .iter()
        .fold(self.base, |acc, p| acc.saturating_add(*p))
    }
}

/// A candidate: one flight and its score for this scan cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult<'f> {
    pub flight: &'f FlightRecord,
    pub score: u32,
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    classifier: Classifier<'a>,
}

impl<'a> Scorer<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Scorer {
            classifier: Classifier::new(catalog),
        }
    }

    /// Score a flight. Non-military flights score 0.
    pub fn score(&self, flight: &FlightRecord) -> u32 {
        self.breakdown(flight).map(|b| b.total()).unwrap_or(0)
    }

    /// Full breakdown, or `None` when the flight is not military.
    pub fn breakdown(&self, flight: &FlightRecord) -> Option<ScoreBreakdown> {
        let signal = self.classifier.signal(flight)?;
        let cat = self.classifier.catalog();
        let w = &cat.weights;

        let signal_weight = match signal {
            MilitarySignal::Callsign => w.military_callsign,
            MilitarySignal::AircraftType => w.military_aircraft,
            MilitarySignal::Operator => w.military_operator,
            // No dedicated weight; registration evidence ranks with the operator
            MilitarySignal::Registration => w.military_operator,
        };

        let rule = cat.category_for(&flight.aircraft_code);

        let hotspot = flight
            .position()
            .and_then(|(lat, lon)| cat.hotspot_at(lat, lon));

        Some(ScoreBreakdown {
            signal,
            signal_weight,
            base: w.base,
            category: rule.map(|r| r.category),
            category_points: rule.map(|r| r.weight).unwrap_or(0),
            hotspot: hotspot.map(|h| h.name.clone()),
            hotspot_points: if hotspot.is_some() {
                w.hotspot_location
            } else {
                0
            },
            loitering_points: if is_loitering(flight) {
                w.loitering_pattern
            } else {
                0
            },
            squawk_points: if is_anomalous_squawk(&flight.squawk) {
                w.squawk_anomaly
            } else {
                0
            },
        })
    }

    /// Score paired with the flight, or `None` when not military.
    pub fn candidate<'f>(&self, flight: &'f FlightRecord) -> Option<ScoreResult<'f>> {
        self.breakdown(flight).map(|b| ScoreResult {
            flight,
            score: b.total(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
