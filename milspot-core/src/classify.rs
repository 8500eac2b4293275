//! Military classification — is this flight military at all?
//!
//! Four independent checks against uppercase-normalized fields, evaluated in
//! order and short-circuiting on the first hit:
//! 1. Callsign starts with a military prefix
//! 2. Aircraft code contains a military type code
//! 3. Operator (operating-as, then painted-as) contains a military fragment
//! 4. Registration starts with a military prefix

use serde::Serialize;

use crate::catalog::PatternCatalog;
use crate::types::FlightRecord;

/// Which rule identified the flight as military.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilitarySignal {
    Callsign,
    AircraftType,
    Operator,
    Registration,
}

impl MilitarySignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Callsign => "callsign",
            Self::AircraftType => "aircraft_type",
            Self::Operator => "operator",
            Self::Registration => "registration",
        }
    }
}

/// Classifier bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Classifier { catalog }
    }

    pub fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    pub fn is_military(&self, flight: &FlightRecord) -> bool {
        self.signal(flight).is_some()
    }

    /// First rule that fires, or `None` for a civilian/unknown flight.
    pub fn signal(&self, flight: &FlightRecord) -> Option<MilitarySignal> {
        let cat = self.catalog;

        let callsign = upper(&flight.callsign);
        if starts_with_any(&callsign, &cat.military_callsigns) {
            return Some(MilitarySignal::Callsign);
        }

        let aircraft = upper(&flight.aircraft_code);
        if contains_any(&aircraft, &cat.military_aircraft_types) {
            return Some(MilitarySignal::AircraftType);
        }

        let operating_as = upper(&flight.operating_as);
        let painted_as = upper(&flight.painted_as);
        if contains_any(&operating_as, &cat.military_operators)
            || contains_any(&painted_as, &cat.military_operators)
        {
            return Some(MilitarySignal::Operator);
        }

        let registration = upper(&flight.registration);
        if starts_with_any(&registration, &cat.military_reg_prefixes) {
            return Some(MilitarySignal::Registration);
        }

        None
    }
}

pub(crate) fn upper(field: &str) -> String {
    field.trim().to_uppercase()
}

/// Empty fields never match, whatever the pattern list holds.
pub(crate) fn starts_with_any(field: &str, prefixes: &[String]) -> bool {
    !field.is_empty() && prefixes.iter().any(|p| field.starts_with(p.as_str()))
}

pub(crate) fn contains_any(field: &str, fragments: &[String]) -> bool {
    !field.is_empty() && fragments.iter().any(|f| field.contains(f.as_str()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> FlightRecord {
        FlightRecord::default()
    }

    #[test]
    fn test_empty_record_is_not_military() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        assert!(!c.is_military(&flight()));
        assert_eq!(c.signal(&flight()), None);
    }

    #[test]
    fn test_callsign_prefix() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            callsign: "rch123".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::Callsign));
    }

    #[test]
    fn test_every_cataloged_callsign_alone_is_military() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        for prefix in &cat.military_callsigns {
            let f = FlightRecord {
                callsign: prefix.clone(),
                ..flight()
            };
            assert!(c.is_military(&f), "{prefix} should classify as military");
        }
    }

    #[test]
    fn test_callsign_must_be_prefix() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            callsign: "XRCH1".into(),
            ..flight()
        };
        assert!(!c.is_military(&f));
    }

    #[test]
    fn test_aircraft_type_substring() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            aircraft_code: "B52H".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::AircraftType));
    }

    #[test]
    fn test_operator_fragment_either_field() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            operating_as: "Luftwaffe Flugbereitschaft".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::Operator));
        let f = FlightRecord {
            painted_as: "royal air force".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::Operator));
    }

    #[test]
    fn test_registration_prefix() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            registration: "zz336".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::Registration));
    }

    #[test]
    fn test_callsign_checked_before_aircraft() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            callsign: "REACH42".into(),
            aircraft_code: "C17".into(),
            ..flight()
        };
        assert_eq!(c.signal(&f), Some(MilitarySignal::Callsign));
    }

    #[test]
    fn test_civilian_airliner() {
        let cat = PatternCatalog::builtin();
        let c = Classifier::new(&cat);
        let f = FlightRecord {
            callsign: "DAL123".into(),
            aircraft_code: "A320".into(),
            registration: "N301DV".into(),
            operating_as: "DAL".into(),
            painted_as: "DAL".into(),
            ..flight()
        };
        assert!(!c.is_military(&f));
    }

    #[test]
    fn test_smaller_catalog_substitutes() {
        let cat = PatternCatalog {
            military_callsigns: vec!["DUKE".into()],
            military_aircraft_types: Vec::new(),
            military_operators: Vec::new(),
            military_reg_prefixes: Vec::new(),
            ..Default::default()
        }
        .prepare()
        .unwrap();
        let c = Classifier::new(&cat);
        let duke = FlightRecord {
            callsign: "DUKE01".into(),
            ..flight()
        };
        let reach = FlightRecord {
            callsign: "RCH123".into(),
            ..flight()
        };
        assert!(c.is_military(&duke));
        assert!(!c.is_military(&reach));
    }
}
