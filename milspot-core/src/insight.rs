//! Intelligence insights — plain-language reasons a flight is interesting.
//!
//! Re-scans the same fields the scorer uses but emits sentences instead of
//! points. The rendered summary is presentation text for the notifier and is
//! never parsed back.

use crate::catalog::{AircraftCategory, PatternCatalog};
use crate::classify::{contains_any, starts_with_any, upper};
use crate::types::FlightRecord;

const HIGH_ALTITUDE_FT: i32 = 40_000;
const LOW_ALTITUDE_FT: i32 = 15_000;
const SLOW_SPEED_KTS: i32 = 250;
const FAST_SPEED_KTS: i32 = 500;

const HIGH_VALUE_SCORE: u32 = 15;
const MODERATE_SCORE: u32 = 10;

const SUMMARY_HEADER: &str = "INTELLIGENCE ANALYSIS:";
const FALLBACK_LINE: &str = "Standard military aircraft detected";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Role,
    Affiliation,
    Region,
    Characteristic,
    Operator,
}

/// One observation about a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Insight {
            kind,
            text: text.into(),
        }
    }
}

/// Interest tier derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestTier {
    HighValue,
    Moderate,
    Standard,
}

impl InterestTier {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_VALUE_SCORE {
            Self::HighValue
        } else if score >= MODERATE_SCORE {
            Self::Moderate
        } else {
            Self::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighValue => "high-value",
            Self::Moderate => "moderate",
            Self::Standard => "standard",
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            Self::HighValue => "HIGH-VALUE TARGET - Significant intelligence interest",
            Self::Moderate => "MODERATE INTEREST - Worth monitoring",
            Self::Standard => "STANDARD MILITARY TRAFFIC",
        }
    }
}

fn role_sentence(category: AircraftCategory) -> &'static str {
    match category {
        AircraftCategory::Fighter => "Fighter aircraft - High-speed air superiority mission",
        AircraftCategory::Bomber => "Strategic bomber - Long-range strike capability",
        AircraftCategory::Reconnaissance => {
            "Reconnaissance aircraft - Intelligence gathering mission"
        }
        AircraftCategory::Tanker => "Aerial refueling tanker - Force projection support",
        AircraftCategory::Transport => "Military transport - Troop/cargo movement",
        AircraftCategory::SpecialMission => "Special mission aircraft - Specialized operations",
        AircraftCategory::Helicopter => "Military helicopter - Tactical air support",
        AircraftCategory::Uav => "Unmanned aerial vehicle - Remote operations",
    }
}

fn squawk_sentence(squawk: &str) -> Option<&'static str> {
    match squawk {
        "7500" | "7600" | "7700" => Some("Emergency squawk - Aircraft in distress"),
        "7777" => Some("Military squawk - Active military operations"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct InsightGenerator<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> InsightGenerator<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        InsightGenerator { catalog }
    }

    /// All observations, in order: role, affiliation, region,
    /// characteristics, operator.
    pub fn insights(&self, flight: &FlightRecord) -> Vec<Insight> {
        let mut out = Vec::new();
        self.roles(flight, &mut out);
        self.affiliations(flight, &mut out);
        self.region(flight, &mut out);
        characteristics(flight, &mut out);
        self.operator(flight, &mut out);
        out
    }

    /// Render observations plus the tier line into a bulleted block.
    pub fn summarize(&self, flight: &FlightRecord, score: u32) -> String {
        let insights = self.insights(flight);
        if insights.is_empty() {
            return format!("{SUMMARY_HEADER}\n\n\u{2022} {FALLBACK_LINE}");
        }

        let mut summary = format!("{SUMMARY_HEADER}\n\n");
        for insight in &insights {
            summary.push_str(&format!("\u{2022} {}\n", insight.text));
        }
        summary.push('\n');
        summary.push_str(InterestTier::from_score(score).headline());
        summary
    }

    /// One sentence per distinct category whose codes appear in the type.
    fn roles(&self, flight: &FlightRecord, out: &mut Vec<Insight>) {
        let code = upper(&flight.aircraft_code);
        let mut seen: Vec<AircraftCategory> = Vec::new();
        for rule in &self.catalog.categories {
            if seen.contains(&rule.category) || !rule.matches(&code) {
                continue;
            }
            seen.push(rule.category);
            out.push(Insight::new(InsightKind::Role, role_sentence(rule.category)));
        }
    }

    fn affiliations(&self, flight: &FlightRecord, out: &mut Vec<Insight>) {
        let callsign = upper(&flight.callsign);
        for group in &self.catalog.affiliations {
            if starts_with_any(&callsign, &group.prefixes) {
                out.push(Insight::new(InsightKind::Affiliation, group.description.as_str()));
            }
        }
    }

    fn region(&self, flight: &FlightRecord, out: &mut Vec<Insight>) {
        let Some((lat, lon)) = flight.position() else {
            return;
        };
        if let Some(region) = self.catalog.region_at(lat, lon) {
            out.push(Insight::new(InsightKind::Region, region.description.as_str()));
        }
    }

    fn operator(&self, flight: &FlightRecord, out: &mut Vec<Insight>) {
        let operating_as = upper(&flight.operating_as);
        let painted_as = upper(&flight.painted_as);
        let found = self.catalog.named_operators.iter().find(|op| {
            let fragment = std::slice::from_ref(&op.fragment);
            contains_any(&operating_as, fragment) || contains_any(&painted_as, fragment)
        });
        if let Some(op) = found {
            out.push(Insight::new(
                InsightKind::Operator,
                format!("{} - Official military aircraft", op.service),
            ));
        }
    }
}

/// Altitude, speed, and squawk observations. Each is checked on its own.
fn characteristics(flight: &FlightRecord, out: &mut Vec<Insight>) {
    if flight.altitude > HIGH_ALTITUDE_FT {
        out.push(Insight::new(
            InsightKind::Characteristic,
            "High-altitude flight - Strategic reconnaissance or command",
        ));
    }
    if flight.altitude < LOW_ALTITUDE_FT {
        out.push(Insight::new(
            InsightKind::Characteristic,
            "Low-altitude flight - Tactical operations or approach",
        ));
    }
    if flight.ground_speed < SLOW_SPEED_KTS {
        out.push(Insight::new(
            InsightKind::Characteristic,
            "Slow flight - Possible loitering or surveillance",
        ));
    }
    if flight.ground_speed > FAST_SPEED_KTS {
        out.push(Insight::new(
            InsightKind::Characteristic,
            "High-speed flight - Rapid response or intercept",
        ));
    }
    if let Some(text) = squawk_sentence(flight.squawk.trim()) {
        out.push(Insight::new(InsightKind::Characteristic, text));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(InterestTier::from_score(15), InterestTier::HighValue);
        assert_eq!(InterestTier::from_score(14), InterestTier::Moderate);
        assert_eq!(InterestTier::from_score(10), InterestTier::Moderate);
        assert_eq!(InterestTier::from_score(9), InterestTier::Standard);
        assert_eq!(InterestTier::from_score(0).as_str(), "standard");
    }

    #[test]
    fn test_reach_transport_insights() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            callsign: "RCH123".into(),
            aircraft_code: "C17".into(),
            altitude: 38000,
            ground_speed: 450,
            ..Default::default()
        };
        let insights = gen.insights(&f);
        assert_eq!(
            texts(&insights),
            vec![
                "Military transport - Troop/cargo movement",
                "US Air Force transport - Strategic airlift",
            ]
        );
    }

    #[test]
    fn test_characteristics_fire_independently() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            aircraft_code: "B52H".into(),
            altitude: 12000,
            ground_speed: 200,
            squawk: "7700".into(),
            ..Default::default()
        };
        let all = gen.insights(&f);
        let chars = all
            .iter()
            .filter(|i| i.kind == InsightKind::Characteristic)
            .count();
        assert_eq!(chars, 3);

        let t = texts(&all);
        assert_eq!(t[0], "Strategic bomber - Long-range strike capability");
        assert!(t.contains(&"Low-altitude flight - Tactical operations or approach"));
        assert!(t.contains(&"Slow flight - Possible loitering or surveillance"));
        assert!(t.contains(&"Emergency squawk - Aircraft in distress"));
    }

    #[test]
    fn test_high_and_fast() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            altitude: 45000,
            ground_speed: 520,
            squawk: "7777".into(),
            ..Default::default()
        };
        let all = gen.insights(&f);
        assert_eq!(
            texts(&all),
            vec![
                "High-altitude flight - Strategic reconnaissance or command",
                "High-speed flight - Rapid response or intercept",
                "Military squawk - Active military operations",
            ]
        );
    }

    #[test]
    fn test_mid_profile_emits_no_characteristics() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            altitude: 30000,
            ground_speed: 400,
            squawk: "1200".into(),
            ..Default::default()
        };
        assert!(gen.insights(&f).is_empty());
    }

    #[test]
    fn test_region_requires_known_position() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let mut f = FlightRecord {
            callsign: "FORTE10".into(),
            latitude: Some(44.0),
            longitude: Some(33.5),
            altitude: 52000,
            ground_speed: 330,
            ..Default::default()
        };
        let regions: Vec<Insight> = gen
            .insights(&f)
            .into_iter()
            .filter(|i| i.kind == InsightKind::Region)
            .collect();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].text, "Black Sea region - Strategic maritime area");

        f.latitude = None;
        assert!(gen
            .insights(&f)
            .iter()
            .all(|i| i.kind != InsightKind::Region));
    }

    #[test]
    fn test_operator_first_match() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            operating_as: "Luftwaffe".into(),
            altitude: 30000,
            ground_speed: 400,
            ..Default::default()
        };
        let all = gen.insights(&f);
        assert_eq!(
            texts(&all),
            vec!["German Air Force - Official military aircraft"]
        );
    }

    #[test]
    fn test_operator_table_order_across_fields() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            operating_as: "Luftwaffe".into(),
            painted_as: "USAF".into(),
            altitude: 30000,
            ground_speed: 400,
            ..Default::default()
        };
        let all = gen.insights(&f);
        assert_eq!(texts(&all), vec!["US Air Force - Official military aircraft"]);
    }

    #[test]
    fn test_role_one_sentence_per_category() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        // AC130 hits transport (C130) and special mission (AC130)
        let f = FlightRecord {
            aircraft_code: "AC130".into(),
            altitude: 20000,
            ground_speed: 300,
            ..Default::default()
        };
        let roles: Vec<Insight> = gen
            .insights(&f)
            .into_iter()
            .filter(|i| i.kind == InsightKind::Role)
            .collect();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].text, "Military transport - Troop/cargo movement");
        assert_eq!(roles[1].text, "Special mission aircraft - Specialized operations");

        // F15E is listed under both fighter rows; reported once
        let f = FlightRecord {
            aircraft_code: "F15E".into(),
            ..f
        };
        let roles = gen
            .insights(&f)
            .into_iter()
            .filter(|i| i.kind == InsightKind::Role)
            .count();
        assert_eq!(roles, 1);
    }

    #[test]
    fn test_summary_layout() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            callsign: "RCH123".into(),
            aircraft_code: "C17".into(),
            altitude: 38000,
            ground_speed: 450,
            ..Default::default()
        };
        let summary = gen.summarize(&f, 10);
        assert_eq!(
            summary,
            "INTELLIGENCE ANALYSIS:\n\n\
             \u{2022} Military transport - Troop/cargo movement\n\
             \u{2022} US Air Force transport - Strategic airlift\n\
             \n\
             MODERATE INTEREST - Worth monitoring"
        );
        assert!(gen
            .summarize(&f, 19)
            .ends_with("HIGH-VALUE TARGET - Significant intelligence interest"));
        assert!(gen.summarize(&f, 5).ends_with("STANDARD MILITARY TRAFFIC"));
    }

    #[test]
    fn test_summary_fallback() {
        let cat = PatternCatalog::builtin();
        let gen = InsightGenerator::new(&cat);
        let f = FlightRecord {
            registration: "ZZ336".into(),
            altitude: 30000,
            ground_speed: 400,
            ..Default::default()
        };
        assert_eq!(
            gen.summarize(&f, 5),
            "INTELLIGENCE ANALYSIS:\n\n\u{2022} Standard military aircraft detected"
        );
    }
}
