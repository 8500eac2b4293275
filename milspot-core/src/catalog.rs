//! Pattern catalog — the static reference data every stage reads.
//!
//! Callsign prefixes, aircraft type codes grouped into categories, operator
//! fragments, registration prefixes, named regions, and the score weight
//! table. Built once (from the built-in tables or a YAML override), then
//! shared by reference. Nothing here is mutated after `prepare()`.

use std::collections::HashSet;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::{MilspotError, Result};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Aircraft role category, derived from the type designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftCategory {
    Fighter,
    Bomber,
    Reconnaissance,
    Tanker,
    Transport,
    SpecialMission,
    Helicopter,
    Uav,
}

impl AircraftCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fighter => "fighter",
            Self::Bomber => "bomber",
            Self::Reconnaissance => "reconnaissance",
            Self::Tanker => "tanker",
            Self::Transport => "transport",
            Self::SpecialMission => "special_mission",
            Self::Helicopter => "helicopter",
            Self::Uav => "uav",
        }
    }
}

/// One row of the ordered category table: any code found as a substring of
/// the type designator assigns `category` and awards `weight` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: AircraftCategory,
    pub codes: Vec<String>,
    pub weight: u32,
}

impl CategoryRule {
    /// `aircraft_code` must already be uppercase.
    pub fn matches(&self, aircraft_code: &str) -> bool {
        !aircraft_code.is_empty() && self.codes.iter().any(|c| aircraft_code.contains(c.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Narrative tables
// ---------------------------------------------------------------------------

/// Callsign prefix group with the sentence emitted when it matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliationRule {
    pub name: String,
    pub prefixes: Vec<String>,
    pub description: String,
}

/// Operator fragment mapped to the nation/service it identifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedOperator {
    pub fragment: String,
    pub service: String,
}

/// Axis-aligned lat/lon rectangle, bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub description: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Region {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Point values for each scoring signal.
///
/// Category points live on the `CategoryRule` rows. The callsign, aircraft,
/// and operator weights describe how strong each classification signal is;
/// they are reported alongside a score, not added into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub base: u32,
    pub military_callsign: u32,
    pub military_aircraft: u32,
    pub military_operator: u32,
    pub hotspot_location: u32,
    pub loitering_pattern: u32,
    pub squawk_anomaly: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            base: 5,
            military_callsign: 10,
            military_aircraft: 8,
            military_operator: 6,
            hotspot_location: 0,
            loitering_pattern: 3,
            squawk_anomaly: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Complete reference data for one process.
///
/// Missing sections in a YAML override fall back to the built-in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternCatalog {
    pub military_callsigns: Vec<String>,
    pub military_aircraft_types: Vec<String>,
    pub military_operators: Vec<String>,
    pub military_reg_prefixes: Vec<String>,
    /// Evaluated top to bottom; the first matching row wins for scoring.
    pub categories: Vec<CategoryRule>,
    pub affiliations: Vec<AffiliationRule>,
    pub named_operators: Vec<NamedOperator>,
    /// Narrative context only. Contributes no points.
    pub regions: Vec<Region>,
    /// Scored geofences. Empty by default.
    pub hotspots: Vec<Region>,
    pub weights: Weights,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        PatternCatalog {
            military_callsigns: strings(MILITARY_CALLSIGNS),
            military_aircraft_types: strings(MILITARY_AIRCRAFT_TYPES),
            military_operators: strings(MILITARY_OPERATORS),
            military_reg_prefixes: military_reg_prefixes(),
            categories: CATEGORY_TABLE
                .iter()
                .map(|(category, codes, weight)| CategoryRule {
                    category: *category,
                    codes: strings(codes),
                    weight: *weight,
                })
                .collect(),
            affiliations: AFFILIATION_TABLE
                .iter()
                .map(|(name, prefixes, description)| AffiliationRule {
                    name: name.to_string(),
                    prefixes: strings(prefixes),
                    description: description.to_string(),
                })
                .collect(),
            named_operators: NAMED_OPERATORS
                .iter()
                .map(|(fragment, service)| NamedOperator {
                    fragment: fragment.to_string(),
                    service: service.to_string(),
                })
                .collect(),
            regions: REGION_TABLE
                .iter()
                .map(|(name, description, lat_min, lat_max, lon_min, lon_max)| Region {
                    name: name.to_string(),
                    description: description.to_string(),
                    lat_min: *lat_min,
                    lat_max: *lat_max,
                    lon_min: *lon_min,
                    lon_max: *lon_max,
                })
                .collect(),
            hotspots: Vec::new(),
            weights: Weights::default(),
        }
    }
}

impl PatternCatalog {
    /// Built-in tables, normalized.
    pub fn builtin() -> Self {
        // The built-in tables are uppercase with valid bounds.
        Self::default().normalized()
    }

    /// Parse a YAML override, then normalize and validate it.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let catalog: PatternCatalog = serde_yaml::from_str(text)?;
        catalog.prepare()
    }

    /// Load a YAML override from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Normalize patterns and reject inverted rectangles.
    pub fn prepare(self) -> Result<Self> {
        for region in self.regions.iter().chain(self.hotspots.iter()) {
            if region.lat_min > region.lat_max || region.lon_min > region.lon_max {
                return Err(MilspotError::Config(format!(
                    "region '{}' has inverted bounds",
                    region.name
                )));
            }
        }
        Ok(self.normalized())
    }

    /// Uppercase and trim every pattern, drop empty ones, dedup in order.
    ///
    /// Matching compares uppercase field values against these patterns, and
    /// an empty pattern would match every non-empty field.
    fn normalized(mut self) -> Self {
        self.military_callsigns = normalize_list("military_callsigns", self.military_callsigns);
        self.military_aircraft_types =
            normalize_list("military_aircraft_types", self.military_aircraft_types);
        self.military_operators = normalize_list("military_operators", self.military_operators);
        self.military_reg_prefixes =
            normalize_list("military_reg_prefixes", self.military_reg_prefixes);
        for rule in &mut self.categories {
            rule.codes = normalize_list(rule.category.as_str(), std::mem::take(&mut rule.codes));
        }
        for rule in &mut self.affiliations {
            rule.prefixes = normalize_list(&rule.name, std::mem::take(&mut rule.prefixes));
        }
        self.named_operators.retain_mut(|op| {
            op.fragment = op.fragment.trim().to_uppercase();
            !op.fragment.is_empty()
        });
        self
    }

    /// Category row the aircraft code falls into, first match wins.
    pub fn category_for(&self, aircraft_code: &str) -> Option<&CategoryRule> {
        let code = aircraft_code.trim().to_uppercase();
        self.categories.iter().find(|rule| rule.matches(&code))
    }

    /// First hotspot containing the position.
    pub fn hotspot_at(&self, lat: f64, lon: f64) -> Option<&Region> {
        self.hotspots.iter().find(|r| r.contains(lat, lon))
    }

    /// First narrative region containing the position.
    pub fn region_at(&self, lat: f64, lon: f64) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(lat, lon))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn normalize_list(section: &str, items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        let item = item.trim().to_uppercase();
        if item.is_empty() {
            dropped += 1;
            continue;
        }
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    if dropped > 0 {
        warn!("catalog: dropped {dropped} empty pattern(s) from {section}");
    }
    out
}

/// `ZZ` (UK military) plus the `43C`..`9FC` hex-style prefixes.
fn military_reg_prefixes() -> Vec<String> {
    std::iter::once("ZZ".to_string())
        .chain((0x43u32..=0x9F).map(|n| format!("{n:02X}C")))
        .collect()
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

const MILITARY_CALLSIGNS: &[&str] = &[
    "NATO40", "NATO41", "NATO42", "NATO43", "NATO44", "NATO45", "RCH", "REACH", "SAM", "SPAR",
    "VENUS", "JEDI", "HAVOC", "RRR", "ASCOT", "COBRA", "VIPER", "TARTAN", "RSD", "RSD1", "RSD2",
    "RSD3", "RSD4", "RSD5", "FORTE", "DRAGON", "HAWK", "EAGLE", "FALCON", "PHANTOM", "THUNDER",
    "LIGHTNING", "STORM", "TEMPEST", "HURRICANE", "WARRIOR", "KNIGHT", "PALADIN", "SENTINEL",
    "GUARDIAN", "SHADOW", "GHOST", "SPECTRE", "WRAITH", "BLACK", "RED", "BLUE", "GREEN", "GOLD",
    "SILVER", "ALPHA", "BETA", "GAMMA", "DELTA", "ECHO", "FOXTROT", "GOLF", "HOTEL", "INDIA",
    "JULIET", "KILO", "LIMA", "MIKE", "NOVEMBER", "OSCAR", "PAPA", "QUEBEC", "ROMEO", "SIERRA",
    "TANGO", "UNIFORM", "VICTOR", "WHISKEY", "XRAY", "YANKEE", "ZULU",
];

const MILITARY_AIRCRAFT_TYPES: &[&str] = &[
    "B1", "B2", "B52", "TU95", "TU160", "TU22M", "RC135", "U2", "P8", "E3TF", "E4B", "E6B", "E8C",
    "RC12", "U28", "MC12", "F15", "F16", "F18", "F22", "F35", "SU27", "SU30", "SU35", "MIG29",
    "MIG31", "C130", "C17", "C5", "A400M", "IL76", "AN124", "KC135", "KC10", "E3", "E4", "E6",
    "E8", "P3", "A10", "AV8", "EA18", "EA6", "EF18", "F15E", "F16C", "F16D",
];

const MILITARY_OPERATORS: &[&str] = &[
    "USAF", "US AIR FORCE", "UNITED STATES AIR FORCE", "RAF", "ROYAL AIR FORCE",
    "RUSSIAN AIR FORCE", "VKS", "LUFTWAFFE", "GERMAN AIR FORCE", "FRENCH AIR FORCE",
    "ARMEE DE L'AIR", "NATO", "NORTH ATLANTIC TREATY ORGANIZATION", "IDF", "ISRAELI AIR FORCE",
    "JASDF", "JAPAN AIR SELF DEFENSE FORCE", "CAF", "CANADIAN AIR FORCE", "RCAF",
    "ROYAL CANADIAN AIR FORCE", "RDAF", "ROYAL DANISH AIR FORCE", "RNLAF",
    "ROYAL NETHERLANDS AIR FORCE", "RSAF", "ROYAL SAUDI AIR FORCE", "IAF", "INDIAN AIR FORCE",
    "PLAAF", "PEOPLE'S LIBERATION ARMY AIR FORCE", "ROKAF", "REPUBLIC OF KOREA AIR FORCE",
    "TURKISH AIR FORCE", "TURAF", "UAE AIR FORCE", "UAEAF", "AUSTRALIAN AIR FORCE", "RAAF", "SPAF",
    "SPANISH AIR FORCE", "SWEDISH AIR FORCE", "SWAF", "FINNISH AIR FORCE", "FAF",
    "NORWEGIAN AIR FORCE", "RNOAF", "PORTUGUESE AIR FORCE", "PRTAF", "POLISH AIR FORCE", "PLAF",
    "CZECH AIR FORCE", "CZAF", "SLOVAK AIR FORCE", "SVKAF", "HUNGARIAN AIR FORCE", "HUAF",
    "ROMANIAN AIR FORCE", "ROAF", "BULGARIAN AIR FORCE", "BGR AF", "GREEK AIR FORCE", "HAF",
    "CROATIAN AIR FORCE", "HRZ", "SERBIAN AIR FORCE", "SRB AF", "SLOVENIAN AIR FORCE", "SVN AF",
    "SWISS AIR FORCE", "SWISS AF", "BELGIAN AIR FORCE", "BAF", "AUSTRIAN AIR FORCE", "AAF",
    "IRISH AIR CORPS", "IAC", "LUXEMBOURG AIR FORCE", "LUX AF", "ESTONIAN AIR FORCE", "EST AF",
    "LATVIAN AIR FORCE", "LVA AF", "LITHUANIAN AIR FORCE", "LTU AF", "MALTESE AIR FORCE", "MLT AF",
    "CYPRUS AIR FORCE", "CYP AF", "GEORGIAN AIR FORCE", "GEO AF", "UKRAINIAN AIR FORCE", "UKR AF",
    "MOLDOVAN AIR FORCE", "MDA AF", "BELARUSIAN AIR FORCE", "BLR AF", "ARMENIAN AIR FORCE",
    "ARM AF", "AZERBAIJANI AIR FORCE", "AZE AF", "KAZAKH AIR FORCE", "KAZ AF", "UZBEK AIR FORCE",
    "UZB AF", "KYRGYZ AIR FORCE", "KGZ AF", "TAJIK AIR FORCE", "TJK AF", "TURKMEN AIR FORCE",
    "TKM AF", "AFGHAN AIR FORCE", "AFG AF", "PAKISTAN AIR FORCE", "PAF", "BANGLADESH AIR FORCE",
    "SRI LANKA AIR FORCE", "SLAF", "MYANMAR AIR FORCE", "MAF", "THAI AIR FORCE", "RTAF",
    "VIETNAM AIR FORCE", "VPAF", "MALAYSIAN AIR FORCE", "RMAF", "SINGAPORE AIR FORCE",
    "INDONESIAN AIR FORCE", "TNI-AU", "PHILIPPINE AIR FORCE", "TAIWAN AIR FORCE", "ROCAF",
    "MONGOLIAN AIR FORCE", "NORTH KOREAN AIR FORCE", "KPAF", "SOUTH KOREAN AIR FORCE",
    "NEW ZEALAND AIR FORCE", "RNZAF", "FIJI AIR FORCE", "PAPUA NEW GUINEA AIR FORCE", "PNG AF",
    "SOLOMON ISLANDS AIR FORCE", "SIAF", "TONGA AIR FORCE", "TAF", "SAMOA AIR FORCE", "SAF",
    "VANUATU AIR FORCE", "VAF", "FRANCE", "GERMANY", "ITALY", "SPAIN", "TURKEY", "GREECE",
    "POLAND", "ROMANIA", "NETHERLANDS", "BELGIUM", "CZECH", "SLOVAK", "HUNGARY", "BULGARIA",
    "CROATIA", "SLOVENIA", "ESTONIA", "LATVIA", "LITHUANIA", "LUXEMBOURG", "MALTA", "CYPRUS",
    "GEORGIA", "UKRAINE", "MOLDOVA", "BELARUS", "ARMENIA", "AZERBAIJAN", "KAZAKHSTAN",
    "UZBEKISTAN", "KYRGYZSTAN", "TAJIKISTAN", "TURKMENISTAN", "AFGHANISTAN", "PAKISTAN",
    "BANGLADESH", "SRI LANKA", "MYANMAR", "THAILAND", "VIETNAM", "MALAYSIA", "SINGAPORE",
    "INDONESIA", "PHILIPPINES", "TAIWAN", "MONGOLIA", "NORTH KOREA", "SOUTH KOREA", "AUSTRALIA",
    "NEW ZEALAND", "FIJI", "PAPUA NEW GUINEA", "SOLOMON ISLANDS", "TONGA", "SAMOA", "VANUATU",
];

/// Category precedence: bomber, reconnaissance, fighter, tanker, transport,
/// special mission, helicopter, UAV, then attack/EW fighter variants.
const CATEGORY_TABLE: &[(AircraftCategory, &[&str], u32)] = &[
    (
        AircraftCategory::Bomber,
        &["B1", "B2", "B52", "TU95", "TU160", "TU22M"],
        10,
    ),
    (
        AircraftCategory::Reconnaissance,
        &[
            "RC135", "U2", "P8", "E3TF", "E4B", "E6B", "E8C", "RC12", "U28", "MC12", "P3", "P8A",
            "EP3", "RC26",
        ],
        9,
    ),
    (
        AircraftCategory::Fighter,
        &[
            "F15", "F16", "F18", "F22", "F35", "F14", "F4", "MIG29", "MIG31", "SU27", "SU30",
            "SU35", "J10", "J11", "J20",
        ],
        7,
    ),
    (
        AircraftCategory::Tanker,
        &["KC135", "KC10", "KC46", "KC130", "KC767", "A330MRTT"],
        6,
    ),
    (
        AircraftCategory::Transport,
        &[
            "C17", "C130", "C5M", "C30J", "C27J", "C295", "A400M", "IL76", "AN124", "AN225", "Y20",
            "Y9",
        ],
        5,
    ),
    (
        AircraftCategory::SpecialMission,
        &["AC130", "MC130", "EC130", "WC130", "HC130"],
        8,
    ),
    (
        AircraftCategory::Helicopter,
        &["AH64", "UH60", "CH47", "AH1", "MI8", "MI24", "KA52"],
        8,
    ),
    (
        AircraftCategory::Uav,
        &["MQ1", "MQ9", "RQ4", "RQ170", "RQ180", "MQ4", "MQ8"],
        8,
    ),
    (
        AircraftCategory::Fighter,
        &["A10", "AV8", "EA18", "EA6", "EF18", "F15E", "F16C", "F16D"],
        7,
    ),
];

const AFFILIATION_TABLE: &[(&str, &[&str], &str)] = &[
    (
        "nato",
        &["NATO40", "NATO41", "NATO42", "NATO43", "NATO44", "NATO45"],
        "NATO mission aircraft - Alliance operations",
    ),
    (
        "us_air_force",
        &["RCH", "REACH", "SAM", "SPAR"],
        "US Air Force transport - Strategic airlift",
    ),
    (
        "us_navy",
        &["VENUS", "JEDI", "HAVOC"],
        "US Navy aircraft - Maritime operations",
    ),
    (
        "uk_raf",
        &["RRR", "ASCOT", "COBRA", "VIPER", "TARTAN"],
        "UK Royal Air Force - British military operations",
    ),
    (
        "russian",
        &["RSD", "RSD1", "RSD2", "RSD3", "RSD4", "RSD5"],
        "Russian military aircraft - VKS operations",
    ),
    (
        "special_ops",
        &["FORTE", "DRAGON", "HAWK", "EAGLE", "FALCON", "PHANTOM"],
        "Special operations aircraft - Covert missions",
    ),
];

const NAMED_OPERATORS: &[(&str, &str)] = &[
    ("USAF", "US Air Force"),
    ("USN", "US Navy"),
    ("USMC", "US Marine Corps"),
    ("RAF", "Royal Air Force"),
    ("NATO", "NATO Alliance"),
    ("LUFTWAFFE", "German Air Force"),
    ("ARMEE", "French Air Force"),
    ("AERONAUTICA", "Italian Air Force"),
    ("EJERCITO", "Spanish Air Force"),
];

/// (name, description, lat_min, lat_max, lon_min, lon_max)
const REGION_TABLE: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("eastern_europe", "Eastern Europe - Near NATO eastern flank", 45.0, 55.0, 15.0, 30.0),
    ("baltic_sea", "Baltic Sea region - NATO-Russia border area", 55.0, 65.0, 15.0, 30.0),
    ("black_sea", "Black Sea region - Strategic maritime area", 40.0, 50.0, 25.0, 40.0),
    ("mediterranean", "Mediterranean - Southern NATO operations", 30.0, 45.0, 5.0, 25.0),
    ("middle_east", "Middle East - Regional security operations", 25.0, 40.0, 30.0, 60.0),
    ("north_africa", "North Africa - Mediterranean security", 20.0, 35.0, -10.0, 25.0),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_category_precedence() {
        let cat = PatternCatalog::builtin();
        let order: Vec<AircraftCategory> = cat.categories.iter().map(|r| r.category).collect();
        assert_eq!(
            &order[..6],
            &[
                AircraftCategory::Bomber,
                AircraftCategory::Reconnaissance,
                AircraftCategory::Fighter,
                AircraftCategory::Tanker,
                AircraftCategory::Transport,
                AircraftCategory::SpecialMission,
            ]
        );
    }

    #[test]
    fn test_category_for_first_match_wins() {
        let cat = PatternCatalog::builtin();
        assert_eq!(
            cat.category_for("b52h").map(|r| r.category),
            Some(AircraftCategory::Bomber)
        );
        assert_eq!(
            cat.category_for("C17").map(|r| r.category),
            Some(AircraftCategory::Transport)
        );
        // AC130 contains C130, and transport is checked before special mission
        assert_eq!(
            cat.category_for("AC130").map(|r| r.category),
            Some(AircraftCategory::Transport)
        );
        assert_eq!(
            cat.category_for("A10C").map(|r| r.category),
            Some(AircraftCategory::Fighter)
        );
        assert!(cat.category_for("A320").is_none());
        assert!(cat.category_for("").is_none());
    }

    #[test]
    fn test_reg_prefixes_span() {
        let prefixes = military_reg_prefixes();
        assert_eq!(prefixes.first().map(String::as_str), Some("ZZ"));
        assert_eq!(prefixes[1], "43C");
        assert!(prefixes.contains(&"4AC".to_string()));
        assert_eq!(prefixes.last().map(String::as_str), Some("9FC"));
    }

    #[test]
    fn test_normalize_uppercases_and_dedups() {
        let cat = PatternCatalog {
            military_callsigns: vec!["rch".into(), " RCH ".into(), "".into(), "duke".into()],
            ..Default::default()
        }
        .prepare()
        .unwrap();
        assert_eq!(cat.military_callsigns, vec!["RCH", "DUKE"]);
    }

    #[test]
    fn test_region_contains_inclusive() {
        let cat = PatternCatalog::builtin();
        assert_eq!(cat.region_at(50.0, 20.0).map(|r| r.name.as_str()), Some("eastern_europe"));
        // Lat 55 sits on both eastern_europe and baltic_sea; first wins
        assert_eq!(cat.region_at(55.0, 20.0).map(|r| r.name.as_str()), Some("eastern_europe"));
        assert!(cat.region_at(35.4, -82.5).is_none());
    }

    #[test]
    fn test_hotspots_empty_by_default() {
        let cat = PatternCatalog::builtin();
        assert!(cat.hotspots.is_empty());
        assert_eq!(cat.weights.hotspot_location, 0);
        assert!(cat.hotspot_at(50.0, 20.0).is_none());
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let text = r#"
military_callsigns:
  - duke
  - topcat
hotspots:
  - name: kaliningrad
    description: Kaliningrad exclave
    lat_min: 54.3
    lat_max: 55.3
    lon_min: 19.6
    lon_max: 22.9
weights:
  hotspot_location: 4
"#;
        let cat = PatternCatalog::from_yaml(text).unwrap();
        assert_eq!(cat.military_callsigns, vec!["DUKE", "TOPCAT"]);
        assert_eq!(cat.hotspots.len(), 1);
        assert_eq!(cat.weights.hotspot_location, 4);
        // Unlisted weights and tables keep their defaults
        assert_eq!(cat.weights.base, 5);
        assert_eq!(cat.categories.len(), CATEGORY_TABLE.len());
    }

    #[test]
    fn test_inverted_region_rejected() {
        let text = r#"
hotspots:
  - name: broken
    description: inverted
    lat_min: 10.0
    lat_max: 5.0
    lon_min: 0.0
    lon_max: 1.0
"#;
        let err = PatternCatalog::from_yaml(text).unwrap_err();
        assert!(matches!(err, MilspotError::Config(_)));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_catalog() {
        let cat = PatternCatalog::builtin();
        let text = cat.to_yaml().unwrap();
        let parsed = PatternCatalog::from_yaml(&text).unwrap();
        assert_eq!(parsed, cat);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "military_reg_prefixes: [zz, '166']\n").unwrap();
        let cat = PatternCatalog::load(&path).unwrap();
        assert_eq!(cat.military_reg_prefixes, vec!["ZZ", "166"]);
    }
}
