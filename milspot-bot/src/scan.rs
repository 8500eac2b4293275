//! One scan cycle: classify, score, pick the best candidate, explain it.

use log::info;

use milspot_core::message::compose_message;
use milspot_core::select::best_of;
use milspot_core::{CandidateSelector, FlightRecord, InsightGenerator, PatternCatalog, Scorer};

/// The chosen flight and everything the notifier needs.
#[derive(Debug, Clone)]
pub struct Selection<'f> {
    pub flight: &'f FlightRecord,
    pub score: u32,
    pub summary: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ScanReport<'f> {
    pub total: usize,
    pub candidates: usize,
    pub selection: Option<Selection<'f>>,
}

pub fn run_cycle<'f>(
    catalog: &PatternCatalog,
    flights: &'f [FlightRecord],
    tracking_url_base: &str,
    detected_at: &str,
) -> ScanReport<'f> {
    let selector = CandidateSelector::new(Scorer::new(catalog));
    let insights = InsightGenerator::new(catalog);

    let ranked = selector.rank(flights);
    let candidates = ranked.len();

    let selection = best_of(ranked).map(|best| {
        info!("selected {} (score {})", best.flight.label(), best.score);
        let summary = insights.summarize(best.flight, best.score);
        let message = compose_message(best.flight, &summary, tracking_url_base, detected_at);
        Selection {
            flight: best.flight,
            score: best.score,
            summary,
            message,
        }
    });

    ScanReport {
        total: flights.len(),
        candidates,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<FlightRecord> {
        vec![
            FlightRecord {
                callsign: "DAL123".into(),
                aircraft_code: "A320".into(),
                altitude: 36000,
                ground_speed: 460,
                ..Default::default()
            },
            FlightRecord {
                callsign: "RCH123".into(),
                aircraft_code: "C17".into(),
                registration: "05-5140".into(),
                altitude: 38000,
                ground_speed: 450,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_cycle_selects_and_explains() {
        let cat = PatternCatalog::builtin();
        let flights = batch();
        let report = run_cycle(&cat, &flights, "https://www.flightradar24.com/", "now");
        assert_eq!(report.total, 2);
        assert_eq!(report.candidates, 1);
        let sel = report.selection.unwrap();
        assert_eq!(sel.flight.callsign, "RCH123");
        assert_eq!(sel.score, 10);
        assert!(sel.summary.ends_with("MODERATE INTEREST - Worth monitoring"));
        assert!(sel.message.starts_with("MILITARY FLIGHT DETECTED"));
        assert!(sel.message.contains("Live tracking: https://www.flightradar24.com/RCH123"));
        assert!(sel.message.contains(&sel.summary));
    }

    #[test]
    fn test_cycle_without_military_traffic() {
        let cat = PatternCatalog::builtin();
        let flights = vec![batch().remove(0)];
        let report = run_cycle(&cat, &flights, "https://www.flightradar24.com/", "now");
        assert_eq!(report.total, 1);
        assert_eq!(report.candidates, 0);
        assert!(report.selection.is_none());
    }
}
