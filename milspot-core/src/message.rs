//! Outbound notification text for the selected flight.

use crate::types::FlightRecord;

const HEADER: &str = "MILITARY FLIGHT DETECTED";

fn or_unknown(field: &str) -> &str {
    if field.is_empty() {
        "Unknown"
    } else {
        field
    }
}

/// Live-tracking link for a callsign, if there is one to link to.
pub fn tracking_url(base: &str, callsign: &str) -> Option<String> {
    let callsign = callsign.trim();
    if callsign.is_empty() {
        return None;
    }
    Some(format!("{base}{callsign}"))
}

/// Compose the full message handed to the notifier.
///
/// `detected_at` is preformatted by the caller so this stays a pure function.
pub fn compose_message(
    flight: &FlightRecord,
    summary: &str,
    tracking_url_base: &str,
    detected_at: &str,
) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        String::new(),
        format!("Aircraft: {}", or_unknown(&flight.aircraft_code)),
        format!("Callsign: {}", or_unknown(&flight.callsign)),
        format!("Registration: {}", or_unknown(&flight.registration)),
        format!("Altitude: {} ft", flight.altitude),
        format!("Speed: {} kts", flight.ground_speed),
    ];

    if let Some(url) = tracking_url(tracking_url_base, &flight.callsign) {
        lines.push(String::new());
        lines.push(format!("Live tracking: {url}"));
    }

    lines.push(String::new());
    lines.push(summary.to_string());
    lines.push(String::new());
    lines.push(format!("Detected at: {detected_at}"));

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
