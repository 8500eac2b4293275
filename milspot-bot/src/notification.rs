//! Notification dispatch for the selected flight.
//!
//! A notifier gets the finished message plus the flight it describes and
//! reports success or failure. The caller logs failures; nothing retries.

use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};

use milspot_core::FlightRecord;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message. Returns `false` on any failure.
    async fn send(&self, flight: &FlightRecord, message: &str) -> bool;
}

/// JSON body posted to the webhook.
pub fn webhook_payload(flight: &FlightRecord, message: &str) -> serde_json::Value {
    serde_json::json!({
        "text": message,
        "callsign": flight.callsign,
        "aircraft_code": flight.aircraft_code,
        "registration": flight.registration,
        "altitude": flight.altitude,
        "ground_speed": flight.ground_speed,
    })
}

/// Posts the message to a webhook URL via HTTP POST.
#[derive(Clone)]
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("[webhook] client setup failed ({e}), sending without a timeout");
                reqwest::Client::new()
            });
        WebhookNotifier {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, flight: &FlightRecord, message: &str) -> bool {
        let payload = webhook_payload(flight, message);
        match self.client.post(&self.url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("[webhook] delivered {} ({})", flight.label(), resp.status());
                true
            }
            Ok(resp) => {
                error!("[webhook] POST rejected: {}", resp.status());
                false
            }
            Err(e) => {
                error!("[webhook] POST failed: {e}");
                false
            }
        }
    }
}

/// Prints the message to stdout. Used for dry runs and when no webhook is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, _flight: &FlightRecord, message: &str) -> bool {
        println!("{message}");
        true
    }
}
