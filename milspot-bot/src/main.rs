//! milspot: scan a flight feed, pick the most interesting military flight,
//! and send a notification explaining why.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use log::{error, info, warn};

use milspot_core::config::{self, Config};
use milspot_core::feed::parse_feed;
use milspot_core::{FlightRecord, InterestTier, PatternCatalog, Scorer};

mod notification;
mod scan;

use notification::{ConsoleNotifier, Notifier, WebhookNotifier};

#[derive(Parser)]
#[command(
    name = "milspot",
    version,
    about = "Military flight spotter and notifier"
)]
struct Cli {
    /// Config file (default: ~/.milspot/config.yaml)
    #[arg(long, global = true, env = "MILSPOT_CONFIG")]
    config: Option<PathBuf>,

    /// Pattern catalog YAML replacing the built-in tables
    #[arg(long, global = true, env = "MILSPOT_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scan cycle over a feed snapshot and notify on the best flight
    Scan {
        /// Feed JSON file ("-" for stdin)
        file: PathBuf,

        /// Webhook URL to POST the notification to
        #[arg(long, env = "MILSPOT_WEBHOOK")]
        webhook: Option<String>,

        /// Print the message instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List every military flight in a feed snapshot with its score
    Rank {
        /// Feed JSON file ("-" for stdin)
        file: PathBuf,

        /// Show at most this many rows, highest score first
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the built-in pattern catalog as YAML
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::config_file);
    let mut config = config::load_config(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if let Some(path) = cli.catalog.clone() {
        config.catalog = Some(path);
    }

    match cli.command {
        Commands::Scan {
            file,
            webhook,
            dry_run,
        } => cmd_scan(&config, &file, webhook, dry_run).await,
        Commands::Rank { file, limit } => cmd_rank(&config, &file, limit),
        Commands::Catalog => cmd_catalog(),
    }
}

fn load_catalog(config: &Config) -> anyhow::Result<PatternCatalog> {
    let catalog = config.load_catalog().with_context(|| match &config.catalog {
        Some(p) => format!("loading catalog {}", p.display()),
        None => "loading built-in catalog".to_string(),
    })?;
    Ok(catalog)
}

fn read_flights(file: &Path) -> anyhow::Result<Vec<FlightRecord>> {
    let text = if file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading feed from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("reading feed {}", file.display()))?
    };
    let flights =
        parse_feed(&text).with_context(|| format!("decoding feed {}", file.display()))?;
    Ok(flights)
}

async fn cmd_scan(
    config: &Config,
    file: &Path,
    webhook: Option<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let flights = read_flights(file)?;
    info!("scanning {} flights from {}", flights.len(), file.display());

    let detected_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let report = scan::run_cycle(&catalog, &flights, &config.tracking_url_base, &detected_at);

    let Some(selection) = report.selection else {
        info!(
            "no military flights found ({} flights scanned)",
            report.total
        );
        return Ok(());
    };

    let webhook = webhook.or_else(|| config.notifier.webhook.clone());
    let notifier: Box<dyn Notifier> = match webhook {
        Some(url) if !dry_run => Box::new(WebhookNotifier::new(
            &url,
            Duration::from_secs(config.notifier.timeout_secs),
        )),
        Some(_) => Box::new(ConsoleNotifier),
        None => {
            if !dry_run {
                warn!("no webhook configured, printing notification instead");
            }
            Box::new(ConsoleNotifier)
        }
    };

    if notifier.send(selection.flight, &selection.message).await {
        info!(
            "notification sent for {} (score {}, {} of {} flights military)",
            selection.flight.label(),
            selection.score,
            report.candidates,
            report.total
        );
    } else {
        error!(
            "failed to send notification for {}",
            selection.flight.label()
        );
    }

    Ok(())
}

fn cmd_rank(config: &Config, file: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let flights = read_flights(file)?;
    let scorer = Scorer::new(&catalog);

    let mut rows: Vec<(usize, &FlightRecord, milspot_core::ScoreBreakdown)> = flights
        .iter()
        .enumerate()
        .filter_map(|(idx, f)| scorer.breakdown(f).map(|b| (idx, f, b)))
        .collect();

    println!();
    println!(
        "{} military flights out of {} total",
        rows.len(),
        flights.len()
    );

    if rows.is_empty() {
        return Ok(());
    }

    // Highest first; input order breaks ties, matching candidate selection
    rows.sort_by(|a, b| b.2.total().cmp(&a.2.total()).then(a.0.cmp(&b.0)));
    if let Some(n) = limit {
        rows.truncate(n);
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Callsign", "Type", "Reg", "Alt (ft)", "Speed", "Squawk", "Signal", "Category", "Score",
        "Tier",
    ]);

    for (_, f, b) in &rows {
        table.add_row(vec![
            Cell::new(dash(&f.callsign)),
            Cell::new(dash(&f.aircraft_code)),
            Cell::new(dash(&f.registration)),
            Cell::new(f.altitude),
            Cell::new(f.ground_speed),
            Cell::new(dash(&f.squawk)),
            Cell::new(b.signal.as_str()),
            Cell::new(b.category.map(|c| c.as_str()).unwrap_or("-")),
            Cell::new(b.total()),
            Cell::new(InterestTier::from_score(b.total()).as_str()),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn cmd_catalog() -> anyhow::Result<()> {
    let yaml = PatternCatalog::builtin()
        .to_yaml()
        .context("serializing catalog")?;
    print!("{yaml}");
    Ok(())
}

fn dash(field: &str) -> &str {
    if field.is_empty() {
        "-"
    } else {
        field
    }
}
