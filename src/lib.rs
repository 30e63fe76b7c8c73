pub mod agenda;
pub mod config;
pub mod dates;
pub mod home; // Dashboard
pub mod models;
pub mod store;
pub mod timeline; // Period filter, adherence, day-grouped history

use chrono::Local;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use store::RecordStore;
use timeline::DayGroup;

/// Snapshot printed by the demo binary.
#[derive(Debug, Serialize)]
struct DemoReport {
    home: home::HomeData,
    agenda: Vec<models::Appointment>,
    history: Vec<DayGroup>,
}

/// Demo entry point: seeds the fixture session for today and prints the
/// dashboard, agenda and history for the configured period as JSON.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let today = Local::now().date_naive();
    let period = config::period_from_env();
    let store = RecordStore::with_fixtures(today);

    let timeline = timeline::history_for(&store, period.days(), today);
    if timeline.is_empty() {
        tracing::info!(days = period.days(), "No records in the selected period");
    }

    let report = DemoReport {
        home: home::fetch_home_data(&store, period, today),
        agenda: agenda::sorted_agenda(&store),
        history: timeline.collect(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
    }
}
