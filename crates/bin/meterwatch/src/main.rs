//! # meterwatch: terminal meter monitor
//!
//! Composition root that wires the HTTP adapter into the application services.
//!
//! ## Responsibilities
//! - Parse the command line and load configuration (file, env vars, flags)
//! - Install the `tracing` subscriber
//! - Construct the `reqwest` meter API adapter and the application services
//! - `watch`: run the power and report pollers on a single-threaded
//!   `LocalSet` until Ctrl-C
//! - `relay`, `check`, `reading`: one-shot commands through the same services
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

use std::error::Error;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use meterdash_adapter_http_reqwest::HttpMeterApi;
use meterdash_app::services::meter_lookup::MeterLookup;
use meterdash_app::services::power_monitor::PowerMonitor;
use meterdash_app::services::reading_service::ReadingService;
use meterdash_app::services::relay_controller::{RelayController, RelayOutcome};
use meterdash_app::services::report_monitor::ReportMonitor;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::relay::RelayState;
use meterdash_domain::time::now;
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod notifier;
mod watch;

use config::Config;
use display::TerminalDisplay;
use notifier::LogNotifier;

#[derive(Parser, Debug)]
#[command(name = "meterwatch")]
#[command(about = "Terminal monitor for a prepaid electricity meter")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "meterwatch.toml")]
    config: PathBuf,

    /// Meter number (overrides config and METERWATCH_METER)
    #[arg(short, long)]
    meter: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Poll power and report until interrupted (default)
    Watch,
    /// Switch the meter's relay on or off
    Relay {
        /// Target state: `on` or `off`
        state: RelayState,
    },
    /// Check whether a meter number belongs to a registered user
    Check {
        /// Meter number to look up
        meter: String,
    },
    /// Print the latest sensor reading
    Reading,
}

type BoxError = Box<dyn Error>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    let config = Config::load(&args.config, args.meter)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let api = HttpMeterApi::new(&config.backend.base_url)?;

    match args.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(api, config.meter_number()?, &config).await,
        Command::Relay { state } => relay(api, config.meter_number()?, state).await,
        Command::Check { meter } => {
            check(api, &meter).await;
            Ok(())
        }
        Command::Reading => {
            reading(api, config.meter_number()?).await;
            Ok(())
        }
    }
}

async fn watch(api: HttpMeterApi, meter: MeterNumber, config: &Config) -> Result<(), BoxError> {
    tracing::info!(%meter, backend = %api.base_url(), "watching meter");

    let power = Rc::new(PowerMonitor::new(api.clone(), LogNotifier, meter.clone()));
    let report = Rc::new(ReportMonitor::new(api, meter));
    let display = Rc::new(TerminalDisplay::default());
    let power_interval = config.power_interval();
    let report_interval = config.report_interval();

    LocalSet::new()
        .run_until(async move {
            tokio::select! {
                () = watch::poll_power(power, Rc::clone(&display), power_interval) => {}
                () = watch::poll_reports(report, display, report_interval) => {}
                result = tokio::signal::ctrl_c() => {
                    result?;
                    tracing::info!("shutting down");
                }
            }
            Ok::<(), BoxError>(())
        })
        .await
}

async fn relay(api: HttpMeterApi, meter: MeterNumber, state: RelayState) -> Result<(), BoxError> {
    let monitor = PowerMonitor::new(api.clone(), LogNotifier, meter.clone());
    // A failed read leaves the power unknown, which the controller rejects.
    monitor.refresh(now()).await.ok();

    let controller = RelayController::new(api, LogNotifier, meter);
    match controller.send(state, monitor.last_power()).await {
        RelayOutcome::Applied(message) => {
            println!("{message}");
            Ok(())
        }
        outcome => Err(outcome.notification().text.into()),
    }
}

async fn check(api: HttpMeterApi, input: &str) {
    let feedback = MeterLookup::new(api).check(input).await;
    println!("{}", feedback.text());
}

async fn reading(api: HttpMeterApi, meter: MeterNumber) {
    let outcome = ReadingService::new(api, meter).latest().await;
    println!("{}", outcome.text());
}
