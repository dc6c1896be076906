//! Synthetic Telemetry Generator
//!
//! Simulates application traffic and user actions for a monitoring lab.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               TELEMETRY SIM                   │
//!                    │                                               │
//!                    │  ┌───────────┐      ┌──────────────────────┐ │
//!                    │  │  event    │─────▶│ sim::traffic loop    │ │
//!                    │  │ generator │      │  → MetricSink        │─┼──▶ Prometheus
//!                    │  └───────────┘      └──────────────────────┘ │    scrape :8000
//!                    │  ┌───────────┐      ┌──────────────────────┐ │
//!                    │  │  event    │─────▶│ sim::actions loop    │ │
//!                    │  │ generator │      │  → LogSink           │─┼──▶ JSON lines
//!                    │  └───────────┘      └──────────────────────┘ │    on stdout
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns         │  │
//!                    │  │  ┌────────┐ ┌────────┐ ┌─────────────┐ │  │
//!                    │  │  │ config │ │ health │ │  lifecycle  │ │  │
//!                    │  │  │        │ │ :8001  │ │ (shutdown)  │ │  │
//!                    │  │  └────────┘ └────────┘ └─────────────┘ │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use telemetry_sim::config::{load_config, SimConfig};
use telemetry_sim::event::EventGenerator;
use telemetry_sim::health;
use telemetry_sim::lifecycle::{signals, Shutdown};
use telemetry_sim::observability::logging;
use telemetry_sim::sim::{ActionSimulator, TrafficSimulator};
use telemetry_sim::sink::metrics::install_recorder;
use telemetry_sim::sink::{JsonLineSink, PrometheusSink};

#[derive(Parser)]
#[command(name = "telemetry-sim")]
#[command(about = "Synthetic telemetry generator for monitoring labs", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Malformed configuration is fatal before any loop starts.
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Invalid configuration: {error}");
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        traffic_enabled = config.traffic.enabled,
        actions_enabled = config.actions.enabled,
        health_enabled = config.health.enabled,
        "telemetry-sim v0.1.0 starting"
    );

    if config.metrics.enabled {
        let addr: SocketAddr = config.metrics.bind_address.parse()?;
        install_recorder(addr)?;
    }

    let shutdown = Shutdown::new();
    let mut tasks: Vec<JoinHandle<()>> = Vec::new();

    if config.health.enabled {
        let listener = TcpListener::bind(&config.health.bind_address).await?;
        let rx = shutdown.subscribe();
        tasks.push(tokio::spawn(async move {
            if let Err(error) = health::serve(listener, rx).await {
                tracing::error!(%error, "Health endpoint failed");
            }
        }));
    }

    if config.traffic.enabled {
        let generator = EventGenerator::new(
            StdRng::from_entropy(),
            config.traffic.clone(),
            config.actions.clone(),
        );
        let simulator = TrafficSimulator::new(generator, PrometheusSink::new(), config.traffic.clone());
        tasks.push(tokio::spawn(simulator.run(shutdown.subscribe())));
    }

    if config.actions.enabled {
        let generator = EventGenerator::new(
            StdRng::from_entropy(),
            config.traffic.clone(),
            config.actions.clone(),
        );
        let sink = JsonLineSink::stdout(&config.observability.logger_name);
        let simulator = ActionSimulator::new(generator, sink, config.actions.clone());
        tasks.push(tokio::spawn(simulator.run(shutdown.subscribe())));
    }

    signals::wait_for_signal().await;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();

    for task in tasks {
        let _ = task.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
