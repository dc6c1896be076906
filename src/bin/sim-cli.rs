use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "sim-cli")]
#[command(about = "Inspection CLI for the telemetry simulator", long_about = None)]
struct Cli {
    /// Base URL of the health endpoint.
    #[arg(long, default_value = "http://localhost:8001")]
    health_url: String,

    /// Base URL of the metrics scrape endpoint.
    #[arg(long, default_value = "http://localhost:8000")]
    metrics_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check simulator liveness
    Health,
    /// Check simulator readiness
    Ready,
    /// Dump current metric values
    Metrics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/health", cli.health_url))
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Ready => {
            let res = client
                .get(format!("{}/ready", cli.health_url))
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Metrics => {
            let res = client
                .get(format!("{}/metrics", cli.metrics_url))
                .send()
                .await?;
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await?;
    println!("Status: {status}");
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
