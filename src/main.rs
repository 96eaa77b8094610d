use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{self, EnvFilter};

use hsl_trip::{DigitransitConfig, GeocodingClient, PlannerClient, trip};

const AFTER_HELP: &str = "\
Example:
    hsl-trip \"Ratapihantie 13\" \"Suomenlinna\"

    The Digitransit subscription key is read from DIGITRANSIT_API_KEY.
    Set RUST_LOG=hsl_trip=debug to see the API traffic.";

#[derive(Parser)]
#[command(name = "hsl-trip")]
#[command(about = "Plan a public transport trip in the Helsinki region", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Where the trip starts, an address or a place name
    origin: String,

    /// Where the trip ends
    destination: String,

    #[arg(long, env = "DIGITRANSIT_API_KEY", hide = true, default_value = "")]
    api_key: String,

    #[arg(long, env = "DIGITRANSIT_GEOCODING_URL", hide = true)]
    geocoding_url: Option<String>,

    #[arg(long, env = "DIGITRANSIT_ROUTING_URL", hide = true)]
    routing_url: Option<String>,
}

impl Cli {
    fn config(&self) -> DigitransitConfig {
        let mut config = DigitransitConfig::from_api_key(self.api_key.clone());
        if let Some(url) = &self.geocoding_url {
            config.geocoding_url = url.clone();
        }
        if let Some(url) = &self.routing_url {
            config.routing_url = url.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    if config.api_key.is_empty() {
        tracing::warn!("DIGITRANSIT_API_KEY is not set, requests will likely be rejected");
    }

    let geocoder = GeocodingClient::new(&config)?;
    let planner = PlannerClient::new(&config)?;

    // stderr stays unlocked, the tracing subscriber writes there too
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    trip::run(
        &geocoder,
        &planner,
        &cli.origin,
        &cli.destination,
        config.itinerary_count,
        &mut out,
        &mut err,
        &chrono::Local,
    )
    .await
    .with_context(|| format!("failed to plan {:?} -> {:?}", cli.origin, cli.destination))?;

    Ok(())
}
