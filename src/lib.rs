use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

mod config;
mod geocode;
mod records;

pub use config::Config;
pub use geocode::{Geocode, GoogleGeocoder};
pub use records::Building;

/// Resolve a street address for each building coordinate in a JSON file.
///
/// Expects the `GOOGLE_MAPS_API_KEY` environment variable, which may be
/// provided through a `.env` file in the working directory.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Input filename, a JSON array of building records
    #[arg(short, long, value_name = "FILE", default_value = "tes.json")]
    input: PathBuf,

    /// Output filename
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "buildings_with_addresses.json"
    )]
    output: PathBuf,
}

/// Run the command-line interface.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let geocoder = GoogleGeocoder::new(config.api_key)?;

    let mut buildings = records::load(&cli.input)?;
    resolve_addresses(&geocoder, &mut buildings).await;
    records::save(&cli.output, &buildings)?;

    info!(
        "Successfully processed all coordinates and saved results to {}",
        cli.output.display()
    );
    Ok(())
}

/// Look up an address for each building in turn, one request at a time.
///
/// A failed lookup is logged and skipped; the building keeps its place in
/// the list with no address set.
pub async fn resolve_addresses<G: Geocode>(geocoder: &G, buildings: &mut [Building]) {
    for building in buildings.iter_mut() {
        match geocoder
            .reverse_geocode(building.latitude, building.longitude)
            .await
        {
            Ok(address) => {
                info!("Building {}: {}", building.building_id, address);
                building.address = Some(address);
            }
            Err(e) => {
                warn!(
                    "Failed to get address for building {}: {e:#}",
                    building.building_id
                );
            }
        }
    }
}
