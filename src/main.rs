//! Reads a JSON array of building coordinates, resolves a street address for
//! each with the Google Maps Geocoding API, and writes the augmented records
//! to a new JSON file.

use log::error;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = gmaps_addresses::run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}
