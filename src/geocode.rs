use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A reverse-geocoding lookup: coordinates in, formatted address out.
#[async_trait]
pub trait Geocode {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String>;
}

/// Client for the Google Maps Geocoding API.
pub struct GoogleGeocoder {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(GoogleGeocoder { http, api_key })
    }
}

#[async_trait]
impl Geocode for GoogleGeocoder {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<String> {
        let response = self
            .http
            .get(GEOCODE_URL)
            .query(&[
                ("latlng", format!("{lat},{lng}")),
                ("language", "en".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<GeocodeResponse>()
            .await?;

        first_address(response, lat, lng)
    }
}

/// Pick the first formatted address out of a geocoding response, treating a
/// non-OK status as a service-level error.
fn first_address(response: GeocodeResponse, lat: f64, lng: f64) -> Result<String> {
    match response.status.as_str() {
        // ZERO_RESULTS is a well-formed response with an empty result list,
        // handled below.
        "OK" | "ZERO_RESULTS" => {}
        status => match response.error_message {
            Some(message) => bail!("geocoding request failed with status {status}: {message}"),
            None => bail!("geocoding request failed with status {status}"),
        },
    }

    match response.results.into_iter().next() {
        Some(result) => Ok(result.formatted_address),
        None => bail!("no address found for coordinates: {lat}, {lng}"),
    }
}
