//! HTTP adapter for the map and menu server.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SourceError;
use crate::geojson::FeatureCollection;
use crate::geometry::Point;
use crate::menus::Menus;
use crate::traits::AddressResolver;

#[derive(Debug, Clone)]
pub struct WebServerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9898".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WebServerConfig {
    pub fn for_port(port: u16) -> Self {
        Self {
            base_url: format!("http://localhost:{}", port),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebServerClient {
    config: WebServerConfig,
    client: reqwest::blocking::Client,
}

impl WebServerClient {
    pub fn new(config: WebServerConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(%url, "fetching");
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())?;

        Ok(body)
    }

    pub fn menus(&self) -> Result<Menus, SourceError> {
        Ok(Menus::new(self.get_json("menus/menus.json")?))
    }

    pub fn no_fly_zones(&self) -> Result<FeatureCollection, SourceError> {
        self.get_json("buildings/no-fly-zones.geojson")
    }

    pub fn landmarks(&self) -> Result<FeatureCollection, SourceError> {
        self.get_json("buildings/landmarks.geojson")
    }
}

impl AddressResolver for WebServerClient {
    fn resolve(&self, address: &str) -> Result<Point, SourceError> {
        let path = words_path(address)?;
        let details: WordsDetails = self.get_json(&path)?;
        Ok(Point::new(details.coordinates.lng, details.coordinates.lat))
    }
}

/// `words/{first}/{second}/{third}/details.json` for a what3words address.
fn words_path(address: &str) -> Result<String, SourceError> {
    let words: Vec<&str> = address.split('.').collect();
    match words.as_slice() {
        [first, second, third] if words.iter().all(|w| !w.is_empty()) => {
            Ok(format!("words/{}/{}/{}/details.json", first, second, third))
        }
        _ => Err(SourceError::InvalidAddress(address.to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct WordsDetails {
    coordinates: LngLat,
}

#[derive(Debug, Deserialize)]
struct LngLat {
    lng: f64,
    lat: f64,
}
