use crate::geocoding::error::GeocodingError;
use crate::geocoding::fallback::{exact_match, fuzzy_match, normalize};
use crate::types::location::{LatLon, ResolvedLocation};
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_USER_AGENT: &str = concat!("climate_outlook/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Turns a free-text place name into coordinates.
pub trait Geocoder {
    /// Resolves `query`, returning `Ok(None)` when no place matches.
    fn resolve(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<ResolvedLocation>, GeocodingError>> + Send;
}

/// One entry of a Nominatim `format=json` search response.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimPlace {
    fn into_location(self) -> Result<ResolvedLocation, GeocodingError> {
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|source| GeocodingError::InvalidCoordinate {
                    value: value.to_string(),
                    source,
                })
        };
        Ok(ResolvedLocation {
            coordinates: LatLon(parse(&self.lat)?, parse(&self.lon)?),
            display_name: self.display_name,
        })
    }
}

/// Resolves place names with the OpenStreetMap Nominatim search API.
///
/// A few well known cities are answered from a built-in table without a request. When the
/// search times out or finds nothing, the query is matched loosely against the same table.
#[derive(Debug, Clone)]
pub struct NominatimResolver {
    client: Client,
    search_url: String,
}

#[bon]
impl NominatimResolver {
    /// Creates a resolver.
    ///
    /// # Arguments
    ///
    /// * `.user_agent(String)`: Optional. Sent with every request, as Nominatim's usage policy
    ///   requires. Defaults to `climate_outlook/<version>`.
    /// * `.timeout(Duration)`: Optional. Request timeout, defaults to 15 seconds.
    /// * `.search_url(String)`: Optional. Alternative search endpoint, e.g. a self-hosted instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::ClientBuild`] if the HTTP client cannot be created.
    #[builder]
    pub fn new(
        #[builder(into)] user_agent: Option<String>,
        timeout: Option<Duration>,
        #[builder(into)] search_url: Option<String>,
    ) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(GeocodingError::ClientBuild)?;
        Ok(Self {
            client,
            search_url: search_url.unwrap_or_else(|| NOMINATIM_SEARCH_URL.to_string()),
        })
    }

    async fn search(&self, query: &str) -> Result<Option<ResolvedLocation>, GeocodingError> {
        let url = self.search_url.as_str();
        debug!("Searching {} for '{}'", url, query);

        let response = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| request_error(url, e))?;
        let body = response.text().await.map_err(|e| request_error(url, e))?;

        let places: Vec<NominatimPlace> = serde_json::from_str(&body)?;
        places
            .into_iter()
            .next()
            .map(NominatimPlace::into_location)
            .transpose()
    }
}

impl Geocoder for NominatimResolver {
    async fn resolve(&self, query: &str) -> Result<Option<ResolvedLocation>, GeocodingError> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Ok(None);
        }
        if let Some(city) = exact_match(&normalized) {
            info!("Resolved '{}' from built-in city table", query);
            return Ok(Some(city.to_location()));
        }

        match self.search(query).await {
            Ok(Some(location)) => {
                info!("Resolved '{}' to {:?}", query, location.coordinates);
                Ok(Some(location))
            }
            Ok(None) => Ok(fuzzy_match(&normalized).map(|city| city.to_location())),
            Err(GeocodingError::Timeout(url, e)) => {
                warn!("Geocoding request to {} timed out: {}", url, e);
                Ok(fuzzy_match(&normalized).map(|city| city.to_location()))
            }
            Err(e) => Err(e),
        }
    }
}

fn request_error(url: &str, e: reqwest::Error) -> GeocodingError {
    if e.is_timeout() {
        GeocodingError::Timeout(url.to_string(), e)
    } else if let Some(status) = e.status() {
        GeocodingError::HttpStatus {
            url: url.to_string(),
            status,
            source: e,
        }
    } else {
        GeocodingError::NetworkRequest(url.to_string(), e)
    }
}
