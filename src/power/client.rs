//! Client for the NASA POWER daily point API.
//!
//! See <https://power.larc.nasa.gov/docs/services/api/temporal/daily/> for the request and
//! response formats.

use crate::power::error::HistoricalDataError;
use crate::types::location::LatLon;
use crate::types::parameter::{date_key, DailyParameters, Parameter};
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::ops::RangeInclusive;
use std::time::Duration;

const POWER_DAILY_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
const POWER_COMMUNITY: &str = "RE";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of raw daily records for one location.
pub trait HistoricalSource {
    /// Fetches every parameter series covering `month`/`day` in each year of `years`.
    ///
    /// The returned series may hold more dates than requested; callers pick the calendar day
    /// they need. An empty year span yields empty parameters.
    fn daily_parameters(
        &self,
        location: LatLon,
        month: u32,
        day: u32,
        years: RangeInclusive<i32>,
    ) -> impl Future<Output = Result<DailyParameters, HistoricalDataError>> + Send;
}

#[derive(Debug, Deserialize)]
struct PowerResponse {
    #[serde(default)]
    header: Option<PowerHeader>,
    #[serde(default)]
    properties: Option<PowerProperties>,
}

#[derive(Debug, Deserialize)]
struct PowerHeader {
    #[serde(default)]
    fill_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    #[serde(default)]
    parameter: Option<DailyParameters>,
}

/// Parses the body of a daily point response.
///
/// Null values are dropped; fill values are kept and recognized later through
/// [`DailyParameters::fill_value`].
pub fn parse_response(body: &str) -> Result<DailyParameters, HistoricalDataError> {
    let response: PowerResponse = serde_json::from_str(body)?;
    let parameters = response
        .properties
        .and_then(|p| p.parameter)
        .ok_or_else(|| {
            HistoricalDataError::MalformedResponse("missing properties.parameter".to_string())
        })?;

    Ok(match response.header.and_then(|h| h.fill_value) {
        Some(fill_value) => parameters.with_fill_value(fill_value),
        None => parameters,
    })
}

/// First and last date of the span on which the calendar day exists.
fn request_span(month: u32, day: u32, years: RangeInclusive<i32>) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = years.filter_map(|year| NaiveDate::from_ymd_opt(year, month, day));
    let start = dates.next()?;
    let end = dates.last().unwrap_or(start);
    Some((start, end))
}

/// Fetches historical daily records from NASA POWER.
#[derive(Debug, Clone)]
pub struct PowerClient {
    client: Client,
    url: String,
}

#[bon]
impl PowerClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.timeout(Duration)`: Optional. Request timeout, defaults to 30 seconds.
    /// * `.url(String)`: Optional. Alternative daily point endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HistoricalDataError::ClientBuild`] if the HTTP client cannot be created.
    #[builder]
    pub fn new(
        timeout: Option<Duration>,
        #[builder(into)] url: Option<String>,
    ) -> Result<Self, HistoricalDataError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(HistoricalDataError::ClientBuild)?;
        Ok(Self {
            client,
            url: url.unwrap_or_else(|| POWER_DAILY_URL.to_string()),
        })
    }

    async fn fetch(
        &self,
        location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailyParameters, HistoricalDataError> {
        let url = self.url.as_str();
        let (start, end) = (date_key(start), date_key(end));
        info!("Fetching NASA POWER data from {} to {}", start, end);

        let query = [
            ("parameters", Parameter::all_codes()),
            ("community", POWER_COMMUNITY.to_string()),
            ("longitude", location.lon().to_string()),
            ("latitude", location.lat().to_string()),
            ("start", start),
            ("end", end),
            ("format", "JSON".to_string()),
        ];
        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| HistoricalDataError::NetworkRequest(url.to_string(), e))?;
        debug!("NASA POWER status: {}", response.status());

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => HistoricalDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    },
                    None => HistoricalDataError::NetworkRequest(url.to_string(), e),
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| HistoricalDataError::NetworkRequest(url.to_string(), e))?;
        let parameters = parse_response(&body)?;
        info!(
            "Received {} daily values from NASA POWER",
            parameters.entry_count()
        );
        Ok(parameters)
    }
}

impl HistoricalSource for PowerClient {
    async fn daily_parameters(
        &self,
        location: LatLon,
        month: u32,
        day: u32,
        years: RangeInclusive<i32>,
    ) -> Result<DailyParameters, HistoricalDataError> {
        match request_span(month, day, years) {
            Some((start, end)) => self.fetch(location, start, end).await,
            None => {
                debug!("No calendar day {:02}-{:02} in requested years", month, day);
                Ok(DailyParameters::default())
            }
        }
    }
}
