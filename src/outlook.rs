//! This module provides the main entry point of the crate. [`ClimateOutlook`] resolves a place
//! name, fetches the same calendar day from past years, and analyses it into an [`Outlook`].

use crate::analysis::analyze_with_rules;
use crate::analysis::classifier::ConditionRules;
use crate::error::OutlookError;
use crate::geocoding::resolver::{Geocoder, NominatimResolver};
use crate::power::client::{HistoricalSource, PowerClient};
use crate::types::analysis_result::AnalysisResult;
use crate::types::location::ResolvedLocation;
use crate::types::observation::ObservationSet;
use bon::bon;
use chrono::{Datelike, NaiveDateTime, Utc};
use log::{error, info, warn};
use serde::Serialize;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Number of past years analysed when no window size is given.
pub const DEFAULT_WINDOW_YEARS: u32 = 10;

/// Largest window accepted by [`ClimateOutlook::predict`].
pub const MAX_WINDOW_YEARS: u32 = 100;

/// Format of the date/time accepted by [`parse_target_datetime`], as sent by an HTML
/// `datetime-local` input.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a target date/time such as `2026-07-15T14:30`.
///
/// # Errors
///
/// Returns [`OutlookError::InvalidDateTime`] if `value` is not in [`DATETIME_FORMAT`].
pub fn parse_target_datetime(value: &str) -> Result<NaiveDateTime, OutlookError> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT).map_err(|source| {
        OutlookError::InvalidDateTime {
            value: value.to_string(),
            source,
        }
    })
}

/// An inclusive span of past years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl HistoricalWindow {
    /// The `years` years before `reference_year`, excluding `reference_year` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use climate_outlook::HistoricalWindow;
    ///
    /// let window = HistoricalWindow::ending_before(2026, 10);
    /// assert_eq!(window.years(), 2016..=2025);
    /// assert!(HistoricalWindow::ending_before(2026, 0).is_empty());
    /// ```
    pub fn ending_before(reference_year: i32, years: u32) -> Self {
        let years = i32::try_from(years).unwrap_or(i32::MAX);
        Self {
            start_year: reference_year.saturating_sub(years),
            end_year: reference_year.saturating_sub(1),
        }
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    pub fn is_empty(&self) -> bool {
        self.start_year > self.end_year
    }
}

/// The analysed outlook for one place and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlook {
    pub location: ResolvedLocation,
    pub target: NaiveDateTime,
    pub window: HistoricalWindow,
    pub analysis: AnalysisResult,
    pub advisory: String,
}

impl Outlook {
    /// The target date/time in long form, e.g. `July 15, 2026 at 02:30 PM`.
    pub fn formatted_target(&self) -> String {
        self.target.format("%B %d, %Y at %I:%M %p").to_string()
    }
}

/// The main client of the crate.
///
/// It holds a [`Geocoder`] to resolve place names, a [`HistoricalSource`] for past daily
/// records, and the [`ConditionRules`] used to classify them. The defaults are
/// [`NominatimResolver`] and [`PowerClient`]; other collaborators can be plugged in with
/// [`ClimateOutlook::with_collaborators`].
///
/// # Examples
///
/// ```no_run
/// # use climate_outlook::{ClimateOutlook, OutlookError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), OutlookError> {
/// let client = ClimateOutlook::builder().build()?;
/// let outlook = client.predict_from_form("Paris", "2026-07-15T14:30").await?;
/// println!("{}: {}", outlook.analysis.main_prediction, outlook.advisory);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimateOutlook<G = NominatimResolver, S = PowerClient> {
    geocoder: G,
    source: S,
    rules: ConditionRules,
}

#[bon]
impl ClimateOutlook<NominatimResolver, PowerClient> {
    /// Creates a client backed by Nominatim and NASA POWER.
    ///
    /// # Arguments
    ///
    /// * `.user_agent(String)`: Optional. User agent for geocoding requests.
    /// * `.geocoding_timeout(Duration)`: Optional. Defaults to 15 seconds.
    /// * `.data_timeout(Duration)`: Optional. Defaults to 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`OutlookError::Geocoding`] or [`OutlookError::HistoricalData`] if an HTTP
    /// client cannot be created.
    #[builder]
    pub fn new(
        #[builder(into)] user_agent: Option<String>,
        geocoding_timeout: Option<Duration>,
        data_timeout: Option<Duration>,
    ) -> Result<Self, OutlookError> {
        let geocoder = NominatimResolver::builder()
            .maybe_user_agent(user_agent)
            .maybe_timeout(geocoding_timeout)
            .build()?;
        let source = PowerClient::builder().maybe_timeout(data_timeout).build()?;
        Ok(Self::with_collaborators(geocoder, source))
    }
}

#[bon]
impl<G: Geocoder, S: HistoricalSource> ClimateOutlook<G, S> {
    pub fn with_collaborators(geocoder: G, source: S) -> Self {
        Self {
            geocoder,
            source,
            rules: ConditionRules::default(),
        }
    }

    /// Replaces the condition rules used for classification.
    pub fn with_rules(mut self, rules: ConditionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Estimates the weather at `location` on the calendar day of `datetime`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(&str)`: **Required.** Free-text place name.
    /// * `.datetime(NaiveDateTime)`: **Required.** The target date; only month and day are used
    ///   to select historical records.
    /// * `.years(u32)`: Optional. Number of past years to analyse, at most
    ///   [`MAX_WINDOW_YEARS`]. Defaults to [`DEFAULT_WINDOW_YEARS`].
    /// * `.reference_year(i32)`: Optional. The window ends the year before this one. Defaults to
    ///   the current UTC year.
    ///
    /// # Errors
    ///
    /// * [`OutlookError::InvalidInput`] if `location` is blank or `years` exceeds
    ///   [`MAX_WINDOW_YEARS`].
    /// * [`OutlookError::LocationNotFound`] if the geocoder finds no match.
    /// * [`OutlookError::NoHistoricalData`] if no past year has an average temperature.
    /// * [`OutlookError::Geocoding`] / [`OutlookError::HistoricalData`] if a service fails.
    #[builder]
    pub async fn predict(
        &self,
        location: &str,
        datetime: NaiveDateTime,
        years: Option<u32>,
        reference_year: Option<i32>,
    ) -> Result<Outlook, OutlookError> {
        let query = location.trim();
        if query.is_empty() {
            return Err(OutlookError::InvalidInput("location is empty".to_string()));
        }
        let years = years.unwrap_or(DEFAULT_WINDOW_YEARS);
        if years > MAX_WINDOW_YEARS {
            return Err(OutlookError::InvalidInput(format!(
                "window of {years} years exceeds the maximum of {MAX_WINDOW_YEARS}"
            )));
        }
        let window = HistoricalWindow::ending_before(
            reference_year.unwrap_or_else(|| Utc::now().year()),
            years,
        );

        let location = self
            .geocoder
            .resolve(query)
            .await?
            .ok_or_else(|| OutlookError::LocationNotFound(query.to_string()))?;

        let date = datetime.date();
        let parameters = self
            .source
            .daily_parameters(location.coordinates, date.month(), date.day(), window.years())
            .await?;
        let set = ObservationSet::from_daily_parameters(
            &parameters,
            date.month(),
            date.day(),
            window.years(),
        );
        info!(
            "Got data for {} of {}..={} for {}",
            set.len(),
            window.start_year,
            window.end_year,
            location.display_name
        );

        let analysis =
            analyze_with_rules(&set, &self.rules).ok_or(OutlookError::NoHistoricalData {
                date,
                start_year: window.start_year,
                end_year: window.end_year,
            })?;
        let advisory = analysis.advisory();

        Ok(Outlook {
            location,
            target: datetime,
            window,
            analysis,
            advisory,
        })
    }

    /// Validates raw form input and runs [`ClimateOutlook::predict`] with default settings.
    ///
    /// Failures are logged here; unexpected service failures at error level.
    ///
    /// # Errors
    ///
    /// Everything [`ClimateOutlook::predict`] returns, plus [`OutlookError::InvalidInput`] when
    /// either field is blank and [`OutlookError::InvalidDateTime`] when `datetime` does not
    /// parse.
    pub async fn predict_from_form(
        &self,
        location: &str,
        datetime: &str,
    ) -> Result<Outlook, OutlookError> {
        let result = self.predict_from_form_inner(location, datetime).await;
        match &result {
            Err(e) if e.is_unexpected() => error!("Outlook for '{}' failed: {}", location, e),
            Err(e) => warn!("Outlook for '{}' rejected: {}", location, e),
            Ok(_) => {}
        }
        result
    }

    async fn predict_from_form_inner(
        &self,
        location: &str,
        datetime: &str,
    ) -> Result<Outlook, OutlookError> {
        if location.trim().is_empty() || datetime.trim().is_empty() {
            return Err(OutlookError::InvalidInput(
                "both location and date/time are required".to_string(),
            ));
        }
        let target = parse_target_datetime(datetime)?;
        self.predict()
            .location(location)
            .datetime(target)
            .call()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::error::GeocodingError;
    use crate::power::error::HistoricalDataError;
    use crate::types::condition::Condition;
    use crate::types::location::LatLon;
    use crate::types::parameter::{DailyParameters, Parameter};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct FixedGeocoder(Option<ResolvedLocation>);

    impl Geocoder for FixedGeocoder {
        async fn resolve(&self, _query: &str) -> Result<Option<ResolvedLocation>, GeocodingError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct FixedSource {
        parameters: DailyParameters,
        requested: Mutex<Vec<(u32, u32, RangeInclusive<i32>)>>,
    }

    impl HistoricalSource for FixedSource {
        async fn daily_parameters(
            &self,
            _location: LatLon,
            month: u32,
            day: u32,
            years: RangeInclusive<i32>,
        ) -> Result<DailyParameters, HistoricalDataError> {
            self.requested.lock().unwrap().push((month, day, years));
            Ok(self.parameters.clone())
        }
    }

    struct FailingSource;

    impl HistoricalSource for FailingSource {
        async fn daily_parameters(
            &self,
            _location: LatLon,
            _month: u32,
            _day: u32,
            _years: RangeInclusive<i32>,
        ) -> Result<DailyParameters, HistoricalDataError> {
            Err(HistoricalDataError::MalformedResponse(
                "missing properties.parameter".to_string(),
            ))
        }
    }

    fn paris() -> FixedGeocoder {
        FixedGeocoder(Some(ResolvedLocation {
            coordinates: LatLon(48.8566, 2.3522),
            display_name: "Paris, France".to_string(),
        }))
    }

    fn july_15(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 7, 15).unwrap()
    }

    fn summer_parameters() -> DailyParameters {
        let years = [
            (2023, 20.0, 25.0, 15.0),
            (2024, 22.0, 26.0, 16.0),
            (2025, 24.0, 27.0, 17.0),
        ];
        years
            .into_iter()
            .fold(DailyParameters::default(), |params, (year, avg, max, min)| {
                params
                    .with_value(Parameter::TempAvg, july_15(year), avg)
                    .with_value(Parameter::TempMax, july_15(year), max)
                    .with_value(Parameter::TempMin, july_15(year), min)
                    .with_value(Parameter::Precipitation, july_15(year), 1.0)
            })
            .with_fill_value(-999.0)
    }

    fn target() -> NaiveDateTime {
        parse_target_datetime("2026-07-15T14:30").unwrap()
    }

    #[test]
    fn test_parse_target_datetime() {
        let parsed = parse_target_datetime(" 2026-07-15T14:30 ").unwrap();
        assert_eq!(parsed.date(), july_15(2026));
        assert!(matches!(
            parse_target_datetime("15/07/2026 14:30"),
            Err(OutlookError::InvalidDateTime { .. })
        ));
        assert!(parse_target_datetime("2026-02-30T10:00").is_err());
    }

    #[test]
    fn test_historical_window() {
        let window = HistoricalWindow::ending_before(2026, 10);
        assert_eq!(window.start_year, 2016);
        assert_eq!(window.end_year, 2025);
        assert!(!window.is_empty());
        assert_eq!(HistoricalWindow::ending_before(2026, 1).years(), 2025..=2025);

        let window = HistoricalWindow::ending_before(i32::MIN, 10);
        assert_eq!(window.end_year, i32::MIN);
        assert_eq!(window.start_year, i32::MIN);
    }

    #[tokio::test]
    async fn test_predict_rejects_oversized_window() {
        let client = ClimateOutlook::with_collaborators(paris(), FixedSource::default());
        let result = client
            .predict()
            .location("Paris")
            .datetime(target())
            .years(u32::MAX)
            .reference_year(2026)
            .call()
            .await;
        assert!(matches!(result, Err(OutlookError::InvalidInput(_))));
        assert!(client.source.requested.lock().unwrap().is_empty());

        let outlook = client
            .predict()
            .location("Paris")
            .datetime(target())
            .years(MAX_WINDOW_YEARS)
            .reference_year(2026)
            .call()
            .await;
        assert!(matches!(
            outlook,
            Err(OutlookError::NoHistoricalData {
                start_year: 1926,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_predict_pleasant_day() -> Result<(), OutlookError> {
        let source = FixedSource {
            parameters: summer_parameters(),
            ..Default::default()
        };
        let client = ClimateOutlook::with_collaborators(paris(), source);

        let outlook = client
            .predict()
            .location("Paris")
            .datetime(target())
            .reference_year(2026)
            .call()
            .await?;

        assert_eq!(outlook.location.display_name, "Paris, France");
        assert_eq!(outlook.window.years(), 2016..=2025);
        assert_eq!(outlook.analysis.main_prediction, Condition::Pleasant);
        assert_eq!(outlook.analysis.years_used, 3);
        assert_eq!(
            outlook.advisory,
            "Perfect day (15.0°C - 27.0°C). Ideal for outdoor plans!"
        );
        assert_eq!(outlook.formatted_target(), "July 15, 2026 at 02:30 PM");
        assert_eq!(
            client.source.requested.lock().unwrap().as_slice(),
            &[(7, 15, 2016..=2025)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_with_custom_window() -> Result<(), OutlookError> {
        let source = FixedSource {
            parameters: summer_parameters(),
            ..Default::default()
        };
        let client = ClimateOutlook::with_collaborators(paris(), source);

        let outlook = client
            .predict()
            .location("Paris")
            .datetime(target())
            .years(2)
            .reference_year(2026)
            .call()
            .await?;
        assert_eq!(outlook.window.years(), 2024..=2025);
        assert_eq!(outlook.analysis.years_used, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_with_custom_rules() -> Result<(), OutlookError> {
        let source = FixedSource {
            parameters: summer_parameters(),
            ..Default::default()
        };
        let client = ClimateOutlook::with_collaborators(paris(), source)
            .with_rules(ConditionRules::new(vec![], Condition::Windy));

        let outlook = client
            .predict()
            .location("Paris")
            .datetime(target())
            .reference_year(2026)
            .call()
            .await?;
        assert_eq!(outlook.analysis.main_prediction, Condition::Windy);
        Ok(())
    }

    #[tokio::test]
    async fn test_location_not_found() {
        let client =
            ClimateOutlook::with_collaborators(FixedGeocoder(None), FixedSource::default());
        let result = client.predict_from_form("Atlantis", "2026-07-15T14:30").await;
        assert!(matches!(result, Err(OutlookError::LocationNotFound(name)) if name == "Atlantis"));
        assert!(client.source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_historical_data() {
        let client = ClimateOutlook::with_collaborators(paris(), FixedSource::default());
        let result = client
            .predict()
            .location("Paris")
            .datetime(target())
            .reference_year(2026)
            .call()
            .await;
        assert!(matches!(
            result,
            Err(OutlookError::NoHistoricalData {
                start_year: 2016,
                end_year: 2025,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_form_validation() {
        let client = ClimateOutlook::with_collaborators(paris(), FixedSource::default());

        let result = client.predict_from_form("  ", "2026-07-15T14:30").await;
        assert!(matches!(result, Err(OutlookError::InvalidInput(_))));

        let result = client.predict_from_form("Paris", "").await;
        assert!(matches!(result, Err(OutlookError::InvalidInput(_))));

        let result = client.predict_from_form("Paris", "tomorrow").await;
        assert!(matches!(result, Err(OutlookError::InvalidDateTime { .. })));

        assert!(client.source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_source_failure_is_unexpected() {
        let client = ClimateOutlook::with_collaborators(paris(), FailingSource);
        let error = client
            .predict_from_form("Paris", "2026-07-15T14:30")
            .await
            .unwrap_err();
        assert!(error.is_unexpected());
        assert_eq!(error.user_message(), "An unexpected error occurred.");
    }
}
