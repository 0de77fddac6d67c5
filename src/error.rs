use crate::geocoding::error::GeocodingError;
use crate::power::error::HistoricalDataError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date/time '{value}', expected YYYY-MM-DDTHH:MM")]
    InvalidDateTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Location '{0}' could not be found")]
    LocationNotFound(String),

    #[error("No historical data for {date} between {start_year} and {end_year}")]
    NoHistoricalData {
        date: NaiveDate,
        start_year: i32,
        end_year: i32,
    },

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error(transparent)]
    HistoricalData(#[from] HistoricalDataError),
}

impl OutlookError {
    /// A short message suitable for showing to an end user.
    ///
    /// # Examples
    ///
    /// ```
    /// use climate_outlook::OutlookError;
    ///
    /// let error = OutlookError::LocationNotFound("Atlantis".to_string());
    /// assert_eq!(error.user_message(), "Could not find that location. Try again.");
    /// ```
    pub fn user_message(&self) -> &'static str {
        match self {
            OutlookError::InvalidInput(_) => "Please enter both location and date/time.",
            OutlookError::InvalidDateTime { .. } => "Invalid date/time format.",
            OutlookError::LocationNotFound(_) => "Could not find that location. Try again.",
            OutlookError::NoHistoricalData { .. } => {
                "Could not get historical weather data. Try again."
            }
            OutlookError::Geocoding(_) | OutlookError::HistoricalData(_) => {
                "An unexpected error occurred."
            }
        }
    }

    /// `true` for failures of the external services rather than of the request.
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            OutlookError::Geocoding(_) | OutlookError::HistoricalData(_)
        )
    }
}
