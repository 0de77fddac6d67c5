//! The six measured quantities and the raw per-parameter series a historical data source returns.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Date key format used by the daily series, e.g. `20230715`.
pub(crate) const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// A measured daily quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// Average air temperature at 2 m (°C).
    TempAvg,
    /// Maximum air temperature at 2 m (°C).
    TempMax,
    /// Minimum air temperature at 2 m (°C).
    TempMin,
    /// Average wind speed at 10 m (m/s).
    WindAvg,
    /// Maximum wind speed at 10 m (m/s).
    WindMax,
    /// Bias-corrected total precipitation (mm/day).
    Precipitation,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::TempAvg,
        Parameter::TempMax,
        Parameter::TempMin,
        Parameter::WindAvg,
        Parameter::WindMax,
        Parameter::Precipitation,
    ];

    /// The NASA POWER parameter code for this quantity.
    pub fn code(&self) -> &'static str {
        match self {
            Parameter::TempAvg => "T2M",
            Parameter::TempMax => "T2M_MAX",
            Parameter::TempMin => "T2M_MIN",
            Parameter::WindAvg => "WS10M",
            Parameter::WindMax => "WS10M_MAX",
            Parameter::Precipitation => "PRECTOTCORR",
        }
    }

    /// Comma separated list of every code, as expected by the `parameters` query argument.
    pub(crate) fn all_codes() -> String {
        Parameter::ALL
            .iter()
            .map(Parameter::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The `properties.parameter` object of a NASA POWER daily point response.
type RawSeries = HashMap<String, BTreeMap<String, Option<f64>>>;

/// Raw daily series keyed by parameter code, then by `YYYYMMDD` date key.
///
/// Deserializes from the `properties.parameter` object of a NASA POWER daily point response;
/// `null` entries are dropped. The fill value lives in the response header and is attached with
/// [`DailyParameters::with_fill_value`]. Values equal to the fill value, and non-finite values,
/// are treated as missing by [`DailyParameters::value`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawSeries")]
pub struct DailyParameters {
    series: HashMap<String, BTreeMap<String, f64>>,
    fill_value: Option<f64>,
}

impl From<RawSeries> for DailyParameters {
    fn from(raw: RawSeries) -> Self {
        let series = raw
            .into_iter()
            .map(|(code, values)| {
                let values = values
                    .into_iter()
                    .filter_map(|(date, value)| value.map(|v| (date, v)))
                    .collect();
                (code, values)
            })
            .collect();
        Self {
            series,
            fill_value: None,
        }
    }
}

impl DailyParameters {
    pub fn new(series: HashMap<String, BTreeMap<String, f64>>, fill_value: Option<f64>) -> Self {
        Self { series, fill_value }
    }

    /// Adds a single value, returning the updated series.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use climate_outlook::{DailyParameters, Parameter};
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 7, 15).unwrap();
    /// let params = DailyParameters::default().with_value(Parameter::TempAvg, date, 21.4);
    /// assert_eq!(params.value(Parameter::TempAvg, date), Some(21.4));
    /// assert_eq!(params.value(Parameter::WindMax, date), None);
    /// ```
    pub fn with_value(mut self, parameter: Parameter, date: NaiveDate, value: f64) -> Self {
        self.series
            .entry(parameter.code().to_string())
            .or_default()
            .insert(date_key(date), value);
        self
    }

    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    pub fn fill_value(&self) -> Option<f64> {
        self.fill_value
    }

    /// The valid value of `parameter` on `date`, if the source reported one.
    pub fn value(&self, parameter: Parameter, date: NaiveDate) -> Option<f64> {
        let value = *self.series.get(parameter.code())?.get(&date_key(date))?;
        if !value.is_finite() || self.fill_value == Some(value) {
            return None;
        }
        Some(value)
    }

    /// Total number of raw entries across every series.
    pub fn entry_count(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
