//! Per-year daily observations and the set the analysis engine consumes.

use crate::types::parameter::{DailyParameters, Parameter};
use bon::Builder;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::ops::RangeInclusive;

/// One calendar-day record for one past year.
///
/// Every measurement is optional. A present value is always finite.
///
/// # Examples
///
/// ```
/// use climate_outlook::YearlyObservation;
///
/// let observation = YearlyObservation::builder()
///     .year(2021)
///     .temp_avg(22.0)
///     .precip(1.5)
///     .build();
/// assert_eq!(observation.temp_avg, Some(22.0));
/// assert_eq!(observation.wind_max, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Builder)]
pub struct YearlyObservation {
    pub year: i32,
    pub temp_avg: Option<f64>, // °C
    pub temp_max: Option<f64>, // °C
    pub temp_min: Option<f64>, // °C
    pub wind_avg: Option<f64>, // m/s
    pub wind_max: Option<f64>, // m/s
    pub precip: Option<f64>,   // mm
}

impl YearlyObservation {
    /// The value recorded for `parameter`, if any.
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::TempAvg => self.temp_avg,
            Parameter::TempMax => self.temp_max,
            Parameter::TempMin => self.temp_min,
            Parameter::WindAvg => self.wind_avg,
            Parameter::WindMax => self.wind_max,
            Parameter::Precipitation => self.precip,
        }
    }

    /// `true` when no measurement is present.
    pub fn is_empty(&self) -> bool {
        Parameter::ALL.iter().all(|p| self.get(*p).is_none())
    }

    fn sanitized(self) -> Self {
        let keep = |v: Option<f64>| v.filter(|v| v.is_finite());
        Self {
            year: self.year,
            temp_avg: keep(self.temp_avg),
            temp_max: keep(self.temp_max),
            temp_min: keep(self.temp_min),
            wind_avg: keep(self.wind_avg),
            wind_max: keep(self.wind_max),
            precip: keep(self.precip),
        }
    }
}

/// The observations of one calendar day across a window of past years, ordered by year.
///
/// The set may be empty, and years need not be contiguous: a year the source has no data for
/// is left out rather than represented as an all-missing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationSet {
    observations: Vec<YearlyObservation>,
}

impl ObservationSet {
    /// Builds a set from already-normalized observations.
    ///
    /// Non-finite values are dropped to `None` and the observations are sorted by year.
    pub fn new(observations: Vec<YearlyObservation>) -> Self {
        let mut observations: Vec<_> = observations
            .into_iter()
            .map(YearlyObservation::sanitized)
            .collect();
        observations.sort_by_key(|o| o.year);
        Self { observations }
    }

    /// Pairs every year of `years` with the values reported for `month`/`day` in `parameters`.
    ///
    /// A year is included when at least one of the six parameters has a valid value for that
    /// date. Years where the calendar day does not exist (29 February outside leap years) are
    /// skipped, and an empty range yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use climate_outlook::{DailyParameters, ObservationSet, Parameter};
    ///
    /// let params = DailyParameters::default()
    ///     .with_value(Parameter::TempAvg, NaiveDate::from_ymd_opt(2022, 7, 15).unwrap(), 21.0)
    ///     .with_value(Parameter::TempAvg, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(), 23.0);
    ///
    /// let set = ObservationSet::from_daily_parameters(&params, 7, 15, 2021..=2024);
    /// assert_eq!(set.years(), vec![2022, 2024]);
    /// ```
    pub fn from_daily_parameters(
        parameters: &DailyParameters,
        month: u32,
        day: u32,
        years: RangeInclusive<i32>,
    ) -> Self {
        let observations: Vec<YearlyObservation> = years
            .filter_map(|year| {
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                let observation = YearlyObservation {
                    year,
                    temp_avg: parameters.value(Parameter::TempAvg, date),
                    temp_max: parameters.value(Parameter::TempMax, date),
                    temp_min: parameters.value(Parameter::TempMin, date),
                    wind_avg: parameters.value(Parameter::WindAvg, date),
                    wind_max: parameters.value(Parameter::WindMax, date),
                    precip: parameters.value(Parameter::Precipitation, date),
                };
                (!observation.is_empty()).then_some(observation)
            })
            .collect();
        debug!(
            "Built observation set for {:02}-{:02} with {} years",
            month,
            day,
            observations.len()
        );
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearlyObservation> {
        self.observations.iter()
    }

    pub fn years(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.year).collect()
    }

    /// Every present value of `parameter`, in year order.
    pub fn values(&self, parameter: Parameter) -> Vec<f64> {
        self.observations
            .iter()
            .filter_map(|o| o.get(parameter))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a YearlyObservation;
    type IntoIter = std::slice::Iter<'a, YearlyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<YearlyObservation> for ObservationSet {
    fn from_iter<T: IntoIterator<Item = YearlyObservation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
