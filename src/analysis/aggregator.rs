//! Reduces an [`ObservationSet`] to per-quantity summary statistics.
//!
//! Missing values are filtered per quantity: a year without wind data still contributes its
//! temperatures. The average temperature is the only quantity the analysis cannot do without;
//! any other quantity that is missing in every year defaults to `0.0`.

use crate::analysis::classifier::Comparison;
use crate::types::analysis_result::ExtremeKind;
use crate::types::observation::ObservationSet;
use crate::types::parameter::Parameter;
use crate::utils::{mean, percentage, round_one_decimal};
use log::debug;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// A fixed threshold that marks a day as extreme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremeThreshold {
    pub kind: ExtremeKind,
    pub parameter: Parameter,
    pub comparison: Comparison,
}

/// Thresholds used for the extreme-event probabilities, compared against raw daily values.
pub const EXTREME_THRESHOLDS: [ExtremeThreshold; 4] = [
    ExtremeThreshold {
        kind: ExtremeKind::VeryHot,
        parameter: Parameter::TempMax,
        comparison: Comparison::GreaterThan(30.0),
    },
    ExtremeThreshold {
        kind: ExtremeKind::VeryCold,
        parameter: Parameter::TempMin,
        comparison: Comparison::LessThan(10.0),
    },
    ExtremeThreshold {
        kind: ExtremeKind::VeryWindy,
        parameter: Parameter::WindMax,
        comparison: Comparison::GreaterThan(10.0),
    },
    ExtremeThreshold {
        kind: ExtremeKind::VeryWet,
        parameter: Parameter::Precipitation,
        comparison: Comparison::GreaterThan(10.0),
    },
];

/// Summary statistics of an observation set. Every value is rounded to one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateStatistics {
    pub avg_temp: f64,
    pub avg_temp_max: f64,
    pub avg_temp_min: f64,
    /// Lowest minimum temperature.
    pub min_temp: f64,
    /// Highest maximum temperature.
    pub max_temp: f64,
    pub avg_wind: f64,
    pub avg_wind_max: f64,
    pub max_wind: f64,
    pub avg_rain: f64,
    pub max_rain: f64,
    /// Number of observations the statistics were computed from, valid or not.
    pub observation_count: usize,
    pub extreme_probabilities: BTreeMap<ExtremeKind, u8>,
}

/// Computes [`ClimateStatistics`] for `set`.
///
/// Returns `None` when no observation carries an average temperature, which includes the
/// empty set.
pub fn aggregate(set: &ObservationSet) -> Option<ClimateStatistics> {
    let avg_temp = mean(&set.values(Parameter::TempAvg))?;

    let mean_of =
        |parameter: Parameter| mean(&set.values(parameter)).map_or(0.0, round_one_decimal);
    let max_of = |parameter: Parameter| {
        set.values(parameter)
            .into_iter()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |v| round_one_decimal(v.into_inner()))
    };
    let min_of = |parameter: Parameter| {
        set.values(parameter)
            .into_iter()
            .map(OrderedFloat)
            .min()
            .map_or(0.0, |v| round_one_decimal(v.into_inner()))
    };

    let statistics = ClimateStatistics {
        avg_temp: round_one_decimal(avg_temp),
        avg_temp_max: mean_of(Parameter::TempMax),
        avg_temp_min: mean_of(Parameter::TempMin),
        min_temp: min_of(Parameter::TempMin),
        max_temp: max_of(Parameter::TempMax),
        avg_wind: mean_of(Parameter::WindAvg),
        avg_wind_max: mean_of(Parameter::WindMax),
        max_wind: max_of(Parameter::WindMax),
        avg_rain: mean_of(Parameter::Precipitation),
        max_rain: max_of(Parameter::Precipitation),
        observation_count: set.len(),
        extreme_probabilities: extreme_probabilities(set),
    };
    debug!("Aggregated {} observations: {:?}", set.len(), statistics);
    Some(statistics)
}

/// Share of all observations whose value crosses each [`EXTREME_THRESHOLDS`] entry.
///
/// The denominator is the total number of observations, so a year missing the relevant value
/// counts as a day that did not cross the threshold.
pub fn extreme_probabilities(set: &ObservationSet) -> BTreeMap<ExtremeKind, u8> {
    EXTREME_THRESHOLDS
        .iter()
        .map(|threshold| {
            let hits = set
                .values(threshold.parameter)
                .into_iter()
                .filter(|value| threshold.comparison.matches(*value))
                .count();
            (threshold.kind, percentage(hits, set.len()))
        })
        .collect()
}
