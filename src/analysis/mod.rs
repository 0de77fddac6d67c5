//! The historical climate analysis engine.
//!
//! [`analyze`] is a pure function of its [`ObservationSet`]: it aggregates the set, classifies
//! the aggregate and packages the result. It performs no I/O and keeps no state.

pub mod advisory;
pub mod aggregator;
pub mod classifier;

use crate::analysis::aggregator::{aggregate, ClimateStatistics};
use crate::analysis::classifier::{ClassificationInput, ConditionRules};
use crate::types::analysis_result::{confidence_note, AnalysisResult, Summary, TemperatureRange};
use crate::types::condition::Condition;
use crate::types::observation::ObservationSet;

/// Analyses `set` with the default condition rules.
///
/// Returns `None` when the set is empty or no year has an average temperature.
///
/// # Examples
///
/// ```
/// use climate_outlook::{analyze, Condition, ObservationSet, YearlyObservation};
///
/// let set = ObservationSet::new(vec![
///     YearlyObservation::builder().year(2021).temp_avg(20.0).temp_max(25.0).temp_min(15.0).build(),
///     YearlyObservation::builder().year(2022).temp_avg(24.0).temp_max(27.0).temp_min(17.0).build(),
/// ]);
///
/// let result = analyze(&set).expect("average temperatures are present");
/// assert_eq!(result.main_prediction, Condition::Pleasant);
/// assert_eq!(result.temp_range.to_string(), "15.0°C - 27.0°C");
///
/// assert!(analyze(&ObservationSet::default()).is_none());
/// ```
pub fn analyze(set: &ObservationSet) -> Option<AnalysisResult> {
    analyze_with_rules(set, &ConditionRules::default())
}

/// Analyses `set`, classifying with a custom rule table.
pub fn analyze_with_rules(set: &ObservationSet, rules: &ConditionRules) -> Option<AnalysisResult> {
    let stats = aggregate(set)?;
    let main_prediction = rules.classify(&ClassificationInput::from(&stats));
    Some(build_result(stats, main_prediction))
}

fn build_result(stats: ClimateStatistics, main_prediction: Condition) -> AnalysisResult {
    AnalysisResult {
        main_prediction,
        temp_range: TemperatureRange {
            min: stats.min_temp,
            max: stats.max_temp,
        },
        avg_temp: stats.avg_temp,
        wind_summary: Summary::new(stats.avg_wind, stats.max_wind, "m/s"),
        rain_summary: Summary::new(stats.avg_rain, stats.max_rain, "mm"),
        years_used: stats.observation_count,
        confidence_note: confidence_note(stats.observation_count),
        extreme_probabilities: stats.extreme_probabilities,
    }
}
