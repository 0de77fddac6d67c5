//! Assigns a [`Condition`] to aggregated statistics using an ordered rule table.
//!
//! Rules are tested in order and the first match wins; when none match the table's fallback
//! condition is used, so classification is defined for every input.

use crate::analysis::aggregator::ClimateStatistics;
use crate::types::condition::Condition;

/// A test against a single threshold or an inclusive interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    GreaterThan(f64),
    LessThan(f64),
    /// Inclusive on both ends.
    Between(f64, f64),
}

impl Comparison {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Comparison::GreaterThan(threshold) => value > threshold,
            Comparison::LessThan(threshold) => value < threshold,
            Comparison::Between(low, high) => (low..=high).contains(&value),
        }
    }
}

/// The statistic a [`ConditionRule`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    AvgTemp,
    MaxTemp,
    AvgRain,
    MaxWind,
}

/// The four statistics classification depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationInput {
    pub avg_temp: f64,
    pub max_temp: f64,
    pub avg_rain: f64,
    pub max_wind: f64,
}

impl ClassificationInput {
    pub fn new(avg_temp: f64, max_temp: f64, avg_rain: f64, max_wind: f64) -> Self {
        Self {
            avg_temp,
            max_temp,
            avg_rain,
            max_wind,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AvgTemp => self.avg_temp,
            Metric::MaxTemp => self.max_temp,
            Metric::AvgRain => self.avg_rain,
            Metric::MaxWind => self.max_wind,
        }
    }
}

impl From<&ClimateStatistics> for ClassificationInput {
    fn from(stats: &ClimateStatistics) -> Self {
        Self::new(stats.avg_temp, stats.max_temp, stats.avg_rain, stats.max_wind)
    }
}

/// Assigns `condition` when `metric` satisfies `comparison`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionRule {
    pub condition: Condition,
    pub metric: Metric,
    pub comparison: Comparison,
}

impl ConditionRule {
    pub const fn new(condition: Condition, metric: Metric, comparison: Comparison) -> Self {
        Self {
            condition,
            metric,
            comparison,
        }
    }
}

const DEFAULT_RULES: [ConditionRule; 6] = [
    ConditionRule::new(Condition::Rainy, Metric::AvgRain, Comparison::GreaterThan(10.0)),
    ConditionRule::new(Condition::Hot, Metric::MaxTemp, Comparison::GreaterThan(32.0)),
    ConditionRule::new(Condition::Cold, Metric::AvgTemp, Comparison::LessThan(10.0)),
    ConditionRule::new(Condition::Windy, Metric::MaxWind, Comparison::GreaterThan(12.0)),
    ConditionRule::new(Condition::Pleasant, Metric::AvgTemp, Comparison::Between(18.0, 25.0)),
    ConditionRule::new(Condition::Warm, Metric::AvgTemp, Comparison::GreaterThan(25.0)),
];

/// An ordered, first-match-wins list of rules plus the condition used when none match.
///
/// # Examples
///
/// ```
/// use climate_outlook::{ClassificationInput, Condition, ConditionRules};
///
/// let rules = ConditionRules::default();
/// // Heavy rain takes precedence over a hot day.
/// let input = ClassificationInput::new(28.0, 35.0, 12.0, 3.0);
/// assert_eq!(rules.classify(&input), Condition::Rainy);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRules {
    rules: Vec<ConditionRule>,
    fallback: Condition,
}

impl ConditionRules {
    pub fn new(rules: Vec<ConditionRule>, fallback: Condition) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[ConditionRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Condition {
        self.fallback
    }

    pub fn classify(&self, input: &ClassificationInput) -> Condition {
        self.rules
            .iter()
            .find(|rule| rule.comparison.matches(input.get(rule.metric)))
            .map_or(self.fallback, |rule| rule.condition)
    }
}

/// Rainy, Hot, Cold, Windy, Pleasant, Warm, falling back to Cool.
impl Default for ConditionRules {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), Condition::Cool)
    }
}

/// Classifies with the default rule table.
pub fn determine_condition(avg_temp: f64, max_temp: f64, avg_rain: f64, max_wind: f64) -> Condition {
    ConditionRules::default().classify(&ClassificationInput::new(
        avg_temp, max_temp, avg_rain, max_wind,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_in_isolation() {
        assert_eq!(determine_condition(20.0, 25.0, 10.5, 3.0), Condition::Rainy);
        assert_eq!(determine_condition(20.0, 33.0, 0.0, 3.0), Condition::Hot);
        assert_eq!(determine_condition(5.0, 8.0, 0.0, 3.0), Condition::Cold);
        assert_eq!(determine_condition(15.0, 20.0, 0.0, 13.0), Condition::Windy);
        assert_eq!(determine_condition(22.0, 27.0, 1.3, 8.0), Condition::Pleasant);
        assert_eq!(determine_condition(27.0, 30.0, 0.0, 5.0), Condition::Warm);
        assert_eq!(determine_condition(14.0, 18.0, 0.0, 5.0), Condition::Cool);
    }

    #[test]
    fn test_precedence_first_match_wins() {
        // Rainy beats Hot, Cold and Windy.
        assert_eq!(determine_condition(5.0, 35.0, 11.0, 20.0), Condition::Rainy);
        // Hot beats Windy and Warm.
        assert_eq!(determine_condition(28.0, 33.0, 0.0, 20.0), Condition::Hot);
        // Cold beats Windy.
        assert_eq!(determine_condition(5.0, 8.0, 0.0, 20.0), Condition::Cold);
        // Windy beats Pleasant.
        assert_eq!(determine_condition(20.0, 24.0, 0.0, 12.5), Condition::Windy);
    }

    #[test]
    fn test_boundaries() {
        // Thresholds themselves do not trigger the strict rules.
        assert_eq!(determine_condition(20.0, 32.0, 10.0, 12.0), Condition::Pleasant);
        assert_eq!(determine_condition(10.0, 15.0, 0.0, 0.0), Condition::Cool);
        // Pleasant is inclusive on both ends.
        assert_eq!(determine_condition(18.0, 20.0, 0.0, 0.0), Condition::Pleasant);
        assert_eq!(determine_condition(25.0, 30.0, 0.0, 0.0), Condition::Pleasant);
        assert_eq!(determine_condition(25.1, 30.0, 0.0, 0.0), Condition::Warm);
        assert_eq!(determine_condition(17.9, 20.0, 0.0, 0.0), Condition::Cool);
    }

    #[test]
    fn test_nan_falls_back_to_cool() {
        assert_eq!(
            determine_condition(f64::NAN, f64::NAN, f64::NAN, f64::NAN),
            Condition::Cool
        );
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = ConditionRules::new(
            vec![ConditionRule::new(
                Condition::Hot,
                Metric::AvgTemp,
                Comparison::GreaterThan(20.0),
            )],
            Condition::Pleasant,
        );
        let input = ClassificationInput::new(21.0, 22.0, 0.0, 0.0);
        assert_eq!(rules.classify(&input), Condition::Hot);
        let input = ClassificationInput::new(19.0, 22.0, 0.0, 0.0);
        assert_eq!(rules.classify(&input), Condition::Pleasant);
    }

    #[test]
    fn test_default_table_order() {
        let order: Vec<Condition> = ConditionRules::default()
            .rules()
            .iter()
            .map(|rule| rule.condition)
            .chain(std::iter::once(ConditionRules::default().fallback()))
            .collect();
        assert_eq!(order, Condition::ALL.to_vec());
    }
}
