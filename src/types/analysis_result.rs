//! The output of a historical climate analysis.

use crate::types::condition::Condition;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Kinds of extreme events whose historical frequency is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremeKind {
    /// Maximum temperature above 30 °C.
    VeryHot,
    /// Minimum temperature below 10 °C.
    VeryCold,
    /// Maximum wind above 10 m/s.
    VeryWindy,
    /// Precipitation above 10 mm.
    VeryWet,
}

impl ExtremeKind {
    pub const ALL: [ExtremeKind; 4] = [
        ExtremeKind::VeryHot,
        ExtremeKind::VeryCold,
        ExtremeKind::VeryWindy,
        ExtremeKind::VeryWet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExtremeKind::VeryHot => "very_hot",
            ExtremeKind::VeryCold => "very_cold",
            ExtremeKind::VeryWindy => "very_windy",
            ExtremeKind::VeryWet => "very_wet",
        }
    }
}

impl fmt::Display for ExtremeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowest minimum and highest maximum temperature, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// Formats as `15.0°C - 27.0°C`.
impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C - {:.1}°C", self.min, self.max)
    }
}

/// Average and maximum of a quantity, together with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub average: f64,
    pub maximum: f64,
    #[serde(skip)]
    unit: &'static str,
}

impl Summary {
    pub(crate) fn new(average: f64, maximum: f64, unit: &'static str) -> Self {
        Self {
            average,
            maximum,
            unit,
        }
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }
}

/// Formats as `4.0 m/s (max: 8.0 m/s)`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} {unit} (max: {:.1} {unit})",
            self.average,
            self.maximum,
            unit = self.unit
        )
    }
}

/// Statistical summary of one calendar day over a window of past years.
///
/// Only produced by [`crate::analyze`] when at least one year has an average temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub main_prediction: Condition,
    pub temp_range: TemperatureRange,
    pub avg_temp: f64,
    pub wind_summary: Summary,
    pub rain_summary: Summary,
    /// Percentage (0-100) of historical days that crossed each extreme threshold.
    pub extreme_probabilities: BTreeMap<ExtremeKind, u8>,
    pub years_used: usize,
    pub confidence_note: String,
}

impl AnalysisResult {
    /// Percentage of historical days meeting `kind`, `0` if not computed.
    pub fn probability(&self, kind: ExtremeKind) -> u8 {
        self.extreme_probabilities.get(&kind).copied().unwrap_or(0)
    }
}

pub(crate) fn confidence_note(years: usize) -> String {
    match years {
        1 => "1 year of historical data".to_string(),
        n => format!("{n} years of historical data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_range_display() {
        let range = TemperatureRange {
            min: 15.0,
            max: 27.0,
        };
        assert_eq!(range.to_string(), "15.0°C - 27.0°C");

        let range = TemperatureRange {
            min: -3.5,
            max: 0.0,
        };
        assert_eq!(range.to_string(), "-3.5°C - 0.0°C");
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(
            Summary::new(4.0, 8.0, "m/s").to_string(),
            "4.0 m/s (max: 8.0 m/s)"
        );
        assert_eq!(
            Summary::new(1.3, 2.0, "mm").to_string(),
            "1.3 mm (max: 2.0 mm)"
        );
    }

    #[test]
    fn test_confidence_note() {
        assert_eq!(confidence_note(1), "1 year of historical data");
        assert_eq!(confidence_note(10), "10 years of historical data");
        assert_eq!(confidence_note(0), "0 years of historical data");
    }

    #[test]
    fn test_extreme_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ExtremeKind::VeryWindy).unwrap();
        assert_eq!(json, "\"very_windy\"");
    }
}
