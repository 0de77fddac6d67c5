//! Short human-readable advice for a classified day.

use crate::types::analysis_result::{AnalysisResult, Summary, TemperatureRange};
use crate::types::condition::Condition;

/// Advice given when a label is not one of the known conditions.
pub const FALLBACK_ADVISORY: &str = "Check the weather before heading out.";

/// The advisory text for `condition`, with the temperature range or rain summary filled in.
///
/// # Examples
///
/// ```
/// use climate_outlook::{advisory, Condition, TemperatureRange};
/// # use climate_outlook::{analyze, ObservationSet, YearlyObservation};
/// # let result = analyze(&ObservationSet::new(vec![
/// #     YearlyObservation::builder().year(2020).temp_avg(20.0).temp_min(15.0).temp_max(27.0).build(),
/// # ])).unwrap();
///
/// let range = TemperatureRange { min: 15.0, max: 27.0 };
/// let text = advisory(Condition::Pleasant, &range, &result.rain_summary);
/// assert_eq!(text, "Perfect day (15.0°C - 27.0°C). Ideal for outdoor plans!");
/// ```
pub fn advisory(condition: Condition, temp_range: &TemperatureRange, rain: &Summary) -> String {
    match condition {
        Condition::Hot => format!(
            "Hot day ahead ({temp_range}). Drink water often, wear light clothes, and avoid too much sun."
        ),
        Condition::Warm => {
            format!("Warm and comfy ({temp_range}). Great for outdoor stuff, just stay hydrated.")
        }
        Condition::Pleasant => format!("Perfect day ({temp_range}). Ideal for outdoor plans!"),
        Condition::Cool => {
            format!("Cool temperatures ({temp_range}). A light jacket should be fine.")
        }
        Condition::Cold => format!("Cold weather ({temp_range}). Bundle up properly."),
        Condition::Rainy => format!("Expect rain ({rain}). Carry an umbrella or raincoat."),
        Condition::Windy => {
            "Strong winds expected. Be careful with outdoor setups or travel.".to_string()
        }
    }
}

/// Like [`advisory`], but for a textual label. Unknown labels get [`FALLBACK_ADVISORY`].
pub fn advisory_for_label(label: &str, temp_range: &TemperatureRange, rain: &Summary) -> String {
    match label.parse::<Condition>() {
        Ok(condition) => advisory(condition, temp_range, rain),
        Err(_) => FALLBACK_ADVISORY.to_string(),
    }
}

impl AnalysisResult {
    /// The advisory for this result's predicted condition.
    pub fn advisory(&self) -> String {
        advisory(self.main_prediction, &self.temp_range, &self.rain_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> TemperatureRange {
        TemperatureRange {
            min: 15.0,
            max: 27.0,
        }
    }

    fn rain() -> Summary {
        Summary::new(12.5, 20.0, "mm")
    }

    #[test]
    fn test_templates_interpolate_ranges() {
        assert_eq!(
            advisory(Condition::Hot, &range(), &rain()),
            "Hot day ahead (15.0°C - 27.0°C). Drink water often, wear light clothes, and avoid too much sun."
        );
        assert_eq!(
            advisory(Condition::Cold, &range(), &rain()),
            "Cold weather (15.0°C - 27.0°C). Bundle up properly."
        );
        assert_eq!(
            advisory(Condition::Rainy, &range(), &rain()),
            "Expect rain (12.5 mm (max: 20.0 mm)). Carry an umbrella or raincoat."
        );
        assert_eq!(
            advisory(Condition::Windy, &range(), &rain()),
            "Strong winds expected. Be careful with outdoor setups or travel."
        );
    }

    #[test]
    fn test_every_condition_has_distinct_advice() {
        let mut texts: Vec<String> = Condition::ALL
            .iter()
            .map(|c| advisory(*c, &range(), &rain()))
            .collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), Condition::ALL.len());
        assert!(!texts.iter().any(|t| t == FALLBACK_ADVISORY));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(
            advisory_for_label("Cool", &range(), &rain()),
            "Cool temperatures (15.0°C - 27.0°C). A light jacket should be fine."
        );
        assert_eq!(
            advisory_for_label("Foggy", &range(), &rain()),
            FALLBACK_ADVISORY
        );
    }
}
