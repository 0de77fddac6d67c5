mod analysis;
mod error;
mod geocoding;
mod outlook;
mod power;
mod types;
mod utils;

pub use error::OutlookError;
pub use outlook::*;

pub use analysis::advisory::{advisory, advisory_for_label, FALLBACK_ADVISORY};
pub use analysis::aggregator::{
    aggregate, extreme_probabilities, ClimateStatistics, ExtremeThreshold, EXTREME_THRESHOLDS,
};
pub use analysis::classifier::{
    determine_condition, ClassificationInput, Comparison, ConditionRule, ConditionRules, Metric,
};
pub use analysis::{analyze, analyze_with_rules};

pub use geocoding::fallback::{FallbackCity, FALLBACK_CITIES};
pub use geocoding::resolver::{Geocoder, NominatimResolver};
pub use power::client::{parse_response, HistoricalSource, PowerClient};

pub use types::analysis_result::{AnalysisResult, ExtremeKind, Summary, TemperatureRange};
pub use types::condition::{Condition, UnknownCondition};
pub use types::location::{LatLon, ResolvedLocation};
pub use types::observation::{ObservationSet, YearlyObservation};
pub use types::parameter::{DailyParameters, Parameter};

pub use geocoding::error::GeocodingError;
pub use power::error::HistoricalDataError;
