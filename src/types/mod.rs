pub mod analysis_result;
pub mod condition;
pub mod location;
pub mod observation;
pub mod parameter;
