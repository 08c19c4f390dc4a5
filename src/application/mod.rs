// Model registry and prediction pipeline
pub mod ml;
