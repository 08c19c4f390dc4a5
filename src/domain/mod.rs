// Forecasting domain: volatility windows and forecast results
pub mod ml;

// Domain-specific error types
pub mod errors;
