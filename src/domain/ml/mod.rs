pub mod forecast;
pub mod window;

pub use forecast::{PredictionResult, horizon_labels};
pub use window::WindowId;
