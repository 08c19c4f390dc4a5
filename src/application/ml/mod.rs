pub mod model_bundle;
pub mod model_registry;
pub mod onnx_regressor;
pub mod pipeline;
pub mod regressor;
pub mod scaler;
#[cfg(test)]
pub(crate) mod test_support;

pub use model_bundle::{ModelBundle, ModelMetadata};
pub use model_registry::ModelRegistry;
pub use onnx_regressor::{OnnxLoader, OnnxRegressor};
pub use regressor::{RegressorLoader, VolatilityRegressor};
