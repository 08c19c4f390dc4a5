use super::model_bundle::ModelBundle;
use super::onnx_regressor::OnnxLoader;
use super::regressor::RegressorLoader;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::WindowId;
use crate::infrastructure::persistence::artifact_store;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Read-only lookup from volatility window to its trained bundle.
///
/// Built once at startup. Windows whose artifact is missing are simply
/// absent, so the service can run serving only a subset of windows.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    bundles: BTreeMap<WindowId, Arc<ModelBundle>>,
}

impl ModelRegistry {
    /// Loads every candidate window whose sidecar exists under `base_dir`,
    /// opening the regressors through ONNX Runtime.
    pub fn load(candidates: &[WindowId], base_dir: &Path) -> Result<Self, ArtifactError> {
        Self::load_with(candidates, base_dir, &OnnxLoader)
    }

    /// A window without a sidecar is skipped. A window whose sidecar exists
    /// but whose sidecar or model cannot be read or validated fails the
    /// whole load.
    pub fn load_with(
        candidates: &[WindowId],
        base_dir: &Path,
        loader: &dyn RegressorLoader,
    ) -> Result<Self, ArtifactError> {
        let mut bundles = BTreeMap::new();

        for &window in candidates {
            let path = artifact_store::artifact_path(base_dir, window);
            if !path.exists() {
                warn!(
                    "Model artifact not found at {:?}. Window {} will not be served.",
                    path, window
                );
                continue;
            }

            let bundle = artifact_store::load_bundle(base_dir, window, loader)?;
            info!(
                "Loaded {}-day model from {:?} ({}, {} lags -> {} horizons)",
                window,
                path,
                bundle.regressor().name(),
                bundle.n_steps_input(),
                bundle.n_steps_forecast()
            );
            bundles.insert(window, Arc::new(bundle));
        }

        if bundles.is_empty() {
            warn!(
                "No model artifacts found in {}. Every prediction will be rejected.",
                base_dir.display()
            );
        }

        Ok(Self { bundles })
    }

    /// Builds a registry from bundles already in memory. Later bundles for
    /// the same window replace earlier ones.
    pub fn from_bundles(bundles: impl IntoIterator<Item = ModelBundle>) -> Self {
        Self {
            bundles: bundles
                .into_iter()
                .map(|b| (b.window(), Arc::new(b)))
                .collect(),
        }
    }

    pub fn get(&self, window: WindowId) -> Option<&Arc<ModelBundle>> {
        self.bundles.get(&window)
    }

    /// Looks a window up by its raw day count, as received on the wire.
    pub fn get_days(&self, days: i64) -> Option<&Arc<ModelBundle>> {
        WindowId::try_from(days).ok().and_then(|w| self.get(w))
    }

    /// Loaded windows in ascending order
    pub fn available(&self) -> Vec<WindowId> {
        self.bundles.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
