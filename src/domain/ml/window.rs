use serde::{Deserialize, Serialize};
use std::fmt;

/// Volatility window a model was trained for, in days.
///
/// Each window owns its own trained regressor, scalers and input length,
/// so the window is the key used to select a model at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum WindowId {
    Days7,
    Days14,
    Days21,
    Days28,
}

impl WindowId {
    /// Every window a model may exist for, in ascending order.
    pub const ALL: [WindowId; 4] = [
        WindowId::Days7,
        WindowId::Days14,
        WindowId::Days21,
        WindowId::Days28,
    ];

    /// Returns the window length in days
    pub fn days(&self) -> u32 {
        match self {
            WindowId::Days7 => 7,
            WindowId::Days14 => 14,
            WindowId::Days21 => 21,
            WindowId::Days28 => 28,
        }
    }

    /// Human readable label used by the model listing.
    pub fn label(&self) -> String {
        format!("Volatilidad {} días", self.days())
    }

    /// File name of the JSON sidecar holding scalers and training metadata.
    pub fn artifact_file_name(&self) -> String {
        format!("mejor_modelo_vol{}d.json", self.days())
    }

    /// File name of the ONNX export of the trained regressor.
    pub fn model_file_name(&self) -> String {
        format!("mejor_modelo_vol{}d.onnx", self.days())
    }
}

impl TryFrom<i64> for WindowId {
    type Error = i64;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(WindowId::Days7),
            14 => Ok(WindowId::Days14),
            21 => Ok(WindowId::Days21),
            28 => Ok(WindowId::Days28),
            other => Err(other),
        }
    }
}

impl From<WindowId> for i64 {
    fn from(window: WindowId) -> Self {
        window.days() as i64
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
