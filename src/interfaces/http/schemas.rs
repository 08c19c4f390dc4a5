//! Request and response payloads of the HTTP API.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /predecir`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatosBtc {
    /// Historical lag values; the required count depends on the window
    pub lags: Vec<f64>,
    /// Volatility window in days: 7, 14, 21 or 28
    #[serde(deserialize_with = "lax_integer")]
    pub tipo_volatilidad: i64,
}

/// Accepts `7`, `7.0` and `"7"`; rejects fractional values such as `7.5`.
fn lax_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    // Above 2^53 a float no longer identifies a single integer
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT => Ok(f as i64),
        Raw::Float(f) => Err(D::Error::custom(format!("expected an integer, got {}", f))),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaPrediccion {
    pub tipo_volatilidad: i64,
    pub volatilidad_predicha: Vec<f64>,
    /// `H1..Hn`, aligned with `volatilidad_predicha`
    pub horizontes: Vec<String>,
    pub dias_pronostico: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoModelo {
    pub dias_volatilidad: i64,
    pub parametros: BTreeMap<String, f64>,
    pub metricas: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelosDisponibles {
    pub mensaje: String,
    pub modelos_disponibles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salud {
    pub status: String,
    pub version: String,
    pub modelos_cargados: usize,
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
