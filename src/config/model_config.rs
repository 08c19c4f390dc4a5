//! Model artifact configuration parsing from environment variables.
//!
//! `MODEL_DIR` points at the directory holding one artifact per window and
//! `MODEL_WINDOWS` optionally restricts which windows are loaded.

use crate::domain::ml::WindowId;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_dir: PathBuf,
    pub windows: Vec<WindowId>,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("modelos_finales"),
            windows: WindowId::ALL.to_vec(),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_dir);

        let windows = match env::var("MODEL_WINDOWS") {
            Ok(list) => parse_windows(&list).context("Failed to parse MODEL_WINDOWS")?,
            Err(_) => defaults.windows,
        };

        Ok(Self { model_dir, windows })
    }
}

/// Parses a comma separated list such as `"7,14"` into sorted, unique windows.
pub fn parse_windows(list: &str) -> Result<Vec<WindowId>> {
    let mut windows = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let days = s
                .parse::<i64>()
                .with_context(|| format!("'{}' is not an integer", s))?;
            WindowId::try_from(days)
                .map_err(|d| anyhow!("Invalid window {}. Must be one of 7, 14, 21, 28", d))
        })
        .collect::<Result<Vec<_>>>()?;

    windows.sort();
    windows.dedup();
    Ok(windows)
}
