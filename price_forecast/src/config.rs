//! Forecast run configuration

use crate::constants::DEFAULT_HORIZON_DAYS;
use crate::error::{ForecastError, Result};
use crate::models::ModelKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a forecasting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Number of trading days to forecast
    pub horizon_days: usize,
    /// Strategy name; unknown names fall back to `lstm`
    pub model: String,
    /// Seed for the noise source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            model: ModelKind::default().as_str().to_string(),
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizonDays must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Strategy selected by this configuration
    pub fn model_kind(&self) -> ModelKind {
        ModelKind::from_name_or_default(&self.model)
    }
}
