use crate::core::fee::DEFAULT_RATE_PER_MINUTE;
use crate::core::ConfigProvider;
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_rate, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOTAL_SPACES: u32 = 10;
pub const MAX_TOTAL_SPACES: u32 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotConfig {
    #[serde(default)]
    pub lot: LotSection,
    #[serde(default)]
    pub billing: BillingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSection {
    #[serde(default = "default_total_spaces")]
    pub total_spaces: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSection {
    #[serde(default = "default_rate_per_minute")]
    pub rate_per_minute: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_total_spaces() -> u32 {
    DEFAULT_TOTAL_SPACES
}

fn default_rate_per_minute() -> f64 {
    DEFAULT_RATE_PER_MINUTE
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for LotSection {
    fn default() -> Self {
        Self {
            total_spaces: default_total_spaces(),
        }
    }
}

impl Default for BillingSection {
    fn default() -> Self {
        Self {
            rate_per_minute: default_rate_per_minute(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl LotConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ParkingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for LotConfig {
    fn validate(&self) -> Result<()> {
        validate_range("lot.total_spaces", self.lot.total_spaces, 1, MAX_TOTAL_SPACES)?;
        validate_rate("billing.rate_per_minute", self.billing.rate_per_minute)?;
        validate_non_empty_string("billing.currency_symbol", &self.billing.currency_symbol)?;
        Ok(())
    }
}

impl ConfigProvider for LotConfig {
    fn total_spaces(&self) -> u32 {
        self.lot.total_spaces
    }

    fn rate_per_minute(&self) -> f64 {
        self.billing.rate_per_minute
    }

    fn currency_symbol(&self) -> &str {
        &self.billing.currency_symbol
    }
}
