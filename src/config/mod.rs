pub mod toml_config;

use crate::app::session::Mode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::LotConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parking-console")]
#[command(about = "Interactive parking lot management console")]
pub struct CliConfig {
    /// Path to a TOML lot configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of parking spaces (overrides the config file)
    #[arg(long)]
    pub spaces: Option<u32>,

    /// Fee per minute of occupancy (overrides the config file)
    #[arg(long)]
    pub rate: Option<f64>,

    #[arg(long, value_enum, default_value_t = Mode::Lot)]
    pub mode: Mode,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 < 設定檔 < 命令列參數
    pub fn resolve(&self) -> Result<LotConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading lot configuration from: {}", path);
                LotConfig::from_file(path)?
            }
            None => LotConfig::default(),
        };

        if let Some(spaces) = self.spaces {
            config.lot.total_spaces = spaces;
        }
        if let Some(rate) = self.rate {
            config.billing.rate_per_minute = rate;
        }

        config.validate()?;
        Ok(config)
    }
}
