use anyhow::Context;
use clap::Parser;
use parking_console::app::session;
use parking_console::utils::logger;
use parking_console::{CliConfig, LotContext, StdinInput, SystemClock};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting parking console");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let ctx = LotContext::from_config(&config, Arc::new(SystemClock));

    session::run(ctx, cli.mode, |_| (StdinInput, std::io::stdout()))
        .await
        .context("parking console session failed")?;

    tracing::info!("👋 Parking console stopped");
    Ok(())
}
