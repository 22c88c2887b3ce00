//! Main entry for `run`: validate config, init logging, build components, run the REPL.

use anyhow::Result;
use cashback_core::init_tracing;
use cashback_telegram::run_repl;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    let policy = config.percent_policy()?;

    info!(
        database_url = %config.database_url,
        temp_dir = %config.temp_dir,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(
        &config,
        policy,
        components.bot.clone(),
        components.store.clone(),
        components.recognizer.clone(),
    );

    info!("Bot started successfully");

    let result = run_repl(components.teloxide_bot, handler_chain).await;
    components.store.close().await;
    result
}
