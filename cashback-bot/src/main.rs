//! Binary for the cashback assistant bot.

use anyhow::Result;
use cashback_bot::{execute, open_store, run_bot, BotConfig, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        command => {
            let config = BotConfig::load(None)?;
            let policy = config.percent_policy()?;
            let store = open_store(&config.database_url).await?;
            if let Some(admin) = command.into_admin() {
                execute(store.as_ref(), policy, admin, &mut std::io::stdout()).await?;
            }
            store.close().await;
            Ok(())
        }
    }
}
