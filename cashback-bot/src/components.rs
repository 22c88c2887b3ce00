//! Component factory: opens the store, builds the transport and OCR, and assembles the handler chain.

use std::sync::Arc;

use anyhow::{Context, Result};
use cashback_core::Bot;
use cashback_handlers::{
    build_recognizer, AddCashbackHandler, ListHandler, LoggingHandler, PercentPolicy,
    PhotoHandler, ResetHandler, SearchHandler, StartHandler, TextRecognizer,
};
use cashback_storage::{CashbackRepository, CashbackStore};
use cashback_telegram::{build_teloxide_bot, TelegramBotAdapter};
use handler_chain::HandlerChain;
use tracing::{error, info, instrument};

use crate::config::BotConfig;

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub store: Arc<CashbackRepository>,
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub recognizer: Arc<dyn TextRecognizer>,
}

/// Opens the database and ensures the schema. Failure is fatal for the caller.
#[instrument]
pub async fn open_store(database_url: &str) -> Result<Arc<CashbackRepository>> {
    let repo = CashbackRepository::new(database_url).await.map_err(|e| {
        error!(error = %e, database_url = %database_url, "Failed to initialize cashback storage");
        anyhow::anyhow!("Failed to initialize cashback storage: {}", e)
    })?;
    Ok(Arc::new(repo))
}

/// Builds BotComponents from config; creates the photo temp directory.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let store = open_store(&config.database_url).await?;

    let teloxide_bot = build_teloxide_bot(config.bot_token()?, config.telegram_api_url.as_deref());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    tokio::fs::create_dir_all(&config.temp_dir)
        .await
        .with_context(|| format!("Failed to create temp directory {}", config.temp_dir))?;
    let recognizer = build_recognizer(&config.ocr_command, &config.ocr_languages).await;

    Ok(BotComponents {
        store,
        teloxide_bot,
        bot,
        recognizer,
    })
}

/// Builds the handler chain. Order matters: commands and attachments first, free-text search last.
pub fn build_handler_chain(
    config: &BotConfig,
    policy: PercentPolicy,
    bot: Arc<dyn Bot>,
    store: Arc<dyn CashbackStore>,
    recognizer: Arc<dyn TextRecognizer>,
) -> HandlerChain {
    info!(
        percent_policy = %policy,
        web_app = config.webapp_url.is_some(),
        "Building handler chain"
    );

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), config.webapp_url.clone())))
        .add_handler(Arc::new(AddCashbackHandler::new(bot.clone(), store.clone(), policy)))
        .add_handler(Arc::new(ListHandler::new(bot.clone(), store.clone())))
        .add_handler(Arc::new(ResetHandler::new(bot.clone(), store.clone())))
        .add_handler(Arc::new(PhotoHandler::new(
            bot.clone(),
            recognizer,
            config.temp_dir.clone(),
        )))
        .add_handler(Arc::new(SearchHandler::new(bot, store)))
}
