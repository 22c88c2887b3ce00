//! Bot config: Telegram connection, logging, database, intake policy, photo OCR. Loaded from env.

use std::env;

use anyhow::{Context, Result};
use cashback_handlers::PercentPolicy;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:cashback.db";
pub const DEFAULT_LOG_FILE: &str = "logs/cashback-bot.log";
pub const DEFAULT_TEMP_DIR: &str = "temp_images";
pub const DEFAULT_OCR_COMMAND: &str = "tesseract";
pub const DEFAULT_OCR_LANGUAGES: &str = "rus+eng";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; only `run` needs it
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// WEBAPP_URL: add-cashback web app opened from the /start keyboard
    pub webapp_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// SQLite URL (`sqlite:...`) or plain file path
    pub database_url: String,
    /// PERCENT_POLICY, raw; see [`BotConfig::percent_policy`]
    pub percent_policy: String,
    /// Download directory for photos
    pub temp_dir: String,
    /// OCR executable; empty disables OCR
    pub ocr_command: String,
    pub ocr_languages: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token.or_else(|| non_empty_var("BOT_TOKEN"));
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));

        Ok(Self {
            bot_token,
            telegram_api_url,
            webapp_url: non_empty_var("WEBAPP_URL"),
            log_file: var_or("LOG_FILE", DEFAULT_LOG_FILE),
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            percent_policy: var_or("PERCENT_POLICY", "coerce"),
            temp_dir: var_or("TEMP_DIR", DEFAULT_TEMP_DIR),
            ocr_command: var_or("OCR_COMMAND", DEFAULT_OCR_COMMAND),
            ocr_languages: var_or("OCR_LANGUAGES", DEFAULT_OCR_LANGUAGES),
        })
    }

    /// The token, or an error telling the user how to provide one.
    pub fn bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .context("BOT_TOKEN not set (set it in .env or pass --token)")
    }

    pub fn percent_policy(&self) -> Result<PercentPolicy> {
        self.percent_policy
            .parse()
            .with_context(|| format!("PERCENT_POLICY is invalid: {}", self.percent_policy))
    }

    /// Validate config: URLs must parse, the web app must be HTTPS, the policy must be known.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.webapp_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) if url.scheme() == "https" => {}
                Ok(_) => anyhow::bail!("WEBAPP_URL must use https: {}", url_str),
                Err(_) => anyhow::bail!("WEBAPP_URL is set but not a valid URL: {}", url_str),
            }
        }
        self.percent_policy()?;
        Ok(())
    }
}
