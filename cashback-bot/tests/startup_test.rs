//! Startup: an unusable database stops the bot before any component or chain is built.

use cashback_bot::{build_bot_components, open_store, run_bot, BotConfig};
use tempfile::TempDir;

fn config_with_database(temp: &TempDir, database_url: String) -> BotConfig {
    BotConfig {
        bot_token: Some("test_token".to_string()),
        telegram_api_url: None,
        webapp_url: None,
        log_file: temp.path().join("logs").join("bot.log").to_string_lossy().to_string(),
        database_url,
        percent_policy: "coerce".to_string(),
        temp_dir: temp.path().join("images").to_string_lossy().to_string(),
        ocr_command: String::new(),
        ocr_languages: "eng".to_string(),
    }
}

/// Database file whose parent directory does not exist; SQLite cannot create it.
fn unreachable_database(temp: &TempDir) -> String {
    temp.path()
        .join("missing")
        .join("sub")
        .join("cashback.db")
        .to_string_lossy()
        .to_string()
}

#[tokio::test]
async fn test_open_store_fails_for_unreachable_path() {
    let temp = TempDir::new().unwrap();

    let result = open_store(&unreachable_database(&temp)).await;

    assert!(result.is_err());
}

/// **Test: components are not built when storage cannot be opened.**
///
/// **Expected:** Err, and the photo temp directory (created after the store) does not exist.
#[tokio::test]
async fn test_build_bot_components_fails_before_anything_else() {
    let temp = TempDir::new().unwrap();
    let config = config_with_database(&temp, unreachable_database(&temp));

    let result = build_bot_components(&config).await;

    assert!(result.is_err());
    assert!(!temp.path().join("images").exists());
}

/// **Test: run_bot returns the storage error instead of starting the REPL.**
#[tokio::test]
async fn test_run_bot_fails_on_unreachable_database() {
    let temp = TempDir::new().unwrap();
    let config = config_with_database(&temp, unreachable_database(&temp));

    let err = run_bot(config).await.unwrap_err();

    assert!(err.to_string().contains("Failed to initialize cashback storage"));
}
