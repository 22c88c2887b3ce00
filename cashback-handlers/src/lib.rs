//! # Handlers for the cashback bot
//!
//! Turns chat messages into cashback store calls and renders the results:
//! `/start`, web-app and `/add` inserts, `/list`, `/reset`, free-text search and photo OCR echo.

mod add_handler;
mod command;
mod intake;
mod list_handler;
mod logging_handler;
mod ocr;
mod photo_handler;
pub mod render;
mod reply;
mod reset_handler;
mod search_handler;
mod start_handler;

#[cfg(test)]
mod test;

pub use add_handler::AddCashbackHandler;
pub use command::{Command, COMMAND_PREFIX};
pub use intake::{parse_add_args, parse_percent, parse_web_app_data, CashbackPayload, IntakeError, PercentPolicy};
pub use list_handler::ListHandler;
pub use logging_handler::LoggingHandler;
pub use ocr::{build_recognizer, CommandRecognizer, OcrError, TextRecognizer, UnavailableRecognizer, OCR_UNAVAILABLE};
pub use photo_handler::PhotoHandler;
pub use reset_handler::ResetHandler;
pub use search_handler::SearchHandler;
pub use start_handler::StartHandler;
