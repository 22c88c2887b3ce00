//! # cashback-telegram
//!
//! Telegram layer: adapters from teloxide types, the [`cashback_core::Bot`] implementation,
//! client construction and the REPL runner. Knows nothing about cashbacks.

mod adapters;
mod bot_adapter;
mod client;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use client::build_teloxide_bot;
pub use runner::run_repl;
