//! # cashback-bot
//!
//! Wires storage, handlers and the Telegram layer into the cashback assistant:
//! config from env, component factory, `run_bot`, and the administrative CLI commands.

pub mod admin;
pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use admin::{execute, AdminCommand};
pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, open_store, BotComponents};
pub use config::BotConfig;
pub use runner::run_bot;
