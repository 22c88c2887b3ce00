//! # cashback-core
//!
//! Core types and traits for the cashback bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; used by handler-chain, cashback-handlers
//! and cashback-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, Photo, ToCoreMessage, ToCoreUser,
    User, MESSAGE_TYPE_PHOTO, MESSAGE_TYPE_TEXT, MESSAGE_TYPE_WEB_APP_DATA,
};
