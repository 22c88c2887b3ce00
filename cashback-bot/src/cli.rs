//! CLI parser.

use clap::{Parser, Subcommand};

use crate::admin::AdminCommand;

#[derive(Parser)]
#[command(name = "cashback-bot")]
#[command(about = "Cashback assistant: run the Telegram bot or manage records directly", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Add one cashback for a user.
    Add {
        #[arg(short, long)]
        user: i64,
        #[arg(short, long)]
        bank: String,
        #[arg(short, long)]
        category: String,
        /// Number, optionally with `%` or a decimal comma
        #[arg(short, long)]
        percent: String,
    },
    /// List a user's cashbacks (bank, then best percent).
    List {
        #[arg(short, long)]
        user: i64,
    },
    /// Best cashbacks whose category contains QUERY (case-sensitive).
    Find {
        #[arg(short, long)]
        user: i64,
        query: String,
    },
    /// Delete every cashback of a user.
    Reset {
        #[arg(short, long)]
        user: i64,
    },
}

impl Commands {
    /// The database command, or None for `run`.
    pub fn into_admin(self) -> Option<AdminCommand> {
        match self {
            Commands::Run { .. } => None,
            Commands::Add {
                user,
                bank,
                category,
                percent,
            } => Some(AdminCommand::Add {
                user,
                bank,
                category,
                percent,
            }),
            Commands::List { user } => Some(AdminCommand::List { user }),
            Commands::Find { user, query } => Some(AdminCommand::Find { user, query }),
            Commands::Reset { user } => Some(AdminCommand::Reset { user }),
        }
    }
}
