//! Direct database commands for the CLI: add, list, find, reset. Output goes to `out`.

use std::io::Write;

use anyhow::Result;
use cashback_handlers::{render, CashbackPayload, PercentPolicy};
use cashback_storage::{CashbackRow, CashbackStore};
use serde_json::Value;

/// One administrative operation on a user's cashbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    Add {
        user: i64,
        bank: String,
        category: String,
        percent: String,
    },
    List {
        user: i64,
    },
    Find {
        user: i64,
        query: String,
    },
    Reset {
        user: i64,
    },
}

fn write_rows(out: &mut impl Write, rows: &[CashbackRow]) -> Result<()> {
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}",
            row.bank,
            row.category,
            render::format_percent(row.percent)
        )?;
    }
    Ok(())
}

/// Runs `command` against `store`, applying `policy` to added percents.
pub async fn execute(
    store: &dyn CashbackStore,
    policy: PercentPolicy,
    command: AdminCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        AdminCommand::Add {
            user,
            bank,
            category,
            percent,
        } => {
            let payload = CashbackPayload {
                bank: Some(bank),
                category: Some(category),
                percent: Some(Value::String(percent)),
            };
            let cashback = payload.into_new_cashback(user, policy)?;
            let id = store.add(&cashback).await?;
            writeln!(
                out,
                "Added #{}: {}\t{}\t{}",
                id,
                cashback.bank,
                cashback.category,
                render::format_percent(cashback.percent)
            )?;
        }
        AdminCommand::List { user } => {
            write_rows(out, &store.list_all(user).await?)?;
        }
        AdminCommand::Find { user, query } => {
            write_rows(out, &store.find_best(user, &query).await?)?;
        }
        AdminCommand::Reset { user } => {
            let deleted = store.clear(user).await?;
            writeln!(out, "Deleted {} record(s)", deleted)?;
        }
    }
    Ok(())
}
