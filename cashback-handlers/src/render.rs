//! User-facing texts and formatting of store results.

use cashback_storage::{CashbackRow, NewCashback};

use crate::intake::IntakeError;

pub const MSG_GENERIC_FAILURE: &str =
    "Something went wrong while processing your request. Please try again later.";
pub const MSG_PHOTO_PROCESSING: &str =
    "Downloading and processing the photo... This may take a few seconds.";
pub const MSG_PHOTO_NO_TEXT: &str = "Could not recognize any text in the image.";
pub const MSG_PHOTO_FAILED: &str = "An error occurred while processing the image.";
pub const MSG_NO_RECORDS: &str =
    "You have no cashbacks yet. Add one with the app button or /add <bank>; <category>; <percent>.";
pub const WEB_APP_BUTTON_TEXT: &str = "📱 Open app";

/// Maximum length of echoed OCR text, in characters.
pub const OCR_TEXT_LIMIT: usize = 4000;

pub fn welcome_text(has_web_app: bool) -> String {
    let mut text = String::from(
        "Hi! I keep track of your bank cashbacks.\n\
         Send me a category (e.g. Food) and I'll tell you which card pays the most.\n\n",
    );
    if has_web_app {
        text.push_str("Tap the button below to add a cashback, or send a screenshot.\n\n");
    } else {
        text.push_str("Send a screenshot to read its text.\n\n");
    }
    text.push_str(&help_text());
    text
}

pub fn help_text() -> String {
    "Commands:\n\
     /add <bank>; <category>; <percent> - add a cashback\n\
     /list - show all your cashbacks\n\
     /reset - delete all your cashbacks\n\
     Any other text searches your categories."
        .to_string()
}

pub fn unknown_command_text(command: &str) -> String {
    format!("Unknown command /{}.\n\n{}", command, help_text())
}

/// Percent without a trailing `.0` for whole numbers.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn saved_text(cashback: &NewCashback) -> String {
    format!(
        "✅ Cashback saved!\n\n🏦 Bank: {}\n🏷 Category: {}\n📉 Percent: {}",
        cashback.bank,
        cashback.category,
        format_percent(cashback.percent)
    )
}

pub fn rejected_text(error: &IntakeError) -> String {
    match error {
        IntakeError::MissingField(field) => {
            format!("❌ Cashback not saved: {} is required.", field)
        }
        IntakeError::InvalidPercent(raw) => {
            format!("❌ Cashback not saved: \"{}\" is not a valid percent.", raw)
        }
        IntakeError::TooManyFields(_) => {
            "❌ Cashback not saved: use /add <bank>; <category>; <percent> with exactly three fields."
                .to_string()
        }
        IntakeError::InvalidPayload(_) => {
            "❌ Cashback not saved: the form data could not be read.".to_string()
        }
        IntakeError::UnknownPolicy(_) => MSG_GENERIC_FAILURE.to_string(),
    }
}

/// All cashbacks grouped under their bank. `rows` must already be ordered by bank.
pub fn list_text(rows: &[CashbackRow]) -> String {
    if rows.is_empty() {
        return MSG_NO_RECORDS.to_string();
    }

    let mut text = String::from("Your cashbacks:\n");
    let mut current_bank: Option<&str> = None;
    for row in rows {
        if current_bank != Some(row.bank.as_str()) {
            text.push_str(&format!("\n🏦 {}\n", row.bank));
            current_bank = Some(row.bank.as_str());
        }
        text.push_str(&format!("  • {}: {}\n", row.category, format_percent(row.percent)));
    }
    text.trim_end().to_string()
}

/// Ranked search results; the first row is the best offer.
pub fn search_text(query: &str, rows: &[CashbackRow]) -> String {
    let mut text = format!("Best cashback for \"{}\":\n", query);
    for (idx, row) in rows.iter().enumerate() {
        text.push_str(&format!(
            "\n{}. {} - {} ({})",
            idx + 1,
            row.bank,
            format_percent(row.percent),
            row.category
        ));
    }
    text
}

pub fn nothing_found_text(query: &str) -> String {
    format!("Nothing found for \"{}\".", query)
}

pub fn reset_text(deleted: u64) -> String {
    if deleted == 0 {
        "You had no cashbacks to delete.".to_string()
    } else {
        format!("🗑 Deleted {} cashback(s).", deleted)
    }
}

/// Joins recognized lines for display, truncated to [`OCR_TEXT_LIMIT`] characters.
/// Returns None when nothing was recognized.
pub fn ocr_text(lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }

    let joined = lines.join("\n");
    let body = if joined.chars().count() > OCR_TEXT_LIMIT {
        let truncated: String = joined.chars().take(OCR_TEXT_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        joined
    };
    Some(format!("Recognized text:\n\n{}", body))
}
