//! Best-match ranking: substring filter on category, percent descending.
//!
//! Matching is case-sensitive (`str::contains`). The sort is stable, so rows with the
//! same percent keep the order they were given in.

use std::cmp::Ordering;

use crate::models::CashbackRow;

/// Returns the rows whose category contains `query`, highest percent first.
///
/// An empty query matches every row.
pub fn best_matches(rows: Vec<CashbackRow>, query: &str) -> Vec<CashbackRow> {
    let mut matches: Vec<CashbackRow> = rows
        .into_iter()
        .filter(|row| row.category.contains(query))
        .collect();
    matches.sort_by(by_percent_desc);
    matches
}

fn by_percent_desc(a: &CashbackRow, b: &CashbackRow) -> Ordering {
    b.percent.total_cmp(&a.percent)
}
