//! Models for the cashback storage layer.

mod cashback_record;
mod cashback_row;
mod new_cashback;

pub use cashback_record::{CashbackRecord, RecordId};
pub use cashback_row::CashbackRow;
pub use new_cashback::NewCashback;
