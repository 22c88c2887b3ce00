//! Validation of insert requests before they reach the store.
//!
//! Bank and category must be present and not blank; they are otherwise passed through
//! untouched. Percent may arrive as a JSON number or a string; what happens when it does not
//! parse is decided by [`PercentPolicy`].

use std::fmt;
use std::str::FromStr;

use cashback_storage::NewCashback;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;

/// Separator between the fields of `/add <bank>; <category>; <percent>`.
pub const ADD_ARGS_SEPARATOR: char = ';';

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("percent \"{0}\" is not a number")]
    InvalidPercent(String),

    #[error("expected at most 3 fields separated by ';', got {0}")]
    TooManyFields(usize),

    #[error("web app data is not valid JSON: {0}")]
    InvalidPayload(String),

    #[error("unknown percent policy \"{0}\" (expected coerce or reject)")]
    UnknownPolicy(String),
}

/// What to do with a percent that cannot be parsed as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentPolicy {
    /// Store 0.0 instead.
    #[default]
    Coerce,
    /// Refuse the insert and tell the user.
    Reject,
}

impl FromStr for PercentPolicy {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coerce" => Ok(Self::Coerce),
            "reject" => Ok(Self::Reject),
            other => Err(IntakeError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PercentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coerce => write!(f, "coerce"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// JSON submitted by the add-cashback web app: `{"bank": ..., "category": ..., "percent": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CashbackPayload {
    pub bank: Option<String>,
    pub category: Option<String>,
    pub percent: Option<Value>,
}

impl CashbackPayload {
    pub fn into_new_cashback(
        self,
        user_id: i64,
        policy: PercentPolicy,
    ) -> Result<NewCashback, IntakeError> {
        let bank = required(self.bank, "bank")?;
        let category = required(self.category, "category")?;
        let percent = parse_percent(self.percent.as_ref(), policy)?;
        Ok(NewCashback::new(user_id, bank, category, percent))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, IntakeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(IntakeError::MissingField(field)),
    }
}

/// Parses a percent from a JSON value.
///
/// Numbers are taken as is. Strings are trimmed, may end with `%`, and may use `,` as the
/// decimal separator. Anything else (missing, null, non-numeric text, NaN, infinity) is
/// unparseable and handled by `policy`.
pub fn parse_percent(raw: Option<&Value>, policy: PercentPolicy) -> Result<f64, IntakeError> {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_percent_text(s),
        _ => None,
    };

    match (parsed, policy) {
        (Some(p), _) => Ok(p),
        (None, PercentPolicy::Coerce) => Ok(0.0),
        (None, PercentPolicy::Reject) => Err(IntakeError::InvalidPercent(describe(raw))),
    }
}

fn parse_percent_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

fn describe(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Web-app JSON as received. `percent` stays raw so an out-of-range number cannot fail the
/// whole payload.
#[derive(Deserialize)]
struct RawCashbackPayload {
    bank: Option<String>,
    category: Option<String>,
    percent: Option<Box<RawValue>>,
}

/// The raw percent as a JSON value. Numbers f64 cannot hold become their text, which then
/// fails to parse like any other bad percent.
fn raw_percent(raw: &RawValue) -> Value {
    serde_json::from_str(raw.get()).unwrap_or_else(|_| Value::String(raw.get().to_string()))
}

/// Parses the raw web-app payload string into an insert.
pub fn parse_web_app_data(
    user_id: i64,
    data: &str,
    policy: PercentPolicy,
) -> Result<NewCashback, IntakeError> {
    let raw: RawCashbackPayload =
        serde_json::from_str(data).map_err(|e| IntakeError::InvalidPayload(e.to_string()))?;
    let payload = CashbackPayload {
        bank: raw.bank,
        category: raw.category,
        percent: raw.percent.as_deref().map(raw_percent),
    };
    payload.into_new_cashback(user_id, policy)
}

/// Parses the arguments of `/add <bank>; <category>; <percent>`.
///
/// Fields are trimmed around the separators. The percent field may be omitted, in which case
/// `policy` applies as for any unparseable percent. More than three fields is an error.
pub fn parse_add_args(
    user_id: i64,
    args: &str,
    policy: PercentPolicy,
) -> Result<NewCashback, IntakeError> {
    let field_count = args.split(ADD_ARGS_SEPARATOR).count();
    if field_count > 3 {
        return Err(IntakeError::TooManyFields(field_count));
    }
    let mut parts = args.split(ADD_ARGS_SEPARATOR).map(str::trim);
    let payload = CashbackPayload {
        bank: parts.next().map(str::to_string),
        category: parts.next().map(str::to_string),
        percent: parts.next().map(|p| Value::String(p.to_string())),
    };
    payload.into_new_cashback(user_id, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_percent_numbers_and_strings() {
        let policy = PercentPolicy::Reject;
        assert_eq!(parse_percent(Some(&json!(5)), policy), Ok(5.0));
        assert_eq!(parse_percent(Some(&json!(7.5)), policy), Ok(7.5));
        assert_eq!(parse_percent(Some(&json!("3")), policy), Ok(3.0));
        assert_eq!(parse_percent(Some(&json!(" 4.5 ")), policy), Ok(4.5));
        assert_eq!(parse_percent(Some(&json!("5,5")), policy), Ok(5.5));
        assert_eq!(parse_percent(Some(&json!("10%")), policy), Ok(10.0));
        assert_eq!(parse_percent(Some(&json!("-2")), policy), Ok(-2.0));
        assert_eq!(parse_percent(Some(&json!("250")), policy), Ok(250.0));
    }

    #[test]
    fn test_parse_percent_coerces_garbage_to_zero() {
        let policy = PercentPolicy::Coerce;
        assert_eq!(parse_percent(Some(&json!("not-a-number")), policy), Ok(0.0));
        assert_eq!(parse_percent(Some(&json!("")), policy), Ok(0.0));
        assert_eq!(parse_percent(Some(&json!("NaN")), policy), Ok(0.0));
        assert_eq!(parse_percent(Some(&json!("inf")), policy), Ok(0.0));
        assert_eq!(parse_percent(Some(&json!(null)), policy), Ok(0.0));
        assert_eq!(parse_percent(Some(&json!(true)), policy), Ok(0.0));
        assert_eq!(parse_percent(None, policy), Ok(0.0));
    }

    #[test]
    fn test_parse_percent_reject_policy() {
        assert_eq!(
            parse_percent(Some(&json!("not-a-number")), PercentPolicy::Reject),
            Err(IntakeError::InvalidPercent("not-a-number".to_string()))
        );
        assert!(parse_percent(None, PercentPolicy::Reject).is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("coerce".parse::<PercentPolicy>(), Ok(PercentPolicy::Coerce));
        assert_eq!(" REJECT ".parse::<PercentPolicy>(), Ok(PercentPolicy::Reject));
        assert!("strict".parse::<PercentPolicy>().is_err());
        assert_eq!(PercentPolicy::default(), PercentPolicy::Coerce);
        assert_eq!(PercentPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_parse_web_app_data() {
        let cashback = parse_web_app_data(
            2,
            r#"{"bank":"Gamma","category":"Taxi","percent":"not-a-number"}"#,
            PercentPolicy::Coerce,
        )
        .unwrap();

        assert_eq!(cashback, NewCashback::new(2, "Gamma", "Taxi", 0.0));
    }

    #[test]
    fn test_parse_web_app_data_keeps_labels_verbatim() {
        let cashback = parse_web_app_data(
            1,
            r#"{"bank":" Alpha ","category":"fast Food","percent":5}"#,
            PercentPolicy::Reject,
        )
        .unwrap();

        assert_eq!(cashback.bank, " Alpha ");
        assert_eq!(cashback.category, "fast Food");
        assert_eq!(cashback.percent, 5.0);
    }

    #[test]
    fn test_parse_web_app_data_missing_fields() {
        assert_eq!(
            parse_web_app_data(1, r#"{"category":"Taxi","percent":5}"#, PercentPolicy::Coerce),
            Err(IntakeError::MissingField("bank"))
        );
        assert_eq!(
            parse_web_app_data(1, r#"{"bank":"Alpha","category":"  ","percent":5}"#, PercentPolicy::Coerce),
            Err(IntakeError::MissingField("category"))
        );
        assert!(matches!(
            parse_web_app_data(1, "not json", PercentPolicy::Coerce),
            Err(IntakeError::InvalidPayload(_))
        ));
    }

    /// **Test: a fourth field is refused, never folded into the percent.**
    #[test]
    fn test_parse_add_args_extra_fields() {
        assert_eq!(
            parse_add_args(1, "Alpha; Food; 5; 6", PercentPolicy::Coerce),
            Err(IntakeError::TooManyFields(4))
        );
        assert_eq!(
            parse_add_args(1, "Alpha; Food; 5;", PercentPolicy::Coerce),
            Err(IntakeError::TooManyFields(4))
        );
    }

    /// **Test: a number too large for f64 is an unparseable percent, not a broken payload.**
    #[test]
    fn test_parse_web_app_data_out_of_range_percent() {
        let data = r#"{"bank":"A","category":"Taxi","percent":1e400}"#;

        assert_eq!(
            parse_web_app_data(1, data, PercentPolicy::Coerce),
            Ok(NewCashback::new(1, "A", "Taxi", 0.0))
        );
        assert_eq!(
            parse_web_app_data(1, data, PercentPolicy::Reject),
            Err(IntakeError::InvalidPercent("1e400".to_string()))
        );
        assert_eq!(
            parse_web_app_data(1, r#"{"bank":"A","category":"Taxi","percent":null}"#, PercentPolicy::Coerce),
            Ok(NewCashback::new(1, "A", "Taxi", 0.0))
        );
    }

    #[test]
    fn test_parse_add_args() {
        assert_eq!(
            parse_add_args(1, "Alpha; Fast Food; 5", PercentPolicy::Reject),
            Ok(NewCashback::new(1, "Alpha", "Fast Food", 5.0))
        );
        assert_eq!(
            parse_add_args(1, "Alpha;Taxi", PercentPolicy::Coerce),
            Ok(NewCashback::new(1, "Alpha", "Taxi", 0.0))
        );
        assert_eq!(
            parse_add_args(1, "Alpha", PercentPolicy::Coerce),
            Err(IntakeError::MissingField("category"))
        );
        assert_eq!(
            parse_add_args(1, "", PercentPolicy::Coerce),
            Err(IntakeError::MissingField("bank"))
        );
    }
}
