//! Token-level parsing of finance command arguments.
//!
//! Every failure here is a user-facing [`AppError::bad_request`]; nothing in
//! this module talks to the finance service.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::AppError;

use super::types::{StatementPeriod, StatementRange, TransactionRequest, TransferRequest};

pub const TRANSACTION_SYNTAX: &str = "!p/!e <account_name> <amount><category> <description>";
pub const TRANSFER_SYNTAX: &str = "!t <transfer_from> <transfer_to> <amount> <description>";

pub const INVALID_COMMAND_MSG: &str = "Invalid command";
pub const INVALID_COMBINATION_MSG: &str = "Invalid amount and category combination";
pub const INVALID_AMOUNT_MSG: &str =
    "Invalid command's arguments.\nPlease recheck syntax and amount of transaction in the command";
pub const INVALID_FROM_DATE_MSG: &str = "Invalid command's arguments.\nPlease recheck the from_date, <statement> <from_date: 2022-01-01> <to_date: 2022-01-01>";
pub const INVALID_TO_DATE_MSG: &str = "Invalid command's arguments.\nPlease recheck the to_date, <statement> <from_date: 2022-01-01> <to_date: 2022-01-01>";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `200.50sh` -> amount `200.50`, category `sh`. The amount part is optional
/// in the pattern, so a letters-only token matches with an empty amount.
fn amount_category_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)?)?([a-zA-Z]+)$").expect("valid amount/category regex")
    })
}

/// `YYYY-MM-DD` with zero padding; chrono alone also takes `2022-1-1` or `+2022-01-01`.
fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
}

fn parse_date(raw: &str, invalid_msg: &str) -> Result<NaiveDate, AppError> {
    if !date_pattern().is_match(raw) {
        return Err(AppError::bad_request(invalid_msg));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| AppError::bad_request(invalid_msg))
}

/// Parse `<cmd> <account> <amount><category> [description...]`.
pub fn parse_transaction(tokens: &[String]) -> Result<TransactionRequest, AppError> {
    validate_length(tokens, 3, TRANSACTION_SYNTAX)?;

    let caps = amount_category_pattern()
        .captures(&tokens[2])
        .ok_or_else(|| AppError::bad_request(INVALID_COMBINATION_MSG))?;

    // Letters-only tokens reach this point with an empty amount and fail
    // the numeric parse, not the combination check.
    let amount_raw = caps.get(1).map_or("", |m| m.as_str());
    let category = caps.get(2).map_or("", |m| m.as_str());
    let amount = parse_amount(amount_raw)?;

    Ok(TransactionRequest {
        account: tokens[1].clone(),
        amount,
        category: category.to_string(),
        description: join_tail(tokens, 3),
    })
}

/// Parse `<cmd> <from> <to> <amount> [description...]`.
pub fn parse_transfer(tokens: &[String]) -> Result<TransferRequest, AppError> {
    validate_length(tokens, 4, TRANSFER_SYNTAX)?;

    let amount = parse_amount(&tokens[3])?;

    Ok(TransferRequest {
        from_account: tokens[1].clone(),
        to_account: tokens[2].clone(),
        amount,
        description: join_tail(tokens, 4),
    })
}

/// Select the statement period from the argument count:
/// `statement`, `statement m|a`, or `statement <from> <to>`.
pub fn parse_statement_period(tokens: &[String]) -> Result<StatementPeriod, AppError> {
    match tokens.len() {
        1 => Ok(StatementPeriod::Monthly),
        2 => match tokens[1].as_str() {
            "m" => Ok(StatementPeriod::Monthly),
            "a" => Ok(StatementPeriod::Annual),
            _ => Err(AppError::bad_request(INVALID_COMMAND_MSG)),
        },
        3 => {
            let from = parse_date(&tokens[1], INVALID_FROM_DATE_MSG)?;
            let to = parse_date(&tokens[2], INVALID_TO_DATE_MSG)?;
            Ok(StatementPeriod::Custom(StatementRange { from, to }))
        }
        _ => Err(AppError::bad_request(INVALID_COMMAND_MSG)),
    }
}

fn validate_length(tokens: &[String], min_len: usize, syntax: &str) -> Result<(), AppError> {
    if tokens.len() < min_len {
        return Err(AppError::bad_request(format!(
            "Invalid command's arguments.\nPlease recheck the syntax ({syntax})"
        )));
    }
    Ok(())
}

fn parse_amount(raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>()
        .map_err(|_| AppError::bad_request(INVALID_AMOUNT_MSG))
}

fn join_tail(tokens: &[String], from: usize) -> String {
    tokens.get(from..).map(|rest| rest.join(" ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatusKind;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn transaction_splits_fused_amount_and_category() {
        let req = parse_transaction(&toks("!p debit1 200.50sh lunch with team")).unwrap();
        assert_eq!(
            req,
            TransactionRequest {
                account: "debit1".to_string(),
                amount: 200.5,
                category: "sh".to_string(),
                description: "lunch with team".to_string(),
            }
        );
    }

    #[test]
    fn transaction_without_description() {
        let req = parse_transaction(&toks("!e debit1 20000s")).unwrap();
        assert_eq!(req.amount, 20000.0);
        assert_eq!(req.category, "s");
        assert_eq!(req.description, "");
    }

    #[test]
    fn transaction_requires_three_tokens() {
        for input in ["!p", "!p debit1"] {
            let err = parse_transaction(&toks(input)).unwrap_err();
            assert_eq!(err.kind(), StatusKind::BadRequest);
            assert_eq!(
                err.message(),
                "Invalid command's arguments.\nPlease recheck the syntax (!p/!e <account_name> <amount><category> <description>)"
            );
        }
    }

    #[test]
    fn transaction_without_category_is_a_bad_combination() {
        let err = parse_transaction(&toks("!p acct 200")).unwrap_err();
        assert_eq!(err.message(), "Invalid amount and category combination");
    }

    #[test]
    fn transaction_with_separator_or_trailing_digits_is_a_bad_combination() {
        for token in ["200-sh", "sh200", "200.sh", "200.5.1sh", ".5sh"] {
            let err = parse_transaction(&toks(&format!("!p acct {token}"))).unwrap_err();
            assert_eq!(err.message(), INVALID_COMBINATION_MSG, "token {token}");
        }
    }

    #[test]
    fn letters_only_token_fails_on_amount_not_combination() {
        let err = parse_transaction(&toks("!p acct food")).unwrap_err();
        assert_eq!(err.kind(), StatusKind::BadRequest);
        assert_eq!(err.message(), INVALID_AMOUNT_MSG);
    }

    #[test]
    fn transfer_parses_separate_amount() {
        let req = parse_transfer(&toks("!t debit1 credit1 1500.25 card bill")).unwrap();
        assert_eq!(
            req,
            TransferRequest {
                from_account: "debit1".to_string(),
                to_account: "credit1".to_string(),
                amount: 1500.25,
                description: "card bill".to_string(),
            }
        );
    }

    #[test]
    fn transfer_requires_four_tokens() {
        let err = parse_transfer(&toks("!t debit1 credit1")).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid command's arguments.\nPlease recheck the syntax (!t <transfer_from> <transfer_to> <amount> <description>)"
        );
    }

    #[test]
    fn transfer_rejects_non_numeric_amount() {
        let err = parse_transfer(&toks("!t debit1 credit1 lots")).unwrap_err();
        assert_eq!(err.message(), INVALID_AMOUNT_MSG);
    }

    #[test]
    fn negative_transfer_amount_is_left_to_the_service() {
        let req = parse_transfer(&toks("!t a b -5")).unwrap();
        assert_eq!(req.amount, -5.0);
    }

    #[test]
    fn statement_period_by_argument_count() {
        assert_eq!(
            parse_statement_period(&toks("statement")).unwrap(),
            StatementPeriod::Monthly
        );
        assert_eq!(
            parse_statement_period(&toks("statement m")).unwrap(),
            StatementPeriod::Monthly
        );
        assert_eq!(
            parse_statement_period(&toks("statement a")).unwrap(),
            StatementPeriod::Annual
        );

        let custom = parse_statement_period(&toks("statement 2022-01-01 2022-01-31")).unwrap();
        assert_eq!(
            custom,
            StatementPeriod::Custom(StatementRange {
                from: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
            })
        );
    }

    #[test]
    fn statement_rejects_unknown_period_and_extra_args() {
        for input in ["statement y", "statement 2022-01-01 2022-01-31 x"] {
            let err = parse_statement_period(&toks(input)).unwrap_err();
            assert_eq!(err.kind(), StatusKind::BadRequest);
            assert_eq!(err.message(), "Invalid command");
        }
    }

    #[test]
    fn statement_date_errors_name_the_field() {
        let from_err = parse_statement_period(&toks("statement 2022-13-01 2022-01-31")).unwrap_err();
        assert!(from_err.message().contains("from_date"));
        assert_eq!(from_err.message(), INVALID_FROM_DATE_MSG);

        let to_err = parse_statement_period(&toks("statement 2022-01-01 yesterday")).unwrap_err();
        assert!(to_err.message().contains("to_date"));
        assert_eq!(to_err.message(), INVALID_TO_DATE_MSG);
    }

    #[test]
    fn statement_dates_must_be_zero_padded_four_digit_years() {
        for bad in ["2022-1-1", "22-01-01", "+2022-01-01", "2022-01-1", "02022-01-01"] {
            let err = parse_statement_period(&toks(&format!("statement {bad} 2022-01-31")))
                .unwrap_err();
            assert_eq!(err.kind(), StatusKind::BadRequest, "{bad}");
            assert_eq!(err.message(), INVALID_FROM_DATE_MSG, "{bad}");

            let err = parse_statement_period(&toks(&format!("statement 2022-01-01 {bad}")))
                .unwrap_err();
            assert_eq!(err.kind(), StatusKind::BadRequest, "{bad}");
            assert_eq!(err.message(), INVALID_TO_DATE_MSG, "{bad}");
        }
    }

    #[test]
    fn statement_rejects_impossible_calendar_days() {
        let err = parse_statement_period(&toks("statement 2022-02-30 2022-03-01")).unwrap_err();
        assert_eq!(err.message(), INVALID_FROM_DATE_MSG);
    }
}
