use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Withdraw/deposit request, built from `<account> <amount><category> [description...]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub account: String,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub account: String,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub from_account: String,
    pub balance: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    #[serde(default)]
    pub accounts: Vec<AccountBalance>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    pub balance: f64,
}

/// Inclusive custom statement range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Revenue/expense/profit overview.
///
/// Either section may be missing in the remote response; renderers treat a
/// missing section as zero total with no entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementReport {
    #[serde(default)]
    pub revenue: Option<StatementSection>,
    #[serde(default)]
    pub expense: Option<StatementSection>,
    #[serde(default)]
    pub profit: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSection {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub entries: Vec<CategorizedEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorizedEntry {
    pub category: String,
    pub amount: f64,
}

/// Which overview the `statement` command asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementPeriod {
    Monthly,
    Annual,
    Custom(StatementRange),
}

impl StatementPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            StatementPeriod::Monthly => "Monthly",
            StatementPeriod::Annual => "Annual",
            StatementPeriod::Custom(_) => "Income",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_sections_may_be_absent() {
        let report: StatementReport = serde_json::from_str(r#"{"profit": 12.5}"#).unwrap();
        assert_eq!(report.revenue, None);
        assert_eq!(report.expense, None);
        assert_eq!(report.profit, 12.5);
    }

    #[test]
    fn empty_description_is_not_serialized() {
        let req = TransactionRequest {
            account: "debit1".to_string(),
            amount: 20.0,
            category: "s".to_string(),
            description: String::new(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("description").is_none());
    }

    #[test]
    fn range_serializes_as_iso_dates() {
        let range = StatementRange {
            from: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"from":"2022-01-01","to":"2022-01-31"}"#
        );
    }
}
