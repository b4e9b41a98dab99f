//! Reply text rendering for finance results.
//!
//! The layouts (including the `Succesfully` spelling and the baht sign) are
//! what users already see in their chat history; keep them byte-for-byte.

use std::fmt::Write as _;

use crate::finance::types::{
    BalanceReport, StatementReport, StatementSection, TransactionResponse, TransferResponse,
};

/// Thai baht sign prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "฿";

const RULE: &str = "================";

/// Which side of a transaction a reply describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Withdraw,
    Deposit,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Deposit => "deposit",
        }
    }
}

/// Shortest decimal representation (`25000`, `200.5`), no trailing `.0`.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

pub fn render_transaction(kind: TransactionKind, res: &TransactionResponse) -> String {
    render_result(kind.as_str(), &res.account, res.balance)
}

pub fn render_transfer(res: &TransferResponse) -> String {
    render_result("transfer", &res.from_account, res.balance)
}

fn render_result(action: &str, account: &str, balance: f64) -> String {
    format!(
        "Succesfully {action}\n{RULE}\nResult\nAccount: {account}\nBalance: {CURRENCY_SYMBOL}{}",
        format_amount(balance)
    )
}

/// One line per account, in the order the finance service returned them.
pub fn render_balance(report: &BalanceReport) -> String {
    let mut out = String::from("Your balance\n\n");
    for acc in &report.accounts {
        let _ = writeln!(
            out,
            "Account: {} => Balance: {CURRENCY_SYMBOL}{}",
            acc.account,
            format_amount(acc.balance)
        );
    }
    out
}

/// Render an overview statement under `label` (`Monthly`, `Annual`, `Income`).
///
/// Missing revenue/expense sections render as a zero total with no entries.
pub fn render_statement(report: &StatementReport, label: &str) -> String {
    let empty = StatementSection::default();
    let revenue = report.revenue.as_ref().unwrap_or(&empty);
    let expense = report.expense.as_ref().unwrap_or(&empty);

    let mut out = format!("{label} Statement\n{RULE}\n");
    write_section(&mut out, "Revenue", revenue);
    out.push('\n');
    write_section(&mut out, "Expense", expense);
    out.push('\n');
    let _ = write!(
        out,
        "Profit: {CURRENCY_SYMBOL}{}",
        format_amount(report.profit)
    );
    out
}

fn write_section(out: &mut String, title: &str, section: &StatementSection) {
    let _ = writeln!(
        out,
        "{title}: {CURRENCY_SYMBOL}{}",
        format_amount(section.total)
    );
    for entry in &section.entries {
        let _ = writeln!(
            out,
            "{} = {CURRENCY_SYMBOL}{}",
            entry.category,
            format_amount(entry.amount)
        );
    }
}
