use std::sync::Arc;

use async_trait::async_trait;
use tracing::Span;

use crate::{
    errors::AppError,
    formatting::{
        render_balance, render_statement, render_transaction, render_transfer, TransactionKind,
    },
    ports::CommandHandler,
};

use super::{
    client::FinanceServiceClient,
    parser::{parse_statement_period, parse_transaction, parse_transfer, INVALID_COMMAND_MSG},
    types::StatementPeriod,
};

/// Keywords owned by the finance handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinanceCommand {
    Withdraw,
    Deposit,
    Transfer,
    Balance,
    Statement,
}

impl FinanceCommand {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "!p" => Some(Self::Withdraw),
            "!e" => Some(Self::Deposit),
            "!t" => Some(Self::Transfer),
            "balance" => Some(Self::Balance),
            "statement" => Some(Self::Statement),
            _ => None,
        }
    }
}

/// Command handler for the finance keywords.
///
/// Parses arguments, calls the finance service and renders the reply.
/// Service failures are returned unchanged.
pub struct FinanceHandler {
    client: Arc<dyn FinanceServiceClient>,
    span: Span,
}

impl FinanceHandler {
    pub fn new(client: Arc<dyn FinanceServiceClient>, span: Span) -> Self {
        Self { client, span }
    }

    async fn transaction(
        &self,
        kind: TransactionKind,
        tokens: &[String],
    ) -> Result<String, AppError> {
        let req = parse_transaction(tokens).inspect_err(|e| self.log_parse_failure(tokens, e))?;
        let res = match kind {
            TransactionKind::Withdraw => self.client.withdraw(&req).await?,
            TransactionKind::Deposit => self.client.deposit(&req).await?,
        };
        Ok(render_transaction(kind, &res))
    }

    async fn transfer(&self, tokens: &[String]) -> Result<String, AppError> {
        let req = parse_transfer(tokens).inspect_err(|e| self.log_parse_failure(tokens, e))?;
        let res = self.client.transfer(&req).await?;
        Ok(render_transfer(&res))
    }

    async fn balance(&self) -> Result<String, AppError> {
        let report = self.client.get_balance().await?;
        Ok(render_balance(&report))
    }

    async fn statement(&self, tokens: &[String]) -> Result<String, AppError> {
        let period =
            parse_statement_period(tokens).inspect_err(|e| self.log_parse_failure(tokens, e))?;
        let report = match &period {
            StatementPeriod::Monthly => self.client.get_overview_monthly_statement().await?,
            StatementPeriod::Annual => self.client.get_overview_annual_statement().await?,
            StatementPeriod::Custom(range) => self.client.get_overview_statement(range).await?,
        };
        Ok(render_statement(&report, period.label()))
    }

    fn log_parse_failure(&self, tokens: &[String], err: &AppError) {
        let command = tokens.first().map(String::as_str).unwrap_or("");
        let args = tokens.get(1..).unwrap_or_default();
        tracing::warn!(
            parent: &self.span,
            command,
            ?args,
            "rejected finance command: {}",
            err.message().replace('\n', " ")
        );
    }
}

#[async_trait]
impl CommandHandler for FinanceHandler {
    fn matches(&self, command: &str) -> bool {
        FinanceCommand::from_keyword(command).is_some()
    }

    async fn handle(&self, tokens: &[String]) -> Result<String, AppError> {
        let Some(command) = tokens.first().and_then(|k| FinanceCommand::from_keyword(k)) else {
            return Err(AppError::bad_request(INVALID_COMMAND_MSG));
        };

        match command {
            FinanceCommand::Withdraw => self.transaction(TransactionKind::Withdraw, tokens).await,
            FinanceCommand::Deposit => self.transaction(TransactionKind::Deposit, tokens).await,
            FinanceCommand::Transfer => self.transfer(tokens).await,
            FinanceCommand::Balance => self.balance().await,
            FinanceCommand::Statement => self.statement(tokens).await,
        }
    }
}
