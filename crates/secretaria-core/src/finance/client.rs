use async_trait::async_trait;

use crate::errors::AppError;

use super::types::*;

/// Port to the external finance accounting service.
///
/// Implementations own failure classification: an unreachable service is
/// reported as [`AppError::bad_gateway`], and callers pass errors through
/// untouched.
#[async_trait]
pub trait FinanceServiceClient: Send + Sync {
    async fn withdraw(&self, req: &TransactionRequest) -> Result<TransactionResponse, AppError>;
    async fn deposit(&self, req: &TransactionRequest) -> Result<TransactionResponse, AppError>;
    async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, AppError>;
    async fn get_balance(&self) -> Result<BalanceReport, AppError>;
    async fn get_overview_statement(
        &self,
        range: &StatementRange,
    ) -> Result<StatementReport, AppError>;
    async fn get_overview_monthly_statement(&self) -> Result<StatementReport, AppError>;
    async fn get_overview_annual_statement(&self) -> Result<StatementReport, AppError>;
}
