use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;

use super::{client::FinanceServiceClient, types::*};

#[derive(Clone, Debug, PartialEq)]
pub enum FinanceCall {
    Withdraw(TransactionRequest),
    Deposit(TransactionRequest),
    Transfer(TransferRequest),
    Balance,
    Statement(StatementRange),
    MonthlyStatement,
    AnnualStatement,
}

/// In-memory finance service: records every call and answers with canned
/// responses (or a single canned error for every call).
#[derive(Default)]
pub struct FakeFinance {
    calls: Mutex<Vec<FinanceCall>>,
    transaction: Option<TransactionResponse>,
    transfer: Option<TransferResponse>,
    balance: Option<BalanceReport>,
    statement: Option<StatementReport>,
    error: Option<AppError>,
}

impl FakeFinance {
    pub fn with_transaction(mut self, res: TransactionResponse) -> Self {
        self.transaction = Some(res);
        self
    }

    pub fn with_transfer(mut self, res: TransferResponse) -> Self {
        self.transfer = Some(res);
        self
    }

    pub fn with_balance(mut self, res: BalanceReport) -> Self {
        self.balance = Some(res);
        self
    }

    pub fn with_statement(mut self, res: StatementReport) -> Self {
        self.statement = Some(res);
        self
    }

    pub fn failing(mut self, err: AppError) -> Self {
        self.error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<FinanceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, call: FinanceCall, canned: &Option<T>) -> Result<T, AppError> {
        self.calls.lock().unwrap().push(call);
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        canned
            .clone()
            .ok_or_else(|| AppError::internal("no canned response"))
    }
}

#[async_trait]
impl FinanceServiceClient for FakeFinance {
    async fn withdraw(&self, req: &TransactionRequest) -> Result<TransactionResponse, AppError> {
        self.answer(FinanceCall::Withdraw(req.clone()), &self.transaction)
    }

    async fn deposit(&self, req: &TransactionRequest) -> Result<TransactionResponse, AppError> {
        self.answer(FinanceCall::Deposit(req.clone()), &self.transaction)
    }

    async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, AppError> {
        self.answer(FinanceCall::Transfer(req.clone()), &self.transfer)
    }

    async fn get_balance(&self) -> Result<BalanceReport, AppError> {
        self.answer(FinanceCall::Balance, &self.balance)
    }

    async fn get_overview_statement(
        &self,
        range: &StatementRange,
    ) -> Result<StatementReport, AppError> {
        self.answer(FinanceCall::Statement(*range), &self.statement)
    }

    async fn get_overview_monthly_statement(&self) -> Result<StatementReport, AppError> {
        self.answer(FinanceCall::MonthlyStatement, &self.statement)
    }

    async fn get_overview_annual_statement(&self) -> Result<StatementReport, AppError> {
        self.answer(FinanceCall::AnnualStatement, &self.statement)
    }
}
