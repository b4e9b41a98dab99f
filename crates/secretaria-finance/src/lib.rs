//! Finance service adapter (HTTP + JSON).
//!
//! Implements the core `FinanceServiceClient` port. Every failure on the way
//! (transport, non-2xx status, undecodable body) is reported as a bad-gateway
//! `AppError` prefixed with what the bot was trying to do.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::Span;

use secretaria_core::{
    errors::{AppError, Error},
    finance::{
        client::FinanceServiceClient,
        types::{
            BalanceReport, StatementRange, StatementReport, TransactionRequest,
            TransactionResponse, TransferRequest, TransferResponse,
        },
    },
    Result,
};

const BODY_SNIPPET_CHARS: usize = 200;

/// One remote operation: where it lives and how its failures are worded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub action: &'static str,
}

pub const WITHDRAW: Endpoint = Endpoint {
    method: "POST",
    path: "/transactions/withdraw",
    action: "cannot withdraw money",
};
pub const DEPOSIT: Endpoint = Endpoint {
    method: "POST",
    path: "/transactions/deposit",
    action: "cannot deposit money",
};
pub const TRANSFER: Endpoint = Endpoint {
    method: "POST",
    path: "/transactions/transfer",
    action: "cannot transfer money",
};
pub const BALANCE: Endpoint = Endpoint {
    method: "GET",
    path: "/balance",
    action: "cannot get balance",
};
pub const OVERVIEW_STATEMENT: Endpoint = Endpoint {
    method: "POST",
    path: "/statements/overview",
    action: "cannot get overview statement",
};
pub const MONTHLY_STATEMENT: Endpoint = Endpoint {
    method: "GET",
    path: "/statements/overview/monthly",
    action: "cannot get monthly overview statement",
};
pub const ANNUAL_STATEMENT: Endpoint = Endpoint {
    method: "GET",
    path: "/statements/overview/annual",
    action: "cannot get annual overview statement",
};

#[derive(Clone, Debug)]
pub struct FinanceHttpClient {
    base_url: String,
    http: reqwest::Client,
    span: Span,
}

impl FinanceHttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, span: Span) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("finance http client build error: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            span,
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    async fn call<Req, Res>(
        &self,
        endpoint: Endpoint,
        body: Option<&Req>,
    ) -> std::result::Result<Res, AppError>
    where
        Req: Serialize + Sync + ?Sized,
        Res: DeserializeOwned,
    {
        self.try_call(&endpoint, body)
            .await
            .map_err(|cause| self.fail(&endpoint, cause))
    }

    async fn try_call<Req, Res>(
        &self,
        endpoint: &Endpoint,
        body: Option<&Req>,
    ) -> std::result::Result<Res, String>
    where
        Req: Serialize + Sync + ?Sized,
        Res: DeserializeOwned,
    {
        let method = Method::from_bytes(endpoint.method.as_bytes()).map_err(|e| e.to_string())?;
        let mut req = self.http.request(method, self.url(endpoint));
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!(
                "{status} {}",
                body.chars().take(BODY_SNIPPET_CHARS).collect::<String>()
            )
            .trim_end()
            .to_string());
        }

        resp.json::<Res>().await.map_err(|e| e.to_string())
    }

    fn fail(&self, endpoint: &Endpoint, cause: String) -> AppError {
        let err = wrap_failure(endpoint, &cause);
        tracing::error!(
            parent: &self.span,
            path = endpoint.path,
            "{}",
            err.message()
        );
        err
    }
}

/// `<action>: <cause>` as a bad-gateway error.
pub fn wrap_failure(endpoint: &Endpoint, cause: &str) -> AppError {
    AppError::bad_gateway(format!("{}: {cause}", endpoint.action))
}

#[async_trait]
impl FinanceServiceClient for FinanceHttpClient {
    async fn withdraw(
        &self,
        req: &TransactionRequest,
    ) -> std::result::Result<TransactionResponse, AppError> {
        self.call(WITHDRAW, Some(req)).await
    }

    async fn deposit(
        &self,
        req: &TransactionRequest,
    ) -> std::result::Result<TransactionResponse, AppError> {
        self.call(DEPOSIT, Some(req)).await
    }

    async fn transfer(
        &self,
        req: &TransferRequest,
    ) -> std::result::Result<TransferResponse, AppError> {
        self.call(TRANSFER, Some(req)).await
    }

    async fn get_balance(&self) -> std::result::Result<BalanceReport, AppError> {
        self.call::<(), _>(BALANCE, None).await
    }

    async fn get_overview_statement(
        &self,
        range: &StatementRange,
    ) -> std::result::Result<StatementReport, AppError> {
        self.call(OVERVIEW_STATEMENT, Some(range)).await
    }

    async fn get_overview_monthly_statement(
        &self,
    ) -> std::result::Result<StatementReport, AppError> {
        self.call::<(), _>(MONTHLY_STATEMENT, None).await
    }

    async fn get_overview_annual_statement(
        &self,
    ) -> std::result::Result<StatementReport, AppError> {
        self.call::<(), _>(ANNUAL_STATEMENT, None).await
    }
}
