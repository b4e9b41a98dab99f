//! Finance commands: withdraw, deposit, transfer, balance, statement.

pub mod client;
pub mod handler;
pub mod parser;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::FinanceServiceClient;
pub use handler::FinanceHandler;
