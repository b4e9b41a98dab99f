//! Core domain + application logic for the secretaria finance chat bot.
//!
//! This crate is framework-agnostic. The messenger (Telegram) and the remote
//! finance service live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod finance;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod security;
pub mod service;

pub use errors::{AppError, Error, Result};
