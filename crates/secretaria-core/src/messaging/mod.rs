//! Messenger-agnostic inbound/outbound plumbing.

pub mod inbound;
pub mod port;
pub mod types;
