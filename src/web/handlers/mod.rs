//! # Web API Request Handlers
//!
//! HTTP request handlers organized by functional area.

pub mod agent_card;
pub mod health;
pub mod jsonrpc;
