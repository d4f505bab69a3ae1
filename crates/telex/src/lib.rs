//! Telex channel adapter for devdict.
//!
//! Wire types for inbound webhook events and the outbound message client
//! that pushes formatted replies back into a Telex channel.

pub mod config;
pub mod error;
pub mod outbound;
pub mod types;

pub use {
    config::TelexConfig,
    error::{Error, Result},
    outbound::{TelexOutbound, TelexSender},
    types::WebhookEvent,
};
