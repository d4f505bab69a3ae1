//! HTTP gateway for devdict: the A2A JSON-RPC endpoint, the Telex webhook,
//! and health routes.
//!
//! Lifecycle:
//! 1. Load config
//! 2. Wire services (provider chain + Telex client)
//! 3. Bind and serve
//!
//! The lookup logic itself lives in `devdict-lookup`; handlers reach it
//! through the service seams in `services.rs`.

pub mod a2a;
pub mod server;
pub mod services;
pub mod telex_routes;

pub use {
    server::{build_app, start_gateway},
    services::GatewayServices,
};
