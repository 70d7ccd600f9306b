//! Proxy relay between the Deus Movies client and the upstream rent-store API
//!
//! Every inbound call is re-issued once to the configured upstream origin,
//! with the caller's `Authorization` header forwarded untouched.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::ProxyConfig;
pub use routes::create_router;
pub use state::AppState;
