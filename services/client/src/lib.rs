//! Terminal client for the Deus Movies rent store
//!
//! Provides the login, browse, profile and admin screens on top of the
//! proxy relay, with the bearer token kept in a local token file.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod router;
pub mod screens;
pub mod session;
pub mod widgets;

pub use app::App;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use router::View;
pub use session::{Session, SessionStore};
