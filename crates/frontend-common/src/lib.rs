//! Shared client logic for SneakerDesk
//!
//! Everything between the views and the network: the persisted session,
//! the route guard, and live order state fed by the push channel.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod guard;
pub mod hooks;
pub mod realtime;
pub mod session;

pub use auth::{SessionContext, SessionProvider, use_session};
pub use client::api_client;
pub use config::AppConfig;
pub use guard::{Navigation, Route, TransitionTickets, authorize};
pub use realtime::{OrderBook, PushMessage};
pub use session::{Session, TokenStore};
