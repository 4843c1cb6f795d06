//! Live order updates over the push channel

#[cfg(target_arch = "wasm32")]
mod connection;
mod error;
mod message;
mod orders;
pub mod primus;

#[cfg(target_arch = "wasm32")]
pub use connection::LiveConnection;
pub use error::RealtimeError;
pub use message::PushMessage;
pub use orders::{Applied, OrderBook, OrderEvent};
