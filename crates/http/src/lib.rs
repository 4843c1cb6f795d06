//! SneakerDesk HTTP module
//!
//! Wire types shared with the sneaker order API and a typed client for the
//! handful of endpoints the web client talks to.

pub mod client;
pub mod types;

pub use client::{SneakerClient, SneakerClientBuilder, error::ClientError};
pub use types::{Credentials, Shoe, ShoeId};
