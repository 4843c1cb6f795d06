//! Client-side session: the bearer token and how it is kept

mod store;
mod token_store;

pub use store::Session;
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};
