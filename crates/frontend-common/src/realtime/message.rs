//! Messages carried by the push channel

use serde::{Deserialize, Serialize};
use sneakerdesk_http::Shoe;

/// A decoded push envelope: `{ "action": ..., "data": { ... } }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum PushMessage {
    /// Full snapshot of all orders
    Update { count: usize, shoes: Vec<Shoe> },
    /// A new order was placed
    Post { shoe: Shoe },
    /// An existing order changed status
    UpdateStatus { shoe: Shoe },
}

impl PushMessage {
    /// Actions this client knows how to apply
    pub const ACTIONS: [&'static str; 3] = ["update", "post", "updateStatus"];

    pub const fn action(&self) -> &'static str {
        match self {
            Self::Update { .. } => "update",
            Self::Post { .. } => "post",
            Self::UpdateStatus { .. } => "updateStatus",
        }
    }
}
