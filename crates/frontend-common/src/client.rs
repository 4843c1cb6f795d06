//! Client configuration and initialization

use crate::config::AppConfig;
pub use sneakerdesk_http::ClientError;
use sneakerdesk_http::SneakerClient;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// Shared client instance; it carries no credentials, only connection config
static API_CLIENT: Lazy<Mutex<Option<SneakerClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the API client, building it on first use
pub fn api_client() -> Result<SneakerClient, ClientError> {
    let mut client_lock = API_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = SneakerClient::builder()
        .base_url(AppConfig::api_origin())
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
