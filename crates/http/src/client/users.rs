//! User endpoint client methods

use super::{ClientError, SneakerClient};
use reqwest::Method;
use serde_json::Value;

const USERS_PATH: &str = "/users";

impl SneakerClient {
    /// Fetch the user listing visible to `token`
    pub async fn fetch_users(&self, token: &str) -> Result<Value, ClientError> {
        let request = self.authorized(Method::GET, USERS_PATH, token);
        self.execute(request).await
    }

    /// Check that the API still accepts `token`; the body is not read
    pub async fn verify_token(&self, token: &str) -> Result<(), ClientError> {
        let request = self.authorized(Method::GET, USERS_PATH, token);
        self.execute_status(request).await
    }
}
