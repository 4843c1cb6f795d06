//! Authentication API client methods

use super::{ClientError, SneakerClient};
use crate::types::Credentials;
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenField {
    token: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenBody {
    Enveloped { data: TokenField },
    Flat(TokenField),
}

impl TokenBody {
    fn into_token(self) -> Result<String, ClientError> {
        let (Self::Enveloped { data: field } | Self::Flat(field)) = self;
        field
            .token
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::MissingToken)
    }
}

impl SneakerClient {
    /// Exchange credentials for a session token
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let request = self.request(Method::POST, "/users/login").json(credentials);
        let body: TokenBody = self.execute(request).await?;
        body.into_token()
    }

    /// Create an account and return its first session token
    pub async fn signup(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let request = self.request(Method::POST, "/users/signup").json(credentials);
        let body: TokenBody = self.execute(request).await?;
        body.into_token()
    }
}
