//! Shoe order client methods

use super::{ClientError, SneakerClient};
use crate::types::Shoe;
use reqwest::Method;
use serde::Deserialize;

const SHOES_PATH: &str = "/api/v1/shoes";

/// The listing has been served bare and wrapped over time; accept all shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ShoeListBody {
    Bare(Vec<Shoe>),
    Wrapped { shoes: Vec<Shoe> },
    Enveloped { data: ShoeListData },
}

#[derive(Deserialize)]
struct ShoeListData {
    shoes: Vec<Shoe>,
}

impl From<ShoeListBody> for Vec<Shoe> {
    fn from(body: ShoeListBody) -> Self {
        match body {
            ShoeListBody::Bare(shoes)
            | ShoeListBody::Wrapped { shoes }
            | ShoeListBody::Enveloped {
                data: ShoeListData { shoes },
            } => shoes,
        }
    }
}

impl SneakerClient {
    /// Fetch every shoe order
    pub async fn fetch_shoes(&self, token: &str) -> Result<Vec<Shoe>, ClientError> {
        let request = self.authorized(Method::GET, SHOES_PATH, token);
        let body: ShoeListBody = self.execute(request).await?;
        Ok(body.into())
    }
}
