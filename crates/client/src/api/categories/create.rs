use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiRequest, Normalized};

/// `POST /categories`: create a category.
///
/// The backend replies with the created category, an acknowledgement
/// string, or nothing; the reply is passed through undecoded and callers
/// re-list to observe the new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Name for the new category.
    pub name: String,
}

impl ApiRequest for CreateRequest {
    type Response = Normalized;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/categories").unwrap();
        client.post(full_url).json(&self)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        Ok(normalized)
    }
}
