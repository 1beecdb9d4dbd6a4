use reqwest::{Client, RequestBuilder, Url};

use crate::api::{decode_json, ApiError, ApiRequest, Normalized};
use crate::model::Category;

/// `GET /categories`: every category, as a bare array.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRequest;

impl ApiRequest for ListRequest {
    type Response = Vec<Category>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/categories").unwrap();
        client.get(full_url)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        decode_json(normalized)
    }
}
