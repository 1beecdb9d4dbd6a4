use reqwest::{Client, RequestBuilder, Url};

use crate::api::{decode_json, ApiError, ApiRequest, Normalized, SiteList};
use crate::model::Id;

/// `GET /categories/{id}`: the sites stored under one category.
///
/// The reply is a [`SiteList`]: bare array or `{sites: [...]}` depending
/// on the backend version.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub category_id: Id,
}

impl ApiRequest for ListRequest {
    type Response = SiteList;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/categories/{}", self.category_id))
            .unwrap();
        client.get(full_url)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        decode_json(normalized)
    }
}
