use reqwest::{Client, RequestBuilder, Url};

use crate::api::{decode_json, ApiError, ApiRequest, Normalized, SiteList};

/// `GET /sites`: every site across every category.
///
/// Backs the global search: searching fetches the full list fresh on each
/// term change and filters it in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAllRequest;

impl ApiRequest for ListAllRequest {
    type Response = SiteList;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/sites").unwrap();
        client.get(full_url)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        decode_json(normalized)
    }
}
