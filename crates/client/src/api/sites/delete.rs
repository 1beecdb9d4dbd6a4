use reqwest::{Client, RequestBuilder, Url};

use crate::api::{ApiError, ApiRequest, Normalized};
use crate::model::Id;

/// `DELETE /sites/{id}`: delete one site. Note the path, sites are
/// deleted under `/sites/`, not under their category.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub id: Id,
}

impl ApiRequest for DeleteRequest {
    type Response = Normalized;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join(&format!("/sites/{}", self.id)).unwrap();
        client.delete(full_url)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        Ok(normalized)
    }
}
