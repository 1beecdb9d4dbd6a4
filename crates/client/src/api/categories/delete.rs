use reqwest::{Client, RequestBuilder, Url};

use crate::api::{ApiError, ApiRequest, Normalized};
use crate::model::Id;

/// `DELETE /categories/{id}`: delete a category.
///
/// The backend cascades the delete to every site in the category; the
/// client assumes that and never verifies it.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub id: Id,
}

impl ApiRequest for DeleteRequest {
    type Response = Normalized;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/categories/{}", self.id))
            .unwrap();
        client.delete(full_url)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        Ok(normalized)
    }
}
