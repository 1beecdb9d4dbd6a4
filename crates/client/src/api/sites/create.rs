use reqwest::{Client, RequestBuilder, Url};

use crate::api::{ApiError, ApiRequest, Normalized};
use crate::model::{Id, SiteDraft};

/// `POST /categories/{id}`: add a site to a category.
///
/// The body is the draft alone; the category travels in the path and the
/// backend assigns id and creation time.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub category_id: Id,
    pub draft: SiteDraft,
}

impl ApiRequest for CreateRequest {
    type Response = Normalized;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/categories/{}", self.category_id))
            .unwrap();
        client.post(full_url).json(&self.draft)
    }

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError> {
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_the_draft_without_category() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let client = Client::new();
        let request = CreateRequest {
            category_id: Id::from(4),
            draft: SiteDraft::for_url("github.com", "bob", "hunter2", "work"),
        }
        .build_request(&base, &client)
        .build()
        .unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(request.url().path(), "/categories/4");

        let body: serde_json::Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "github.com",
                "url": "github.com",
                "user": "bob",
                "password": "hunter2",
                "description": "work"
            })
        );
    }
}
