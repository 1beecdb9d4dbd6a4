mod client;
mod error;
mod normalize;

pub mod categories;
pub mod sites;

pub use client::ApiClient;
pub use error::ApiError;
pub use normalize::{decode_json, Normalized, SiteList};

use reqwest::{Client, RequestBuilder};
use url::Url;

/// One backend endpoint: a fixed path + method + body combination.
///
/// `build_request` pins the wire shape; `decode` resolves the normalized
/// reply into whatever the endpoint promises. List endpoints decode JSON
/// into typed vectors, mutation endpoints pass the acknowledgement through
/// untouched because this backend answers some of them with bare text or
/// nothing at all.
pub trait ApiRequest {
    type Response;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;

    fn decode(normalized: Normalized) -> Result<Self::Response, ApiError>;
}
