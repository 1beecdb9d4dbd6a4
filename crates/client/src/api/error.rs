use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response: connection refused,
    /// DNS failure, or the connection died mid-body.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    /// The backend answered outside the 2xx range. `reason` is the
    /// canonical reason phrase for the code ("Not Found" for 404); empty
    /// for codes without one.
    #[error("API error: {status}")]
    Status { status: StatusCode, reason: String },
    /// A typed endpoint promised JSON of a known shape and got something
    /// else back.
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}
