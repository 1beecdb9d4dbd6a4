//! Response-body normalization.
//!
//! The backend is not consistent about reply shapes: list endpoints return
//! JSON, mutation endpoints variously return the touched entity, a bare
//! acknowledgement string such as `OK`, or an empty body. Everything a 2xx
//! response can carry is folded into [`Normalized`] here, once, so no call
//! site ever sniffs a body again.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use crate::model::Site;

/// The unified result of a successful backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The response body was empty.
    Empty,
    /// The body parsed as JSON.
    Json(Value),
    /// The body was non-empty but not JSON; carried verbatim. Not an
    /// error: plain-text acknowledgements are a valid reply here.
    Text(String),
}

impl Normalized {
    /// Resolve a raw body. Order matters: empty wins over the JSON
    /// attempt, and a failed parse falls back to the untouched text.
    pub fn from_body(text: String) -> Self {
        if text.is_empty() {
            return Normalized::Empty;
        }
        match serde_json::from_str(&text) {
            Ok(value) => Normalized::Json(value),
            Err(_) => Normalized::Text(text),
        }
    }

    /// Short tag for log lines and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Normalized::Empty => "empty",
            Normalized::Json(_) => "json",
            Normalized::Text(_) => "text",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Empty)
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Empty => Ok(()),
            Normalized::Json(value) => write!(f, "{}", value),
            Normalized::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Site listings arrive either as a bare array or wrapped in an object,
/// depending on the backend version. Both shapes are accepted here and
/// nowhere else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SiteList {
    Direct(Vec<Site>),
    Wrapped { sites: Vec<Site> },
}

impl SiteList {
    pub fn into_vec(self) -> Vec<Site> {
        match self {
            SiteList::Direct(sites) => sites,
            SiteList::Wrapped { sites } => sites,
        }
    }
}

/// Decode a normalized reply that must be JSON of a known shape.
pub fn decode_json<T: DeserializeOwned>(normalized: Normalized) -> Result<T, ApiError> {
    match normalized {
        Normalized::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::UnexpectedBody(e.to_string()))
        }
        Normalized::Empty => Err(ApiError::UnexpectedBody(
            "empty body where JSON was expected".to_string(),
        )),
        Normalized::Text(text) => Err(ApiError::UnexpectedBody(format!(
            "plain text where JSON was expected: {}",
            text
        ))),
    }
}
