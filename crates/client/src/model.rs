//! Wire-level data model for the password-manager backend.
//!
//! Every identifier here is assigned by the backend and treated as opaque:
//! the client never generates one and never inspects its contents, it only
//! carries them back in URL paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A backend-assigned identifier.
///
/// The backend is free to use numbers or strings; the client accepts both
/// and renders them verbatim when building endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

impl std::str::FromStr for Id {
    type Err = std::convert::Infallible;

    /// Digits become a numeric id, anything else a textual one. Cannot
    /// fail: the backend decides what an id looks like, not this parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => Id::Number(n),
            Err(_) => Id::Text(s.to_string()),
        })
    }
}

/// A named grouping of credential entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
}

/// A stored credential entry.
///
/// `created_at` is optional on the wire: rows created before the backend
/// started stamping them come back without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Id,
    pub name: String,
    pub url: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    pub category_id: Id,
}

/// The POST body for creating a site.
///
/// No id, no category (the category rides in the URL path) and no creation
/// time; the backend assigns all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDraft {
    pub name: String,
    pub url: String,
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub description: String,
}

impl SiteDraft {
    /// Build a draft the way the stock front end does: the display name is
    /// the URL itself. A shortcut of that producer, not a rule the backend
    /// or this client enforces.
    pub fn for_url(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            name: url.clone(),
            url,
            user: user.into(),
            password: password.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let n: Id = serde_json::from_str("7").unwrap();
        assert_eq!(n, Id::Number(7));

        let s: Id = serde_json::from_str("\"c9b2\"").unwrap();
        assert_eq!(s, Id::Text("c9b2".to_string()));
    }

    #[test]
    fn id_displays_without_decoration() {
        assert_eq!(Id::from(42).to_string(), "42");
        assert_eq!(Id::from("abc").to_string(), "abc");
    }

    #[test]
    fn id_parses_digits_as_numbers() {
        assert_eq!("17".parse::<Id>().unwrap(), Id::Number(17));
        assert_eq!("c9b2".parse::<Id>().unwrap(), Id::Text("c9b2".to_string()));
    }

    #[test]
    fn site_deserializes_camel_case() {
        let raw = r#"{
            "id": 3,
            "name": "github.com",
            "url": "github.com",
            "user": "bob",
            "password": "hunter2",
            "description": "work account",
            "createdAt": "2024-05-01T12:00:00Z",
            "categoryId": 1
        }"#;
        let site: Site = serde_json::from_str(raw).unwrap();
        assert_eq!(site.user, "bob");
        assert_eq!(site.category_id, Id::Number(1));
        assert!(site.created_at.is_some());
    }

    #[test]
    fn site_tolerates_missing_optional_fields() {
        let raw = r#"{
            "id": "a1",
            "name": "gmail.com",
            "url": "gmail.com",
            "user": "alice",
            "password": "s3cret",
            "categoryId": "cat-2"
        }"#;
        let site: Site = serde_json::from_str(raw).unwrap();
        assert_eq!(site.description, "");
        assert!(site.created_at.is_none());
    }

    #[test]
    fn draft_for_url_sets_name_to_url() {
        let draft = SiteDraft::for_url("example.org", "eve", "pw", "");
        assert_eq!(draft.name, "example.org");
        assert_eq!(draft.url, "example.org");
    }
}
