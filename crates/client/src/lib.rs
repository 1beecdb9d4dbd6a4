/**
 * HTTP client for the password-manager backend.
 *  - `ApiClient` and the `ApiRequest` trait
 *  - one request type per backend endpoint
 *  - response-body normalization (JSON / plain text / empty)
 */
pub mod api;
/**
 * Collection state machine: which category is selected,
 *  which sites are displayed, and how a search term
 *  changes both. Owns nothing but in-memory state; every
 *  read and write goes through the `ApiClient`.
 */
pub mod controller;
/**
 * Random password generation for new credential entries.
 */
pub mod generator;
/**
 * Wire-level data model: categories, sites, and the
 *  backend-assigned opaque identifiers both carry.
 */
pub mod model;

pub mod prelude {
    pub use crate::api::{ApiClient, ApiError, ApiRequest, Normalized, SiteList};
    pub use crate::controller::{CollectionController, SelectionState, View};
    pub use crate::generator::generate_password;
    pub use crate::model::{Category, Id, Site, SiteDraft};
}
