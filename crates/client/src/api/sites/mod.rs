//! Site (credential entry) endpoints.
//!
//! Listing rides on the category routes (`GET /categories/{id}` returns
//! the sites *in* that category, not the category itself, a quirk of the
//! backend contract), deletion on `/sites/{id}`. There is no single-site
//! GET; callers wanting one entry list and pick.

pub mod create;
pub mod delete;
pub mod list;
pub mod list_all;

// Re-export for convenience
pub use create::CreateRequest;
pub use delete::DeleteRequest;
pub use list::ListRequest;
pub use list_all::ListAllRequest;
