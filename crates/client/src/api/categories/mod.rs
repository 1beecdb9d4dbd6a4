//! Category endpoints.
//!
//! Categories are plain `{id, name}` groupings; deleting one cascades to
//! its sites on the backend side, never in the client.

pub mod create;
pub mod delete;
pub mod list;

// Re-export for convenience
pub use create::CreateRequest;
pub use delete::DeleteRequest;
pub use list::ListRequest;
