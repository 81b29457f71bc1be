//! Shared domain types: identifiers and folder paths.

pub mod id;
pub mod path;

pub use id::TenantId;
pub use path::FolderPath;
