//! # folderhub-store
//!
//! The in-memory multi-tenant folder store. Construction takes a flat
//! collection of folder records, validates them, and derives the tree
//! from their materialized paths. After that the store answers listing
//! and descendant queries and executes subtree moves.
//!
//! ```
//! use folderhub_core::types::TenantId;
//! use folderhub_entity::Folder;
//! use folderhub_store::FolderStore;
//!
//! let tenant = TenantId::new();
//! let store = FolderStore::from_records(vec![
//!     Folder::root("alpha", tenant),
//!     Folder::at_path("bravo", tenant, "alpha.bravo"),
//! ])
//! .expect("valid records");
//!
//! let moved = store.move_folder(tenant, "bravo", "alpha").expect("move");
//! assert_eq!(moved.len(), 2);
//! ```

mod query;
mod relocate;
mod store;

pub use store::FolderStore;
