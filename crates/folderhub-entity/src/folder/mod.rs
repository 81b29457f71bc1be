//! Folder entity and tree display structures.

pub mod model;
pub mod tree;

pub use model::Folder;
pub use tree::{FolderNode, FolderTree};
