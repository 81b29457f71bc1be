//! # folderhub-entity
//!
//! Domain entity models for FolderHub: the folder record and the
//! tree structures used for hierarchical display.

pub mod folder;

pub use folder::{Folder, FolderNode, FolderTree};
