//! Convenience result type alias for FolderHub.

use crate::error::FolderError;

/// A specialized `Result` type for FolderHub operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, FolderError>` explicitly.
pub type FolderResult<T> = Result<T, FolderError>;
