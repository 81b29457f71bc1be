//! Unified error types for FolderHub.
//!
//! Every fallible operation in the workspace returns [`FolderError`].
//! Callers are expected to branch on [`FolderError::kind`], never on
//! message text.

use std::fmt;

use thiserror::Error;

use crate::types::TenantId;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The named folder does not exist in any organization.
    NotFound,
    /// The named folder exists, but only in a different organization.
    NotInOrganization,
    /// A move targeted a folder outside the source's organization.
    CannotMoveAcrossOrganizations,
    /// A move named the same folder as both source and destination.
    CannotMoveToItself,
    /// A move targeted a folder inside the source's own subtree.
    CannotMoveToOwnDescendant,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry).
    Conflict,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::NotInOrganization => write!(f, "NOT_IN_ORGANIZATION"),
            Self::CannotMoveAcrossOrganizations => write!(f, "CANNOT_MOVE_ACROSS_ORGANIZATIONS"),
            Self::CannotMoveToItself => write!(f, "CANNOT_MOVE_TO_ITSELF"),
            Self::CannotMoveToOwnDescendant => write!(f, "CANNOT_MOVE_TO_OWN_DESCENDANT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// The unified error type used throughout FolderHub.
///
/// Operational errors (`NotFound` through `CannotMoveToOwnDescendant`)
/// are expected, recoverable outcomes of queries and moves. Load-time
/// errors (`Validation`, `DuplicateName`, `MissingParent`) abort store
/// construction instead of surfacing lazily.
#[derive(Debug, Error)]
pub enum FolderError {
    /// No folder with this name exists in any organization.
    #[error("folder '{name}' does not exist")]
    NotFound {
        /// The requested folder name.
        name: String,
    },

    /// A folder with this name exists, but not in the requested organization.
    #[error("folder '{name}' does not exist in the specified organization")]
    NotInOrganization {
        /// The requested folder name.
        name: String,
    },

    /// The move destination belongs to a different organization.
    #[error("cannot move folder '{name}' to a different organization")]
    CannotMoveAcrossOrganizations {
        /// The source folder name.
        name: String,
        /// The destination folder name.
        destination: String,
    },

    /// Source and destination resolved to the same folder.
    #[error("cannot move folder '{name}' to itself")]
    CannotMoveToItself {
        /// The folder name.
        name: String,
    },

    /// The destination lies inside the source's own subtree.
    #[error("cannot move folder '{name}' to its own descendant '{destination}'")]
    CannotMoveToOwnDescendant {
        /// The source folder name.
        name: String,
        /// The destination folder name.
        destination: String,
    },

    /// A folder record failed structural validation at load time.
    #[error("invalid folder record: {reason}")]
    Validation {
        /// Why the record was rejected.
        reason: String,
    },

    /// Two records in the same organization share a case-insensitive name.
    #[error("duplicate folder name '{name}' in organization {tenant_id}")]
    DuplicateName {
        /// The colliding (lowercased) folder name.
        name: String,
        /// The organization owning both records.
        tenant_id: TenantId,
    },

    /// A non-root path references a parent path no record owns.
    #[error("folder at '{path}' has no parent folder at '{parent}'")]
    MissingParent {
        /// The orphaned folder's full path.
        path: String,
        /// The computed parent path that could not be resolved.
        parent: String,
    },

    /// Configuration loading or parsing failed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolderError {
    /// The category of this error, for callers that branch on kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NotInOrganization { .. } => ErrorKind::NotInOrganization,
            Self::CannotMoveAcrossOrganizations { .. } => {
                ErrorKind::CannotMoveAcrossOrganizations
            }
            Self::CannotMoveToItself { .. } => ErrorKind::CannotMoveToItself,
            Self::CannotMoveToOwnDescendant { .. } => ErrorKind::CannotMoveToOwnDescendant,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::DuplicateName { .. } => ErrorKind::Conflict,
            Self::MissingParent { .. } => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Create a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<config::ConfigError> for FolderError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
