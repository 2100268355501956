//! Error types for the tree layer.

use std::fmt;

/// What kind of entry a failed lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A path segment that should name a folder.
    Folder,
    /// A direct child of the resolved folder, file or folder.
    Item,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Folder => write!(f, "Folder"),
            EntryKind::Item => write!(f, "Item"),
        }
    }
}

/// Errors from decoding or editing a tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw structure is not a well-formed node or tree.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// A path segment or named item could not be found.
    #[error("{kind} {name} not found")]
    NotFound { kind: EntryKind, name: String },
}

impl Error {
    pub(crate) fn folder_not_found(name: impl Into<String>) -> Self {
        Error::NotFound {
            kind: EntryKind::Folder,
            name: name.into(),
        }
    }

    pub(crate) fn item_not_found(name: impl Into<String>) -> Self {
        Error::NotFound {
            kind: EntryKind::Item,
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Decode {
            message: error.to_string(),
        }
    }
}
