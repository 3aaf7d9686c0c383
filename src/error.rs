//! Error types for object encoding and storage.

use crate::artifacts::objects::object_id::ObjectId;

/// Errors raised while building, encoding, storing or loading objects.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// A tree entry name that would break the tree layout.
    #[error("invalid tree entry name {name:?}: {reason}")]
    InvalidEntryName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A tree already holds an entry with this name.
    #[error("duplicate tree entry {0:?}")]
    DuplicateEntry(String),

    /// Unknown tree entry mode.
    #[error("invalid entry mode {0:?}")]
    InvalidMode(String),

    /// Not a 40 character hexadecimal digest.
    #[error("invalid object id {0:?}")]
    InvalidObjectId(String),

    /// Illegal bytes in a structural position of an object.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Stored bytes fail to decompress or disagree with their header.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// The requested object is not in the store.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// A commit parent that is not a stored commit.
    #[error("dangling parent: {0} is not a stored commit")]
    DanglingParent(ObjectId),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ObjectError>;
