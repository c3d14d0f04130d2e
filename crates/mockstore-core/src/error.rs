//! Object store error types.
//!
//! Defines [`ObjectStoreError`], the error enum returned by every fallible
//! operation in this crate. Only the logical conditions of an object store are
//! modeled (invalid key, missing key); everything the filesystem reports is
//! passed through untranslated as [`ObjectStoreError::Io`].
//!
//! # Usage
//!
//! ```
//! use mockstore_core::error::ObjectStoreError;
//!
//! let err = ObjectStoreError::NoSuchKey {
//!     bucket: "my-bucket".to_owned(),
//!     key: "missing.txt".to_owned(),
//! };
//! assert!(err.is_not_found());
//! assert!(err.to_string().contains("missing.txt"));
//! ```

use std::io;

/// Object store error type.
#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    /// The key does not satisfy the key validation policy.
    #[error("Invalid key `{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// The rule that was violated.
        reason: String,
    },

    /// An explicitly supplied bucket cannot be used as a directory segment.
    #[error("Invalid bucket `{bucket}': {reason}")]
    InvalidBucket {
        /// The rejected bucket name.
        bucket: String,
        /// The rule that was violated.
        reason: String,
    },

    /// No object exists for the given identity.
    #[error("No such key `{key}' in bucket `{bucket}'")]
    NoSuchKey {
        /// Bucket that was searched.
        bucket: String,
        /// The key that was not found.
        key: String,
    },

    /// Underlying filesystem failure, surfaced as-is.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ObjectStoreError {
    /// Whether this error means the object is absent.
    ///
    /// True for [`NoSuchKey`](Self::NoSuchKey) and for filesystem errors of
    /// kind [`io::ErrorKind::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NoSuchKey { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::InvalidKey { .. } | Self::InvalidBucket { .. } => false,
        }
    }

    /// The underlying I/O error kind, if this is a filesystem failure.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Convenience result type for object store operations.
pub type ObjectStoreResult<T> = Result<T, ObjectStoreError>;
