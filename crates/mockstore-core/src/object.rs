//! Value types exchanged with [`LocalObjectStore`](crate::store::LocalObjectStore).

use std::collections::HashMap;

use bytes::Bytes;
use typed_builder::TypedBuilder;

use crate::error::ObjectStoreResult;
use crate::store::LocalObjectStore;

/// Metadata field carrying the object size in bytes.
pub const CONTENT_LENGTH: &str = "content-length";

/// Per-call options.
///
/// # Examples
///
/// ```
/// use mockstore_core::object::ObjectOptions;
///
/// let opts = ObjectOptions::builder().content_type("text/csv").build();
/// assert_eq!(opts.content_type.as_deref(), Some("text/csv"));
/// assert!(!opts.copy_acl);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
pub struct ObjectOptions {
    /// Explicit content type; inferred from the key when `None`.
    #[builder(default, setter(strip_option, into))]
    pub content_type: Option<String>,

    /// Carry the source ACL over on copy. ACLs are not modeled, so this is
    /// accepted and ignored.
    #[builder(default)]
    pub copy_acl: bool,
}

/// Content returned by a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectValue {
    /// The full object content.
    pub body: Bytes,
}

impl ObjectValue {
    /// Wrap fetched content.
    #[must_use]
    pub fn new(body: Bytes) -> Self {
        Self { body }
    }

    /// The object content.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the object is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The content as UTF-8, if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Metadata derived from the filesystem entry.
///
/// Holds a single `content-length` field whose value is the decimal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata(HashMap<String, String>);

impl ObjectMetadata {
    /// Metadata for an object of `size` bytes.
    #[must_use]
    pub fn with_content_length(size: u64) -> Self {
        Self(HashMap::from([(CONTENT_LENGTH.to_owned(), size.to_string())]))
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `content-length` field parsed as a number.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.get(CONTENT_LENGTH).and_then(|v| v.parse().ok())
    }

    /// The underlying field map.
    #[must_use]
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    /// Consume into the underlying field map.
    #[must_use]
    pub fn into_map(self) -> HashMap<String, String> {
        self.0
    }
}

/// Identity of an object known to exist at the time it was found.
///
/// Holds no content and no file handle; every method re-resolves through the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHandle {
    bucket: String,
    key: String,
}

impl ObjectHandle {
    pub(crate) fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Bucket the object lives in.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fetch the object's content.
    ///
    /// # Errors
    ///
    /// Same as [`LocalObjectStore::value`].
    pub fn value(&self, store: &LocalObjectStore) -> ObjectStoreResult<ObjectValue> {
        store.value(&self.key, Some(&self.bucket), &ObjectOptions::default())
    }

    /// The object's metadata, or `None` if it has since been removed.
    #[must_use]
    pub fn about(&self, store: &LocalObjectStore) -> Option<ObjectMetadata> {
        store.about(&self.key, Some(&self.bucket))
    }

    /// The object's `file://` URL.
    #[must_use]
    pub fn url(&self, store: &LocalObjectStore) -> String {
        store.url_for(&self.key, Some(&self.bucket))
    }

    /// Delete the object.
    ///
    /// # Errors
    ///
    /// Same as [`LocalObjectStore::delete`].
    pub fn delete(&self, store: &LocalObjectStore) -> ObjectStoreResult<()> {
        store.delete(&self.key, Some(&self.bucket), &ObjectOptions::default())
    }
}
