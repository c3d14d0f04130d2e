//! Key to filesystem path mapping.
//!
//! [`ObjectPaths`] maps `(bucket, key)` onto
//! `<root>/tmp/mock-object-store/<bucket>/<key>`. Resolution is pure: it never
//! touches the filesystem, so it can be used to decide whether directories
//! need to be created.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::StoreConfig;

/// Directory under the storage root that holds every bucket.
pub const STORE_DIR: &str = "tmp/mock-object-store";

/// Resolves object identities to filesystem paths.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use mockstore_core::config::StoreConfig;
/// use mockstore_core::path::ObjectPaths;
///
/// let paths = ObjectPaths::new(&StoreConfig::builder().root("/srv").build());
/// assert_eq!(
///     paths.resolve(Some("b"), "dir/k.txt"),
///     PathBuf::from("/srv/tmp/mock-object-store/b/dir/k.txt"),
/// );
/// assert_eq!(
///     paths.resolve(None, "k"),
///     PathBuf::from("/srv/tmp/mock-object-store/default/k"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ObjectPaths {
    base: PathBuf,
    default_bucket: String,
}

impl ObjectPaths {
    /// Create a resolver from the store configuration.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let mut base = config.root.clone();
        base.extend(STORE_DIR.split('/'));
        Self {
            base,
            default_bucket: config.default_bucket.clone(),
        }
    }

    /// `<root>/tmp/mock-object-store`.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// The configured default bucket.
    #[must_use]
    pub fn default_bucket(&self) -> &str {
        &self.default_bucket
    }

    /// The bucket an operation acts on: the given one, or the default.
    #[must_use]
    pub fn bucket_name<'a>(&'a self, bucket: Option<&'a str>) -> &'a str {
        bucket.unwrap_or(&self.default_bucket)
    }

    /// Resolve `(bucket, key)` to the object's file path.
    ///
    /// `/` inside the key is a directory separator. Empty segments (as in
    /// `a//b` or a trailing `/`) are skipped by the join.
    #[must_use]
    pub fn resolve(&self, bucket: Option<&str>, key: &str) -> PathBuf {
        let bucket = self.bucket_name(bucket);
        let mut path = self.base.join(bucket);
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        trace!(bucket, key, path = %path.display(), "resolved object path");
        path
    }
}
