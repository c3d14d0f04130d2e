//! Object lifecycle operations on the local filesystem.
//!
//! Every operation is a single resolve-then-act step: the `(bucket, key)`
//! pair is mapped to a path by [`ObjectPaths`], one filesystem call is made,
//! and its outcome is returned. Nothing is cached, retried, or locked.
//! Concurrent callers on the same identity see whatever the filesystem does:
//! two stores may interleave, and a delete racing a fetch makes the fetch fail.
//!
//! Filesystem failures are not translated. Fetching, streaming, copying, or
//! deleting a missing object yields [`ObjectStoreError::Io`] with
//! [`std::io::ErrorKind::NotFound`]; only [`LocalObjectStore::find`] reports
//! [`ObjectStoreError::NoSuchKey`].

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::chunks::ChunkReader;
use crate::config::StoreConfig;
use crate::content_type::infer_content_type;
use crate::error::{ObjectStoreError, ObjectStoreResult};
use crate::object::{ObjectHandle, ObjectMetadata, ObjectOptions, ObjectValue};
use crate::path::ObjectPaths;
use crate::validation::{check_bucket_name, check_key_path, validate_object_key};

/// Object store backed by a directory tree.
///
/// Cheap to clone; clones share the same resolver.
///
/// # Examples
///
/// ```
/// use mockstore_core::config::StoreConfig;
/// use mockstore_core::object::ObjectOptions;
/// use mockstore_core::store::LocalObjectStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = LocalObjectStore::new(&StoreConfig::builder().root(dir.path()).build());
/// let opts = ObjectOptions::default();
///
/// store.store("hello.txt", "hello", Some("b"), &opts).unwrap();
/// assert!(store.exists("hello.txt", Some("b")));
/// assert_eq!(store.value("hello.txt", Some("b"), &opts).unwrap().as_str(), Some("hello"));
/// ```
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    paths: Arc<ObjectPaths>,
}

impl LocalObjectStore {
    /// Create a store rooted at `config.root`.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let paths = ObjectPaths::new(config);
        debug!(
            base = %paths.base_dir().display(),
            default_bucket = paths.default_bucket(),
            "creating LocalObjectStore"
        );
        Self {
            paths: Arc::new(paths),
        }
    }

    /// Create a store from [`StoreConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&StoreConfig::from_env())
    }

    /// The path resolver used by this store.
    #[must_use]
    pub fn paths(&self) -> &ObjectPaths {
        &self.paths
    }

    /// Where `(bucket, key)` lives on disk. Pure; does not check the key.
    #[must_use]
    pub fn path_for(&self, key: &str, bucket: Option<&str>) -> PathBuf {
        self.paths.resolve(bucket, key)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Store `data` under `(bucket, key)`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// - [`ObjectStoreError::InvalidKey`] / [`ObjectStoreError::InvalidBucket`]
    ///   before anything is created.
    /// - [`ObjectStoreError::Io`] if a directory or the file cannot be written.
    ///   Parent directories created before the failure are left in place.
    pub fn store(
        &self,
        key: &str,
        data: impl AsRef<[u8]>,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<()> {
        let path = self.prepare_write(key, bucket, options)?;
        let data = data.as_ref();

        let mut file = File::create(&path)?;
        file.write_all(data)?;

        debug!(
            bucket = self.paths.bucket_name(bucket),
            key,
            size = data.len(),
            "stored object"
        );
        Ok(())
    }

    /// Store the content of `reader` under `(bucket, key)`.
    ///
    /// The source is copied through a fixed buffer, never held in memory as a
    /// whole. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`store`](Self::store), plus read errors from `reader`.
    pub fn store_reader(
        &self,
        key: &str,
        mut reader: impl Read,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<u64> {
        let path = self.prepare_write(key, bucket, options)?;

        let mut file = File::create(&path)?;
        let size = io::copy(&mut reader, &mut file)?;

        debug!(
            bucket = self.paths.bucket_name(bucket),
            key,
            size,
            "stored object from stream"
        );
        Ok(size)
    }

    /// Copy `(bucket, key)` to `(bucket, copy_key)`.
    ///
    /// Both identities share the bucket. The destination becomes an
    /// independent object. Returns the number of bytes copied.
    ///
    /// # Errors
    ///
    /// - [`ObjectStoreError::InvalidKey`] if either key is unusable.
    /// - [`ObjectStoreError::Io`] if the source is missing or the destination
    ///   cannot be written. Destination directories may already exist.
    pub fn copy(
        &self,
        key: &str,
        copy_key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<u64> {
        validate_object_key(copy_key)?;
        let source = self.checked_path(key, bucket)?;
        let target = self.checked_path(copy_key, bucket)?;

        if options.copy_acl {
            trace!(key, copy_key, "copy_acl requested; ACLs are not modeled");
        }

        // fs::copy onto itself truncates the file.
        if source == target {
            return Ok(fs::metadata(&source)?.len());
        }

        create_parent_dirs(&target)?;
        let size = fs::copy(&source, &target)?;

        debug!(
            bucket = self.paths.bucket_name(bucket),
            key,
            copy_key,
            size,
            "copied object"
        );
        Ok(size)
    }

    /// Delete `(bucket, key)`.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::Io`] if the object does not exist; deleting twice
    /// fails the second time.
    pub fn delete(
        &self,
        key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<()> {
        let path = self.checked_path(key, bucket)?;
        fs::remove_file(&path)?;

        debug!(
            bucket = self.paths.bucket_name(bucket),
            key,
            ?options,
            "deleted object"
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Fetch the whole object.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::Io`] if the object is missing or unreadable.
    pub fn value(
        &self,
        key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<ObjectValue> {
        let path = self.checked_path(key, bucket)?;
        trace!(bucket = self.paths.bucket_name(bucket), key, ?options, "fetching object");
        let body = fs::read(&path)?;
        Ok(ObjectValue::new(Bytes::from(body)))
    }

    /// Stream the object without a consumer: returns the full content.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::Io`] if the object is missing or unreadable.
    pub fn stream(
        &self,
        key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<Bytes> {
        self.value(key, bucket, options).map(|v| v.body)
    }

    /// Stream the object to `consumer` in [`CHUNK_SIZE`](crate::chunks::CHUNK_SIZE)
    /// chunks, in order.
    ///
    /// Each chunk is handed over before the next one is read. An empty object
    /// produces no calls. Returns the total number of bytes delivered.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::Io`] if the object cannot be opened or a read
    /// fails midway; chunks delivered before the failure stay delivered.
    pub fn stream_chunks<F>(
        &self,
        key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
        mut consumer: F,
    ) -> ObjectStoreResult<u64>
    where
        F: FnMut(&[u8]),
    {
        trace!(bucket = self.paths.bucket_name(bucket), key, ?options, "streaming object");
        let mut total = 0u64;
        for chunk in self.open_chunks(key, bucket)? {
            let chunk = chunk?;
            total += chunk.len() as u64;
            consumer(&chunk);
        }
        Ok(total)
    }

    /// Open the object as an iterator of chunks.
    ///
    /// The file stays open until the iterator is dropped.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::Io`] if the object cannot be opened.
    pub fn open_chunks(
        &self,
        key: &str,
        bucket: Option<&str>,
    ) -> ObjectStoreResult<ChunkReader<File>> {
        let path = self.checked_path(key, bucket)?;
        Ok(ChunkReader::new(File::open(&path)?))
    }

    /// Whether a regular file exists for `(bucket, key)`. Never fails.
    #[must_use]
    pub fn exists(&self, key: &str, bucket: Option<&str>) -> bool {
        self.checked_path(key, bucket)
            .is_ok_and(|path| path.is_file())
    }

    /// `{"content-length": "<size>"}` for an existing object, otherwise `None`.
    #[must_use]
    pub fn about(&self, key: &str, bucket: Option<&str>) -> Option<ObjectMetadata> {
        if !self.exists(key, bucket) {
            return None;
        }
        let path = self.paths.resolve(bucket, key);
        // The file may disappear between the check and the stat.
        let meta = fs::metadata(&path).ok()?;
        Some(ObjectMetadata::with_content_length(meta.len()))
    }

    /// A `file://` URL naming the object's absolute path.
    ///
    /// For display only; the object need not exist.
    #[must_use]
    pub fn url_for(&self, key: &str, bucket: Option<&str>) -> String {
        let path = self.paths.resolve(bucket, key);
        let path = std::path::absolute(&path).unwrap_or(path);
        format!("file://{}", path.display())
    }

    /// A handle for `(bucket, key)` if the object exists.
    ///
    /// # Errors
    ///
    /// [`ObjectStoreError::NoSuchKey`] carrying the bucket and key.
    pub fn find(&self, key: &str, bucket: Option<&str>) -> ObjectStoreResult<ObjectHandle> {
        let bucket = self.paths.bucket_name(bucket);
        if !self.exists(key, Some(bucket)) {
            return Err(ObjectStoreError::NoSuchKey {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            });
        }
        Ok(ObjectHandle::new(bucket, key))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Resolve after rejecting identities that would escape the bucket.
    ///
    /// The bucket is checked after the default is substituted, so a bad
    /// configured default is caught too.
    fn checked_path(&self, key: &str, bucket: Option<&str>) -> ObjectStoreResult<PathBuf> {
        check_bucket_name(self.paths.bucket_name(bucket))?;
        check_key_path(key)?;
        Ok(self.paths.resolve(bucket, key))
    }

    /// Validate, resolve, infer the content type, and create parent dirs.
    fn prepare_write(
        &self,
        key: &str,
        bucket: Option<&str>,
        options: &ObjectOptions,
    ) -> ObjectStoreResult<PathBuf> {
        validate_object_key(key)?;
        let path = self.checked_path(key, bucket)?;

        // No sidecar metadata file; the inferred type is only logged.
        let options = infer_content_type(key, options);
        trace!(key, content_type = ?options.content_type, "inferred content type");

        create_parent_dirs(&path)?;
        Ok(path)
    }
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}
