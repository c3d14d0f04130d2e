//! Validation for object keys and bucket names.
//!
//! Keys are joined onto the bucket directory segment by segment, so a key may
//! contain `/` to emulate hierarchy. Anything that would let the resolved path
//! leave `<root>/tmp/mock-object-store/<bucket>/` (a leading `/`, a `.` or
//! `..` segment, a NUL byte) is rejected, as is an empty segment, which the
//! resolver would drop and so alias another key.

use crate::error::{ObjectStoreError, ObjectStoreResult};

/// Maximum object key length in bytes.
pub const MAX_KEY_BYTES: usize = 1024;

/// Validate an object key before it is stored.
///
/// Rules:
/// - 1-1024 bytes in length
/// - plus every rule of [`check_key_path`]
///
/// # Errors
///
/// Returns [`ObjectStoreError::InvalidKey`] naming the violated rule.
///
/// # Examples
///
/// ```
/// use mockstore_core::validation::validate_object_key;
///
/// assert!(validate_object_key("photos/2024/image.jpg").is_ok());
/// assert!(validate_object_key("").is_err());
/// assert!(validate_object_key("../escape").is_err());
/// ```
pub fn validate_object_key(key: &str) -> ObjectStoreResult<()> {
    if key.is_empty() {
        return Err(invalid_key(key, "Object key must not be empty"));
    }

    if key.len() > MAX_KEY_BYTES {
        return Err(invalid_key(
            key,
            format!(
                "Object key must not exceed {MAX_KEY_BYTES} bytes, got {}",
                key.len()
            ),
        ));
    }

    check_key_path(key)
}

/// Reject keys that would resolve outside their bucket directory.
///
/// This is the subset of [`validate_object_key`] applied to every
/// path-consuming operation, not just stores.
///
/// # Errors
///
/// Returns [`ObjectStoreError::InvalidKey`] if the key contains a NUL byte,
/// starts with `/`, has an empty segment (`a//b`, `dir/`), or has a `.` or
/// `..` segment. An empty key passes; [`validate_object_key`] rejects it.
pub fn check_key_path(key: &str) -> ObjectStoreResult<()> {
    if key.contains('\0') {
        return Err(invalid_key(key, "Object key must not contain NUL bytes"));
    }

    if key.starts_with('/') {
        return Err(invalid_key(key, "Object key must not start with '/'"));
    }

    // Empty segments are dropped by the resolver, so `dir/` would alias `dir`.
    if !key.is_empty() && key.split('/').any(str::is_empty) {
        return Err(invalid_key(
            key,
            "Object key must not contain empty path segments",
        ));
    }

    if key.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(invalid_key(
            key,
            "Object key must not contain '.' or '..' path segments",
        ));
    }

    Ok(())
}

/// Validate a bucket name, given or defaulted, as a single directory segment.
///
/// # Errors
///
/// Returns [`ObjectStoreError::InvalidBucket`] if the name is empty, is `.` or
/// `..`, or contains `/` or a NUL byte.
pub fn check_bucket_name(bucket: &str) -> ObjectStoreResult<()> {
    let reason = if bucket.is_empty() {
        "Bucket name must not be empty"
    } else if bucket == "." || bucket == ".." {
        "Bucket name must not be '.' or '..'"
    } else if bucket.contains('/') {
        "Bucket name must not contain '/'"
    } else if bucket.contains('\0') {
        "Bucket name must not contain NUL bytes"
    } else {
        return Ok(());
    };

    Err(ObjectStoreError::InvalidBucket {
        bucket: bucket.to_owned(),
        reason: reason.to_owned(),
    })
}

fn invalid_key(key: &str, reason: impl Into<String>) -> ObjectStoreError {
    ObjectStoreError::InvalidKey {
        key: key.to_owned(),
        reason: reason.into(),
    }
}
